use super::Error;

#[derive(Debug)]
pub(super) struct IoError {
    inner: std::io::Error,
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)
    }
}

impl Error {
    /// Creates an error from an I/O failure.
    pub fn io(err: std::io::Error) -> Error {
        Error::from(super::ErrorKind::Io(IoError { inner: err }))
    }

    /// Returns `true` if this error, or any error it wraps, is an I/O error.
    pub fn is_io(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::Io(_)))
    }
}
