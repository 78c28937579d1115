use super::Error;

/// Error when record definitions cannot be read from source code.
#[derive(Debug)]
pub(super) struct InvalidSourceError {
    location: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidSourceError {}

impl core::fmt::Display for InvalidSourceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid source {}: {}", self.location, self.message)
    }
}

impl Error {
    /// Creates an invalid source error. `location` is usually a file path,
    /// optionally followed by `:line:column`.
    pub fn invalid_source(location: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSource(InvalidSourceError {
            location: location.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an invalid
    /// source error.
    pub fn is_invalid_source(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::InvalidSource(_)))
    }
}
