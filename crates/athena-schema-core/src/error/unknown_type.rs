use super::Error;

/// Error when a requested type name has no definition in the source.
#[derive(Debug)]
pub(super) struct UnknownTypeError {
    name: Box<str>,
}

impl std::error::Error for UnknownTypeError {}

impl core::fmt::Display for UnknownTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown type `{}`", self.name)
    }
}

impl Error {
    /// Creates an unknown type error.
    pub fn unknown_type(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownType(UnknownTypeError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an unknown
    /// type error.
    pub fn is_unknown_type(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::UnknownType(_)))
    }
}
