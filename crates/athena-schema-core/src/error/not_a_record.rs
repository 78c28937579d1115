use super::Error;

/// Error when a requested type exists but is not a record (an enum, an alias
/// of a primitive, ...), so no table can be built from it.
#[derive(Debug)]
pub(super) struct NotARecordError {
    name: Box<str>,
}

impl std::error::Error for NotARecordError {}

impl core::fmt::Display for NotARecordError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "type `{}` is not a record", self.name)
    }
}

impl Error {
    /// Creates a not-a-record error.
    pub fn not_a_record(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotARecord(NotARecordError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a
    /// not-a-record error.
    pub fn is_not_a_record(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::NotARecord(_)))
    }
}
