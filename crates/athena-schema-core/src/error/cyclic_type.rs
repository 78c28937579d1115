use super::Error;

/// Error when a record contains itself, directly or through other records.
///
/// The path lists the named types being expanded, outermost first, and ends
/// with the name that closed the cycle.
#[derive(Debug)]
pub(super) struct CyclicTypeError {
    path: Box<[Box<str>]>,
}

impl std::error::Error for CyclicTypeError {}

impl core::fmt::Display for CyclicTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("cyclic type: ")?;
        let mut s = "";
        for name in &self.path {
            write!(f, "{s}{name}")?;
            s = " -> ";
        }
        Ok(())
    }
}

impl Error {
    /// Creates a cyclic type error from the expansion path.
    pub fn cyclic_type<I>(path: I) -> Error
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Error::from(super::ErrorKind::CyclicType(CyclicTypeError {
            path: path.into_iter().map(|name| name.into().into()).collect(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a cyclic type
    /// error.
    pub fn is_cyclic_type(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::CyclicType(_)))
    }
}
