mod adhoc;
mod cyclic_type;
mod invalid_source;
mod io;
mod not_a_record;
mod unknown_type;
mod unresolvable_type;

use adhoc::AdhocError;
use cyclic_type::CyclicTypeError;
use invalid_source::InvalidSourceError;
use io::IoError;
use not_a_record::NotARecordError;
use std::sync::Arc;
use unknown_type::UnknownTypeError;
use unresolvable_type::UnresolvableTypeError;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from a format string.
///
/// Mostly used as the consequent passed to [`Error::context`].
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while generating a schema.
///
/// Every error is fatal for the current run: resolution is a pure function of
/// the definition graph, so there is nothing to retry and no partial output.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => {
                    assert!(
                        inner.cause.is_none(),
                        "consequent error must not already have a cause"
                    );
                    inner.kind
                }
                Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Returns `true` if any error in the context chain satisfies `f`.
    fn any(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| f(err.kind()))
    }

    #[doc(hidden)]
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args.to_string())))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    UnresolvableType(UnresolvableTypeError),
    UnknownType(UnknownTypeError),
    NotARecord(NotARecordError),
    CyclicType(CyclicTypeError),
    InvalidSource(InvalidSourceError),
    Io(IoError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            UnresolvableType(err) => core::fmt::Display::fmt(err, f),
            UnknownType(err) => core::fmt::Display::fmt(err, f),
            NotARecord(err) => core::fmt::Display::fmt(err, f),
            CyclicType(err) => core::fmt::Display::fmt(err, f),
            InvalidSource(err) => core::fmt::Display::fmt(err, f),
            Io(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown athena-schema error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::io(err)
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self.to_string())))
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        assert_eq!(
            core::mem::size_of::<usize>(),
            core::mem::size_of::<Error>()
        );
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("bad field: {}", 7));
        assert_eq!(err.to_string(), "bad field: 7");
    }

    #[test]
    fn error_chain_display() {
        let err = Error::unresolvable_type("Callback", "fn()")
            .context(err!("while expanding `Hook`"))
            .context("while resolving table \"hook\"");

        assert_eq!(
            err.to_string(),
            "while resolving table \"hook\": while expanding `Hook`: \
             no supported mapping for field `Callback` of type `fn()`"
        );
    }

    #[test]
    fn predicates_see_through_context() {
        let err = Error::cyclic_type(["Node", "Node"]).context(err!("outer"));

        assert!(err.is_cyclic_type());
        assert!(!err.is_unresolvable_type());
        assert!(err.root().is_cyclic_type());
    }

    #[test]
    fn shared_consequent_keeps_its_message() {
        let consequent = err!("shared context");
        let _clone = consequent.clone();

        let err = Error::unknown_type("Missing").context(consequent);
        assert_eq!(
            err.to_string(),
            "shared context: unknown type `Missing`"
        );
    }

    #[test]
    fn io_bridge() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        assert!(err.is_io());
        assert!(err.to_string().contains("file not found"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
