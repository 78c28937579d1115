use super::Error;

/// Error when a field's declared type has no column type mapping and the field
/// carries no type override.
///
/// This occurs when:
/// - The type is a function, trait object, tuple or other unsupported kind
/// - A named type is neither a known primitive nor defined in the source
/// - An embedded field does not refer to a record
#[derive(Debug)]
pub(super) struct UnresolvableTypeError {
    field: Box<str>,
    ty: Box<str>,
}

impl std::error::Error for UnresolvableTypeError {}

impl core::fmt::Display for UnresolvableTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no supported mapping for field `{}` of type `{}`",
            self.field, self.ty
        )
    }
}

impl Error {
    /// Creates an unresolvable type error for the field `field`, whose
    /// declared type prints as `ty`.
    pub fn unresolvable_type(field: impl Into<String>, ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnresolvableType(UnresolvableTypeError {
            field: field.into().into(),
            ty: ty.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an
    /// unresolvable type error.
    pub fn is_unresolvable_type(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::UnresolvableType(_)))
    }
}
