use super::{Field, Primitive};

/// A declared field type
#[derive(Debug, Clone, PartialEq)]
pub enum Ty {
    /// A scalar with a fixed column type
    Primitive(Primitive),

    /// An ordered collection, variable or fixed length
    Sequence(Box<Ty>),

    /// An associative collection
    Mapping(Box<Ty>, Box<Ty>),

    /// An inline record
    Record(Vec<Field>),

    /// A pointer, box or optional value. Never visible in the column type.
    Reference(Box<Ty>),

    /// A type referred to by name. The definition lives in the
    /// [`Schema`](super::Schema), unless the name is a known primitive.
    Named(String),

    /// Any kind without a column mapping (functions, trait objects, tuples,
    /// ...), described by its printable form
    Unsupported(String),
}

impl Ty {
    pub fn sequence(elem: impl Into<Ty>) -> Ty {
        Ty::Sequence(Box::new(elem.into()))
    }

    pub fn mapping(key: impl Into<Ty>, value: impl Into<Ty>) -> Ty {
        Ty::Mapping(Box::new(key.into()), Box::new(value.into()))
    }

    pub fn reference(target: impl Into<Ty>) -> Ty {
        Ty::Reference(Box::new(target.into()))
    }

    pub fn named(name: impl Into<String>) -> Ty {
        Ty::Named(name.into())
    }

    pub fn unsupported(description: impl Into<String>) -> Ty {
        Ty::Unsupported(description.into())
    }

    /// Strips any number of references.
    pub fn deref(&self) -> &Ty {
        let mut ty = self;
        while let Ty::Reference(target) = ty {
            ty = target;
        }
        ty
    }
}

impl From<Primitive> for Ty {
    fn from(value: Primitive) -> Self {
        Ty::Primitive(value)
    }
}

impl core::fmt::Display for Ty {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Ty::Primitive(primitive) => core::fmt::Display::fmt(primitive, f),
            Ty::Sequence(elem) => write!(f, "[{elem}]"),
            Ty::Mapping(key, value) => write!(f, "Map<{key}, {value}>"),
            Ty::Record(fields) => {
                f.write_str("struct {")?;
                let mut s = " ";
                for field in fields {
                    write!(f, "{s}{}: {}", field.name, field.ty)?;
                    s = ", ";
                }
                if !fields.is_empty() {
                    f.write_str(" ")?;
                }
                f.write_str("}")
            }
            Ty::Reference(target) => write!(f, "&{target}"),
            Ty::Named(name) => f.write_str(name),
            Ty::Unsupported(description) => f.write_str(description),
        }
    }
}
