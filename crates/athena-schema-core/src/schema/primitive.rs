/// Scalar types with a fixed column type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    String,
    /// A byte sequence, stored as text
    Bytes,
    /// An instant in time
    Timestamp,
}

/// Printable type names that resolve directly to a primitive.
///
/// Named types are looked up here before their definition is expanded, so an
/// alias of a well known type (a timestamp wrapper, for instance) resolves
/// without looking at its underlying representation.
static NAMED: &[(&str, Primitive)] = &[
    ("bool", Primitive::Bool),
    ("i8", Primitive::I8),
    ("i16", Primitive::I16),
    ("i32", Primitive::I32),
    ("i64", Primitive::I64),
    ("isize", Primitive::Isize),
    ("u8", Primitive::U8),
    ("u16", Primitive::U16),
    ("u32", Primitive::U32),
    ("u64", Primitive::U64),
    ("usize", Primitive::Usize),
    ("f32", Primitive::F32),
    ("f64", Primitive::F64),
    ("char", Primitive::String),
    ("str", Primitive::String),
    ("String", Primitive::String),
    ("std::string::String", Primitive::String),
    ("Bytes", Primitive::Bytes),
    ("bytes::Bytes", Primitive::Bytes),
    ("Timestamp", Primitive::Timestamp),
    ("jiff::Timestamp", Primitive::Timestamp),
    ("Zoned", Primitive::Timestamp),
    ("jiff::Zoned", Primitive::Timestamp),
    ("DateTime", Primitive::Timestamp),
    ("chrono::DateTime", Primitive::Timestamp),
    ("NaiveDateTime", Primitive::Timestamp),
    ("chrono::NaiveDateTime", Primitive::Timestamp),
    ("SystemTime", Primitive::Timestamp),
    ("std::time::SystemTime", Primitive::Timestamp),
    ("OffsetDateTime", Primitive::Timestamp),
    ("time::OffsetDateTime", Primitive::Timestamp),
    ("PrimitiveDateTime", Primitive::Timestamp),
    ("time::PrimitiveDateTime", Primitive::Timestamp),
];

impl Primitive {
    /// Looks up a primitive by printable type name.
    pub fn from_name(name: &str) -> Option<Primitive> {
        NAMED
            .iter()
            .find(|(named, _)| *named == name)
            .map(|(_, primitive)| *primitive)
    }

    /// The Athena column type for this primitive.
    pub fn column_type(self) -> &'static str {
        match self {
            Primitive::Bool => "boolean",
            Primitive::I8
            | Primitive::I16
            | Primitive::I32
            | Primitive::I64
            | Primitive::Isize
            | Primitive::U8
            | Primitive::U16
            | Primitive::U32
            | Primitive::U64
            | Primitive::Usize => "int",
            Primitive::F32 => "float",
            Primitive::F64 => "double",
            Primitive::String | Primitive::Bytes => "string",
            Primitive::Timestamp => "timestamp",
        }
    }

    /// The name used when printing types in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::I8 => "i8",
            Primitive::I16 => "i16",
            Primitive::I32 => "i32",
            Primitive::I64 => "i64",
            Primitive::Isize => "isize",
            Primitive::U8 => "u8",
            Primitive::U16 => "u16",
            Primitive::U32 => "u32",
            Primitive::U64 => "u64",
            Primitive::Usize => "usize",
            Primitive::F32 => "f32",
            Primitive::F64 => "f64",
            Primitive::String => "String",
            Primitive::Bytes => "Vec<u8>",
            Primitive::Timestamp => "Timestamp",
        }
    }
}

impl core::fmt::Display for Primitive {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_printable_name() {
        assert_eq!(Primitive::from_name("bytes::Bytes"), Some(Primitive::Bytes));
        assert_eq!(Primitive::from_name("jiff::Timestamp"), Some(Primitive::Timestamp));

        // Named types never carry generic arguments
        assert_eq!(Primitive::from_name("Vec<u8>"), None);
    }
}
