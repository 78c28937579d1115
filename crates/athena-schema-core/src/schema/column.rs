use serde::{Deserialize, Serialize};

/// A resolved table column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, snake_case or taken from the name override
    pub name: String,

    /// Athena column type, ready to be written into DDL
    /// (`int`, `array<string>`, `struct<a: int>`, ...)
    #[serde(rename = "type")]
    pub ty: String,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl core::fmt::Display for Column {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}
