use indexmap::IndexMap;

/// Configuration for a resolution run
#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Tag keys consulted for name and type overrides
    pub tag_keys: TagKeys,

    /// Extra named types mapped directly to a column type, consulted before
    /// the built-in primitive table. Keys are printable type names such as
    /// `http::HeaderMap` or `Decimal`.
    pub type_map: IndexMap<String, String>,
}

/// Names of the tag keys read from each field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagKeys {
    /// Serialization name key; its first comma separated segment overrides
    /// the column name
    pub name: String,

    /// Type override key; its value replaces the resolved column type
    pub ty: String,
}

impl Default for TagKeys {
    fn default() -> Self {
        Self {
            name: "json".to_string(),
            ty: "athena".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag keys
    pub fn tag_keys(mut self, tag_keys: TagKeys) -> Self {
        self.tag_keys = tag_keys;
        self
    }

    /// Map a named type directly to a column type
    pub fn map_type(mut self, name: impl Into<String>, column_ty: impl Into<String>) -> Self {
        self.type_map.insert(name.into(), column_ty.into());
        self
    }

    /// Looks up the column type registered for a named type, if any.
    pub(crate) fn mapped_type(&self, name: &str) -> Option<&str> {
        self.type_map.get(name).map(String::as_str)
    }
}

impl TagKeys {
    /// Create the default tag keys (`json` and `athena`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the serialization name key
    pub fn name(mut self, key: impl Into<String>) -> Self {
        self.name = key.into();
        self
    }

    /// Set the type override key
    pub fn ty(mut self, key: impl Into<String>) -> Self {
        self.ty = key.into();
        self
    }
}
