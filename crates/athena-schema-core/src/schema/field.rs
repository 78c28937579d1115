use super::{Tags, Ty};

/// A record member as seen by the resolver
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Identifier the field is declared with, e.g. `CreatedAt` or
    /// `created_at`
    pub name: String,

    /// Declared type
    pub ty: Ty,

    /// Field tags, used for name and type overrides
    pub tags: Tags,

    /// True when the field's record columns are spliced into the containing
    /// record instead of producing a nested `struct<...>` column
    pub embedded: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<Ty>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            tags: Tags::new(),
            embedded: false,
        }
    }

    /// Set the field tags
    pub fn tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    /// Add a single tag
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key, value);
        self
    }

    /// Mark the field as embedded
    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }
}
