use super::{Column, Name};

use serde::{Deserialize, Serialize};

/// The resolution result for one requested record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table name
    pub name: String,

    /// Storage folder name, used to build the table location
    pub folder: String,

    /// Columns in field declaration order
    pub columns: Vec<Column>,
}

/// A record requested for table generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRequest {
    /// Name of the record type
    pub type_name: String,

    /// Table name override. Defaults to the snake_case type name.
    pub table_name: Option<String>,

    /// Folder name override. Defaults to the table name.
    pub folder_name: Option<String>,
}

impl TableRequest {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            table_name: None,
            folder_name: None,
        }
    }

    /// Set the table name override
    pub fn table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = Some(name.into());
        self
    }

    /// Set the folder name override
    pub fn folder_name(mut self, name: impl Into<String>) -> Self {
        self.folder_name = Some(name.into());
        self
    }

    /// The table name: the override when present and not empty, otherwise the
    /// snake_case type name.
    pub fn resolved_table_name(&self) -> String {
        match self.table_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                let ident = self.type_name.rsplit("::").next().unwrap_or_default();
                Name::new(ident).snake_case()
            }
        }
    }

    /// The folder name: the override when present and not empty, otherwise
    /// the table name.
    pub fn resolved_folder_name(&self) -> String {
        match self.folder_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.resolved_table_name(),
        }
    }
}
