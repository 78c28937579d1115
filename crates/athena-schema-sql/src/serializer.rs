#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Delimited;

mod ident;
use ident::Ident;

mod literal;
use literal::Literal;

mod options;
pub use options::{Options, Serde};

// Fragment serializers
mod table;

use athena_schema_core::Table;

/// Serialize tables to `CREATE EXTERNAL TABLE` statements
#[derive(Debug, Default, Clone)]
pub struct Serializer {
    options: Options,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized DDL
    dst: &'a mut String,
}

impl Serializer {
    pub fn new(options: Options) -> Serializer {
        Serializer { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Serializes every table, in order, preceded by the generated code
    /// header when one is configured. Statements are separated by a blank
    /// line.
    pub fn serialize(&self, tables: &[Table]) -> String {
        let mut ret = String::new();

        let mut f = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        if let Some(header) = &self.options.header {
            fmt!(&mut f, "-- Code generated by \"" header.as_str() "\"; DO NOT EDIT.\n\n");
        }

        fmt!(&mut f, Delimited(tables, "\n"));

        ret
    }

    /// Serializes a single table without the header.
    pub fn serialize_table(&self, table: &Table) -> String {
        let mut ret = String::new();

        let mut f = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        fmt!(&mut f, table);

        ret
    }

    /// The storage location of a table:
    /// `<location><prefix><folder><suffix>/`.
    pub fn location(&self, table: &Table) -> String {
        let Options {
            location,
            prefix,
            suffix,
            ..
        } = &self.options;

        format!("{location}{prefix}{}{suffix}/", table.folder)
    }
}
