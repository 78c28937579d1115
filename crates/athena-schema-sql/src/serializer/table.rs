use super::{Formatter, Ident, Literal, ToSql};

use athena_schema_core::{Column, Table};

struct Columns<'a>(&'a [Column]);

impl ToSql for &Table {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.columns.is_empty() {
            log::warn!("table `{}` has no columns", self.name);
        }

        let serializer = f.serializer;
        let name = Ident(&self.name);
        let columns = Columns(&self.columns);
        let serde = Literal(serializer.options.serde.class_name());
        let location = Literal(serializer.location(self));

        fmt!(
            f, "CREATE EXTERNAL TABLE IF NOT EXISTS " name " (" columns ")\n"
            "ROW FORMAT SERDE " serde "\n"
            "LOCATION " location ";\n"
        );
    }
}

impl ToSql for Columns<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        for (index, column) in self.0.iter().enumerate() {
            fmt!(f, "\n  " column);
            if index < self.0.len() - 1 {
                fmt!(f, ",");
            }
        }

        fmt!(f, "\n");
    }
}

impl ToSql for &Column {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(&self.name);

        // Column types are emitted verbatim, including type overrides
        fmt!(f, name " " self.ty.as_str());
    }
}
