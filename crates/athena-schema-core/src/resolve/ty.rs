use super::Resolver;
use crate::{Error, Field, Primitive, Result, Ty};

impl<'a> Resolver<'a> {
    /// Maps the declared type of `field` to a column type string.
    ///
    /// `field` is only used to name the offending field when resolution
    /// fails.
    pub fn ty(&mut self, field: &'a Field, ty: &'a Ty) -> Result<String> {
        match ty {
            Ty::Primitive(primitive) => Ok(primitive.column_type().to_string()),
            Ty::Sequence(elem) => {
                let elem = self.ty(field, elem)?;
                Ok(format!("array<{elem}>"))
            }
            Ty::Mapping(key, value) => {
                let key = self.ty(field, key)?;
                let value = self.ty(field, value)?;
                Ok(format!("map<{key}, {value}>"))
            }
            Ty::Record(fields) => self.record(fields),
            Ty::Reference(target) => self.ty(field, target),
            Ty::Named(name) => self.named(field, name),
            Ty::Unsupported(_) => Err(Error::unresolvable_type(&field.name, ty.to_string())),
        }
    }

    /// Formats the columns of a nested record as `struct<name: type, ...>`.
    fn record(&mut self, fields: &'a [Field]) -> Result<String> {
        let columns = self.columns(fields)?;
        let columns: Vec<_> = columns.iter().map(ToString::to_string).collect();

        Ok(format!("struct<{}>", columns.join(", ")))
    }

    fn named(&mut self, field: &'a Field, name: &'a str) -> Result<String> {
        if let Some(column_ty) = self.lookup(name) {
            return Ok(column_ty.to_string());
        }

        let Some(def) = self.schema.def(name) else {
            return Err(Error::unresolvable_type(&field.name, name));
        };

        log::trace!("expanding `{}` for field `{}`", def.name, field.name);
        self.expand(def, |this| this.ty(field, &def.ty))
    }

    /// Looks up a named type in the configured type map, then in the
    /// primitive table.
    pub(super) fn lookup(&self, name: &str) -> Option<&'a str> {
        self.config
            .mapped_type(name)
            .or_else(|| Primitive::from_name(name).map(Primitive::column_type))
    }
}
