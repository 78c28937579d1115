use super::Resolver;
use crate::{schema::Name, Column, Error, Field, Result, Ty};

impl<'a> Resolver<'a> {
    /// Resolves the columns of a record, in declaration order. Dropped fields
    /// produce no column; embedded fields contribute the columns of the record
    /// they refer to.
    pub fn columns(&mut self, fields: &'a [Field]) -> Result<Vec<Column>> {
        let mut columns = Vec::with_capacity(fields.len());

        for field in fields {
            if field.embedded {
                if !self.is_dropped(field) {
                    self.embedded_columns(field, &field.ty, &mut columns)?;
                }
            } else if let Some(column) = self.column(field)? {
                columns.push(column);
            }
        }

        Ok(columns)
    }

    /// Resolves a single field, returning `None` when the field is dropped.
    ///
    /// The name override (first segment of the name tag) wins over the
    /// derived snake_case name, and the type override replaces the resolved
    /// type without looking at the declared type at all.
    pub fn column(&mut self, field: &'a Field) -> Result<Option<Column>> {
        if self.is_dropped(field) {
            log::trace!("dropping field `{}`", field.name);
            return Ok(None);
        }

        let name = self
            .name_override(field)
            .map(str::to_string)
            .unwrap_or_else(|| Name::new(&field.name).snake_case());

        let ty = match self.type_override(field) {
            Some(ty) => ty.to_string(),
            None => self.ty(field, &field.ty)?,
        };

        Ok(Some(Column { name, ty }))
    }

    fn is_dropped(&self, field: &Field) -> bool {
        self.name_override(field) == Some("-") || self.type_override(field) == Some("-")
    }

    fn name_override<'f>(&self, field: &'f Field) -> Option<&'f str> {
        let tag = field.tags.get(&self.config.tag_keys.name)?;
        let name = tag.split(',').next().unwrap_or_default();
        (!name.is_empty()).then_some(name)
    }

    fn type_override<'f>(&self, field: &'f Field) -> Option<&'f str> {
        let ty = field.tags.get(&self.config.tag_keys.ty)?;
        (!ty.is_empty()).then_some(ty)
    }

    /// Splices the columns of the record `ty` refers to into `out`.
    fn embedded_columns(
        &mut self,
        field: &'a Field,
        ty: &'a Ty,
        out: &mut Vec<Column>,
    ) -> Result<()> {
        match ty.deref() {
            Ty::Record(fields) => {
                out.extend(self.columns(fields)?);
                Ok(())
            }
            Ty::Named(name) if self.lookup(name).is_none() => {
                let Some(def) = self.schema.def(name) else {
                    return Err(Error::unresolvable_type(&field.name, name.as_str()));
                };
                self.expand(def, |this| this.embedded_columns(field, &def.ty, out))
            }
            other => Err(Error::unresolvable_type(
                &field.name,
                format!("embedded {other}"),
            )),
        }
    }
}
