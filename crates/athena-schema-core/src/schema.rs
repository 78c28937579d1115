mod column;
pub use column::Column;

mod field;
pub use field::Field;

mod name;
pub use name::Name;

mod primitive;
pub use primitive::Primitive;

mod table;
pub use table::{Table, TableRequest};

mod tags;
pub use tags::Tags;

mod ty;
pub use ty::Ty;

use crate::{Error, Result};

use indexmap::IndexMap;

/// The record definition graph.
///
/// Maps type names to their definitions. The graph is built once from the
/// source and only read afterwards; references between definitions go through
/// [`Ty::Named`], so self-referential records are representable (and rejected
/// during resolution).
#[derive(Debug, Default, Clone)]
pub struct Schema {
    defs: IndexMap<String, TypeDef>,
}

/// A named type definition
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDef {
    /// Name the type is declared with
    pub name: String,

    /// The underlying type. Records are `Ty::Record`, aliases carry the
    /// aliased type.
    pub ty: Ty,
}

impl TypeDef {
    pub fn new(name: impl Into<String>, ty: Ty) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// A record definition with the given fields
    pub fn record(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self::new(name, Ty::Record(fields))
    }

    pub fn is_record(&self) -> bool {
        matches!(self.ty, Ty::Record(_))
    }
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition. When a definition with the same name already exists
    /// the first one is kept.
    pub fn insert(&mut self, def: TypeDef) {
        if self.defs.contains_key(&def.name) {
            log::warn!("duplicate definition of `{}`; keeping the first", def.name);
            return;
        }

        self.defs.insert(def.name.clone(), def);
    }

    /// Adds every definition of `other`, with the same precedence rules as
    /// [`Schema::insert`].
    pub fn extend(&mut self, other: Schema) {
        for def in other.defs.into_values() {
            self.insert(def);
        }
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterates over the definitions in insertion order
    pub fn defs(&self) -> impl ExactSizeIterator<Item = &TypeDef> + '_ {
        self.defs.values()
    }

    /// Looks up a definition by its printable name.
    ///
    /// Path-qualified names (`models::User`) fall back to their last segment,
    /// since definitions are keyed by the identifier they are declared with.
    pub fn def(&self, name: &str) -> Option<&TypeDef> {
        self.defs.get(name).or_else(|| {
            let (_, last) = name.rsplit_once("::")?;
            self.defs.get(last)
        })
    }

    /// Returns the fields of the record named `name`.
    ///
    /// Aliases are followed (`type Account = User;` makes `Account` a
    /// record). Anything that does not end at a record is rejected.
    pub fn record(&self, name: &str) -> Result<&[Field]> {
        match &self.record_def(name)?.ty {
            Ty::Record(fields) => Ok(fields),
            _ => Err(Error::not_a_record(name)),
        }
    }

    /// Returns the record definition `name` refers to, following aliases.
    pub fn record_def(&self, name: &str) -> Result<&TypeDef> {
        let mut current = self.def(name).ok_or_else(|| Error::unknown_type(name))?;
        let mut seen = vec![current.name.as_str()];

        loop {
            match &current.ty {
                Ty::Record(_) => return Ok(current),
                Ty::Named(target) => {
                    current = self.def(target).ok_or_else(|| Error::not_a_record(name))?;

                    if seen.contains(&current.name.as_str()) {
                        seen.push(&current.name);
                        return Err(Error::cyclic_type(seen));
                    }
                    seen.push(&current.name);
                }
                _ => return Err(Error::not_a_record(name)),
            }
        }
    }
}

impl FromIterator<TypeDef> for Schema {
    fn from_iter<T: IntoIterator<Item = TypeDef>>(iter: T) -> Self {
        let mut schema = Schema::new();
        for def in iter {
            schema.insert(def);
        }
        schema
    }
}
