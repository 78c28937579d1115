mod column;
mod ty;

use crate::{schema::TypeDef, Config, Error, Result, Schema, Table, TableRequest, Ty};

/// Resolves record definitions into tables.
///
/// The resolver keeps track of the named types being expanded on the current
/// path so that self-referential records are reported instead of recursing
/// forever. The same type may still appear any number of times on different
/// branches (two `User` fields in one record, for example).
#[derive(Debug)]
pub struct Resolver<'a> {
    schema: &'a Schema,
    config: &'a Config,

    /// Named types currently being expanded, outermost first
    stack: Vec<&'a str>,
}

/// Resolves every request in order. Fails on the first error: no partial
/// output is produced.
pub fn generate(schema: &Schema, config: &Config, requests: &[TableRequest]) -> Result<Vec<Table>> {
    let mut resolver = Resolver::new(schema, config);
    requests
        .iter()
        .map(|request| resolver.table(request))
        .collect()
}

impl<'a> Resolver<'a> {
    pub fn new(schema: &'a Schema, config: &'a Config) -> Self {
        Self {
            schema,
            config,
            stack: vec![],
        }
    }

    /// Builds the table for one requested record.
    pub fn table(&mut self, request: &TableRequest) -> Result<Table> {
        let def = self.schema.record_def(&request.type_name)?;
        let name = request.resolved_table_name();
        let folder = request.resolved_folder_name();

        log::debug!(
            "resolving table `{name}` from `{}` (folder `{folder}`)",
            request.type_name
        );

        let columns = self
            .expand(def, |this| match &def.ty {
                Ty::Record(fields) => this.columns(fields),
                _ => Err(Error::not_a_record(&request.type_name)),
            })
            .map_err(|err| err.context(err!("failed to resolve table `{name}`")))?;

        debug_assert!(self.stack.is_empty());

        Ok(Table {
            name,
            folder,
            columns,
        })
    }

    /// Runs `f` with `def` pushed on the expansion path, failing if `def` is
    /// already being expanded.
    fn expand<T>(
        &mut self,
        def: &'a TypeDef,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        if let Some(pos) = self.stack.iter().position(|name| *name == def.name) {
            let path = self.stack[pos..]
                .iter()
                .copied()
                .chain([def.name.as_str()]);
            return Err(Error::cyclic_type(path));
        }

        self.stack.push(&def.name);
        let ret = f(self);
        self.stack.pop();
        ret
    }
}
