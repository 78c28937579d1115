mod cli;
pub use cli::{Cli, Format};

mod config;
pub use config::Config;

use anyhow::{Context, Result};
use athena_schema_core::{generate, TableRequest};
use athena_schema_sql::Serializer;
use std::ffi::OsString;

/// Library for building `athena-schema` style command-line tools
#[derive(Debug, Default)]
pub struct AthenaSchemaCli {
    config: Config,
}

impl AthenaSchemaCli {
    /// Create a new AthenaSchemaCli instance with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new AthenaSchemaCli instance with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and execute the command from the process arguments
    pub fn parse_and_run(&self) -> Result<()> {
        self.run(Cli::from_args(std::env::args_os()))
    }

    /// Parse and execute the command from an iterator of arguments
    pub fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.run(Cli::from_args(args))
    }

    /// Generates the tables and writes them to the output.
    pub fn run(&self, cli: Cli) -> Result<()> {
        let src = self.render(&cli)?;

        match cli.output_path() {
            Some(path) => {
                std::fs::write(&path, src)
                    .with_context(|| format!("writing output {}", path.display()))?;
                log::info!("wrote {}", path.display());
            }
            None => print!("{src}"),
        }

        Ok(())
    }

    /// Parses the inputs, resolves every requested type and renders the
    /// result in the selected format.
    pub fn render(&self, cli: &Cli) -> Result<String> {
        let schema = athena_schema_codegen::parse_paths(&cli.inputs)?;
        log::debug!("{} definitions", schema.len());

        let requests = cli.requests();
        let config = cli.resolve_config(self.config.resolve.clone());
        let tables = generate(&schema, &config, &requests)?;

        Ok(match cli.format {
            Format::Ddl => {
                let options = cli.ddl_options(self.config.ddl.clone());
                Serializer::new(options).serialize(&tables)
            }
            Format::Json => athena_schema_sql::to_json(&tables)?,
        })
    }
}

impl Cli {
    fn requests(&self) -> Vec<TableRequest> {
        self.extra_names("table", &self.tables);
        self.extra_names("folder", &self.folders);

        self.types
            .iter()
            .enumerate()
            .map(|(i, type_name)| {
                let mut request = TableRequest::new(type_name);
                if let Some(table_name) = self.tables.get(i) {
                    request = request.table_name(table_name);
                }
                if let Some(folder_name) = self.folders.get(i) {
                    request = request.folder_name(folder_name);
                }
                request
            })
            .collect()
    }

    /// Number of `names` without a matching type. They are ignored with a
    /// warning.
    fn extra_names(&self, kind: &str, names: &[String]) -> usize {
        let extra = names.len().saturating_sub(self.types.len());
        if extra > 0 {
            log::warn!(
                "{} {kind} names given for {} types; ignoring the extra names",
                names.len(),
                self.types.len()
            );
        }
        extra
    }
}
