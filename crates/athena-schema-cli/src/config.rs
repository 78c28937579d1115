use athena_schema_sql::Options;

/// Defaults for a generation run. Command line flags take precedence.
#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Tag keys and extra type mappings used while resolving
    pub resolve: athena_schema_core::Config,

    /// DDL rendering options
    pub ddl: Options,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolution configuration
    pub fn resolve(mut self, resolve: athena_schema_core::Config) -> Self {
        self.resolve = resolve;
        self
    }

    /// Set the DDL rendering options
    pub fn ddl(mut self, ddl: Options) -> Self {
        self.ddl = ddl;
        self
    }
}
