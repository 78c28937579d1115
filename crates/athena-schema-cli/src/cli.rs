use athena_schema_core::TableRequest;
use athena_schema_sql::{Options, Serde};
use clap::{ArgAction, Parser, ValueEnum};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

const NAME: &str = "athena-schema";

#[derive(Parser, Debug)]
#[command(name = NAME)]
#[command(about = "Generate Athena table definitions from Rust record types")]
#[command(version)]
#[command(after_help = "Examples:\n  athena-schema --type User [directory]\n  athena-schema --type User files...")]
pub struct Cli {
    /// Comma separated list of type names
    #[arg(long = "type", value_name = "TYPES", value_delimiter = ',', required = true)]
    pub types: Vec<String>,

    /// Comma separated list of table names; an empty name uses the default
    #[arg(long = "table", value_name = "TABLES", value_delimiter = ',')]
    pub tables: Vec<String>,

    /// Comma separated list of folder names; an empty name uses the table name
    #[arg(long = "folder", value_name = "FOLDERS", value_delimiter = ',')]
    pub folders: Vec<String>,

    /// Folder name prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Folder name suffix
    #[arg(long)]
    pub suffix: Option<String>,

    /// Location root the folders live in, e.g. `s3://bucket/`
    #[arg(long)]
    pub location: Option<String>,

    /// Output file; `-` writes to stdout [default: <dir>/<type>_athena.sql]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Ddl)]
    pub format: Format,

    /// Row format serde: `openx`, `hive` or a class name
    #[arg(long)]
    pub serde: Option<Serde>,

    /// Tag key holding the column name override
    #[arg(long)]
    pub json_key: Option<String>,

    /// Tag key holding the column type override
    #[arg(long)]
    pub athena_key: Option<String>,

    /// Map a named type straight to a column type (repeatable)
    #[arg(long = "map-type", value_name = "NAME=TYPE", value_parser = parse_mapping)]
    pub map_types: Vec<(String, String)>,

    /// Increase logging verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// A single directory, or a list of source files [default: .]
    pub inputs: Vec<PathBuf>,

    /// The command line, recorded in the generated code header
    #[arg(skip)]
    pub command_line: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `CREATE EXTERNAL TABLE` statements
    Ddl,

    /// JSON table descriptions
    Json,
}

impl Cli {
    /// Parses the arguments, exiting with a usage message on error. The
    /// first argument is the program name.
    pub fn from_args<I, T>(args: I) -> Cli
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        let mut cli = Cli::parse_from(args.clone());
        cli.command_line = command_line(&args);
        cli
    }

    /// Default log filter for the verbosity level
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// The file to write, or `None` for stdout.
    ///
    /// Defaults to `<snake_case first type>_athena.<ext>` in the input
    /// directory (the directory of the first file when files are given).
    pub fn output_path(&self) -> Option<PathBuf> {
        match self.output.as_deref() {
            Some(path) if path == Path::new("-") => None,
            Some(path) => Some(path.to_path_buf()),
            None => {
                let first = self.types.first().map(String::as_str).unwrap_or_default();
                let name = TableRequest::new(first).resolved_table_name();
                let ext = match self.format {
                    Format::Ddl => "sql",
                    Format::Json => "json",
                };
                Some(self.dir().join(format!("{name}_athena.{ext}")))
            }
        }
    }

    /// The input directory
    fn dir(&self) -> PathBuf {
        match self.inputs.as_slice() {
            [] => PathBuf::from("."),
            [dir] if dir.is_dir() => dir.clone(),
            [file, ..] => match file.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            },
        }
    }

    pub(crate) fn resolve_config(
        &self,
        mut config: athena_schema_core::Config,
    ) -> athena_schema_core::Config {
        if let Some(key) = &self.json_key {
            config.tag_keys.name = key.clone();
        }
        if let Some(key) = &self.athena_key {
            config.tag_keys.ty = key.clone();
        }
        for (name, ty) in &self.map_types {
            config = config.map_type(name, ty);
        }
        config
    }

    pub(crate) fn ddl_options(&self, mut options: Options) -> Options {
        options.header = Some(self.command_line.clone());
        if let Some(location) = &self.location {
            options.location = location.clone();
        }
        if let Some(prefix) = &self.prefix {
            options.prefix = prefix.clone();
        }
        if let Some(suffix) = &self.suffix {
            options.suffix = suffix.clone();
        }
        if let Some(serde) = &self.serde {
            options.serde = serde.clone();
        }
        options
    }
}

/// `NAME=TYPE`
fn parse_mapping(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, ty)) if !name.is_empty() && !ty.is_empty() => {
            Ok((name.to_string(), ty.to_string()))
        }
        _ => Err(format!("invalid mapping `{s}`; expected NAME=TYPE")),
    }
}

/// The program name followed by the arguments, as written in the generated
/// code header.
fn command_line(args: &[OsString]) -> String {
    std::iter::once(NAME.to_string())
        .chain(args.iter().skip(1).map(|arg| arg.to_string_lossy().into_owned()))
        .collect::<Vec<_>>()
        .join(" ")
}
