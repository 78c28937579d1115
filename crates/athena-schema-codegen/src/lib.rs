//! Reads record definitions from Rust source code.
//!
//! Every `struct`, `enum` and `type` item of the parsed files becomes a
//! definition in an [`athena_schema_core::Schema`]. Field attributes provide
//! the tags used for name and type overrides:
//!
//! ```ignore
//! struct Post {
//!     #[serde(rename = "author_info")]
//!     author: User,
//!
//!     #[athena(type = "timestamp")]
//!     updated_at: String,
//!
//!     #[serde(skip)]
//!     cache: Vec<u8>,
//! }
//! ```

mod schema;

use athena_schema_core::{Error, Result, Schema};
use std::path::{Path, PathBuf};

/// Builds the definition graph from an already parsed file.
pub fn from_ast(file: &syn::File) -> Schema {
    let mut schema = Schema::new();
    schema::items(&file.items, &mut schema);
    schema
}

/// Parses Rust source text.
pub fn parse_str(src: &str) -> Result<Schema> {
    parse_source(src, "<input>")
}

/// Parses a single Rust source file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Schema> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path)
        .map_err(|err| Error::io(err).context(format!("failed to read {}", path.display())))?;

    parse_source(&src, &path.display().to_string())
}

/// Parses every `.rs` file directly inside `dir`, in file name order.
pub fn parse_dir(dir: impl AsRef<Path>) -> Result<Schema> {
    let dir = dir.as_ref();
    let read_err = |err| Error::io(err).context(format!("cannot process directory {}", dir.display()));

    let mut files = vec![];
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(Error::invalid_source(
            dir.display().to_string(),
            "no Rust source files",
        ));
    }

    files.sort();
    parse_files(&files)
}

/// Parses the given inputs: either a single directory, or a list of files.
pub fn parse_paths(paths: &[PathBuf]) -> Result<Schema> {
    match paths {
        [] => parse_dir("."),
        [dir] if dir.is_dir() => parse_dir(dir),
        files => parse_files(files),
    }
}

fn parse_files(files: &[PathBuf]) -> Result<Schema> {
    let mut schema = Schema::new();

    for file in files {
        log::debug!("parsing {}", file.display());
        schema.extend(parse_file(file)?);
    }

    Ok(schema)
}

fn parse_source(src: &str, location: &str) -> Result<Schema> {
    let file = syn::parse_file(src).map_err(|err| {
        let start = err.span().start();
        Error::invalid_source(
            format!("{location}:{}:{}", start.line, start.column + 1),
            err.to_string(),
        )
    })?;

    let schema = from_ast(&file);
    log::debug!("{location}: {} definitions", schema.len());
    Ok(schema)
}
