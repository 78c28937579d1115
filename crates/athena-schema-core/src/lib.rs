//! Type-to-column resolution for Athena table schemas.
//!
//! A [`Schema`] holds the record definitions read from source code. A
//! [`Resolver`] walks those definitions and produces one [`Table`] per
//! requested record, mapping every field to a column name and an Athena
//! column type string (`int`, `array<string>`, `struct<a: int>`, ...).

#[macro_use]
mod error;
pub use error::{Error, IntoError};

pub mod config;
pub use config::Config;

pub mod resolve;
pub use resolve::{generate, Resolver};

pub mod schema;
pub use schema::{Column, Field, Primitive, Schema, Table, TableRequest, Tags, Ty, TypeDef};

/// A Result type alias that uses athena-schema's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
