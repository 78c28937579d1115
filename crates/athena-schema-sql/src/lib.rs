//! Renders resolved tables as Athena DDL or JSON.

mod json;
pub use json::to_json;

pub mod serializer;
pub use serializer::{Options, Serde, Serializer};
