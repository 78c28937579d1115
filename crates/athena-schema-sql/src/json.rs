use athena_schema_core::{Result, Table};

/// Renders tables as a pretty printed JSON array, one object per table with
/// its name, folder and columns.
pub fn to_json(tables: &[Table]) -> Result<String> {
    let mut ret = serde_json::to_string_pretty(tables)
        .map_err(|err| athena_schema_core::err!("failed to serialize tables: {err}"))?;
    ret.push('\n');
    Ok(ret)
}
