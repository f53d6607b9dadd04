//! Schema file import and export.
//!
//! The only side-effecting operations in the crate. Both read and write
//! raw [`serde_json::Value`]s; feeding an imported value to
//! [`parse_schema`](crate::parse_schema) (or
//! [`SchemaBuilder::replace_schema`](crate::SchemaBuilder::replace_schema))
//! is the caller's next step.

use std::fs;
use std::path::Path;

use serde_json::Value;

/// Errors from reading or writing a schema file.
#[derive(Debug, thiserror::Error)]
pub enum SchemaFileError {
    /// The file could not be read or written.
    #[error("schema file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file's contents are not valid JSON.
    #[error("schema file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads a JSON value from a file.
///
/// The value is returned as-is; malformed or non-schema JSON is the
/// parser's concern, which degrades gracefully by contract.
///
/// # Errors
///
/// Returns [`SchemaFileError::Io`] when the file cannot be read and
/// [`SchemaFileError::Json`] when its contents are not valid JSON.
pub fn import_schema_file(path: impl AsRef<Path>) -> Result<Value, SchemaFileError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Writes a schema to a file as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`SchemaFileError::Io`] when the file cannot be written.
pub fn export_schema_file(path: impl AsRef<Path>, schema: &Value) -> Result<(), SchemaFileError> {
    let contents = serde_json::to_string_pretty(schema)?;
    fs::write(path, contents)?;
    Ok(())
}
