//! YAML loading, encoding and saving.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::text::{load_text, write_file, DOCUMENT_MODE};
use crate::value::Value;

/// Decode the first document of a YAML buffer.
///
/// Later documents of a multi-document stream are ignored; an empty stream
/// decodes to [`Value::Null`].
pub fn yaml_from_bytes(bytes: &[u8]) -> Result<Value> {
    match serde_yaml_ng::Deserializer::from_slice(bytes).next() {
        Some(document) => Ok(Value::deserialize(document)?),
        None => Ok(Value::Null),
    }
}

/// Encode `value` as YAML (two-space indentation).
pub fn yaml_to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_yaml_ng::to_string(value)?.into_bytes())
}

/// Strictly parse every document in `bytes`, discarding the result.
///
/// Used before printing a buffer's source text, so broken input is reported
/// instead of being colorized.
pub fn check_yaml(bytes: &[u8]) -> Result<()> {
    for document in serde_yaml_ng::Deserializer::from_slice(bytes) {
        Value::deserialize(document)?;
    }
    Ok(())
}

/// Load and decode a YAML file.
pub fn load_yaml(path: impl AsRef<Path>) -> Result<Value> {
    yaml_from_bytes(&load_text(path)?)
}

/// Load a YAML (or JSON) file as raw bytes, comments included, after
/// checking that it parses.
pub fn load_yaml_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let bytes = load_text(path)?;
    check_yaml(&bytes)?;
    Ok(bytes)
}

/// Save `value` as YAML, readable by the owner only.
pub fn save_yaml<T: Serialize + ?Sized>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let bytes = yaml_to_bytes(value)?;
    write_file(path.as_ref(), &bytes, DOCUMENT_MODE)
}
