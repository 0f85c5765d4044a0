//! JSON loading, encoding and saving, with optional gzip wrapping.

use std::io::{Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;

use super::error::{DocumentError, Result};
use super::text::{create_file, load_text, write_file, DOCUMENT_MODE};
use crate::value::Value;

/// Decode a JSON buffer.
pub fn json_from_bytes(bytes: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode `value` as JSON indented by `indent` spaces; `0` gives compact
/// output.
pub fn json_to_bytes<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<Vec<u8>> {
    if indent == 0 {
        return Ok(serde_json::to_vec(value)?);
    }
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Re-indent a JSON buffer, keeping key order and number spelling.
pub fn json_reindent(bytes: &[u8], indent: usize) -> Result<Vec<u8>> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    json_to_bytes(&value, indent)
}

/// Load and decode a JSON file.
pub fn load_json(path: impl AsRef<Path>) -> Result<Value> {
    json_from_bytes(&load_text(path)?)
}

/// Load and decode a gzip-compressed JSON file.
pub fn load_json_gzip(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let compressed = load_text(path)?;
    let mut bytes = Vec::new();
    GzDecoder::new(compressed.as_slice())
        .read_to_end(&mut bytes)
        .map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!(
        "inflated {} to {} bytes",
        path.display(),
        bytes.len()
    );
    json_from_bytes(&bytes)
}

/// Save `value` as compact JSON, readable by the owner only.
pub fn save_json<T: Serialize + ?Sized>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let bytes = json_to_bytes(value, 0)?;
    write_file(path.as_ref(), &bytes, DOCUMENT_MODE)
}

/// Save `value` as gzip-compressed compact JSON.
pub fn save_json_gzip<T: Serialize + ?Sized>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = json_to_bytes(value, 0)?;
    let file = create_file(path, DOCUMENT_MODE)?;
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder
        .write_all(&bytes)
        .and_then(|_| encoder.finish().map(drop))
        .map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })
}
