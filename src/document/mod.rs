//! Loading, checking, encoding, saving and printing documents.
//!
//! These are the steps that run before colorizing. All of them report
//! failures as [`DocumentError`] so the caller can print the error and skip
//! colored output; nothing here panics or exits.
//!
//! # Example
//!
//! ```
//! use utl::document::{json_to_bytes, write_bytes_color};
//! use utl::value::Value;
//! use utl::yaml::Colorizer;
//!
//! let value: Value = serde_json::from_str(r#"{"ok": true}"#)?;
//! let bytes = json_to_bytes(&value, 2)?;
//!
//! let mut out = Vec::new();
//! write_bytes_color(&mut out, &bytes, &Colorizer::default())?;
//! assert!(String::from_utf8(out)?.contains("\x1b[95m true\x1b[0m"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod json;
mod text;
mod yaml;

use std::io::Write;

use serde::Serialize;

use crate::yaml::Colorizer;

pub use error::{DocumentError, Result};
pub use json::{
    json_from_bytes, json_reindent, json_to_bytes, load_json, load_json_gzip, save_json,
    save_json_gzip,
};
pub use text::{load_text, save_text, DOCUMENT_MODE, TEXT_MODE};
pub use yaml::{check_yaml, load_yaml, load_yaml_bytes, save_yaml, yaml_from_bytes, yaml_to_bytes};

/// Default JSON indentation width.
pub const DEFAULT_INDENT: usize = 2;

/// Write `text`, ending it with a newline if it lacks one.
fn write_line<W: Write + ?Sized>(writer: &mut W, text: &[u8]) -> Result<()> {
    writer.write_all(text)?;
    if !text.ends_with(b"\n") {
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Print `value` as indented JSON.
pub fn write_json<W, T>(writer: &mut W, value: &T, indent: usize) -> Result<()>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    write_line(writer, &json_to_bytes(value, indent)?)
}

/// Print `value` as YAML.
pub fn write_yaml<W, T>(writer: &mut W, value: &T) -> Result<()>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    write_line(writer, &yaml_to_bytes(value)?)
}

/// Print a YAML or JSON buffer in color.
///
/// The caller is responsible for the buffer being valid (see
/// [`check_yaml`]). Empty input writes nothing.
pub fn write_bytes_color<W: Write + ?Sized>(
    writer: &mut W,
    bytes: &[u8],
    colorizer: &Colorizer,
) -> Result<()> {
    let colored = colorizer.colorize(bytes);
    if colored.is_empty() {
        return Ok(());
    }
    write_line(writer, colored.as_bytes())
}

/// Print `value` as indented JSON in color.
pub fn write_json_color<W, T>(
    writer: &mut W,
    value: &T,
    indent: usize,
    colorizer: &Colorizer,
) -> Result<()>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    let bytes = json_to_bytes(value, indent)?;
    write_bytes_color(writer, &bytes, colorizer)
}

/// Print `value` as YAML in color.
pub fn write_yaml_color<W, T>(writer: &mut W, value: &T, colorizer: &Colorizer) -> Result<()>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    let bytes = yaml_to_bytes(value)?;
    write_bytes_color(writer, &bytes, colorizer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{strip_ansi, Palette};
    use crate::value::Value;

    fn sample() -> Value {
        serde_json::from_str(r#"{"name": "utl", "size": 3}"#).unwrap()
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&mut out, &sample(), 2).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n  \"name\": \"utl\",\n  \"size\": 3\n}\n"
        );
    }

    #[test]
    fn test_write_yaml() {
        let mut out = Vec::new();
        write_yaml(&mut out, &sample()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "name: utl\nsize: 3\n");
    }

    #[test]
    fn test_write_yaml_color_strips_to_plain() {
        let mut out = Vec::new();
        write_yaml_color(&mut out, &sample(), &Colorizer::default()).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_ne!(out, "name: utl\nsize: 3\n");
        assert_eq!(strip_ansi(&out), "name: utl\nsize: 3\n");
    }

    #[test]
    fn test_write_json_color_monochrome() {
        let mut out = Vec::new();
        let colorizer = Colorizer::new(Palette::monochrome());
        write_json_color(&mut out, &sample(), 0, &colorizer).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"name\":\"utl\",\"size\":3}\n"
        );
    }

    #[test]
    fn test_write_bytes_color_empty() {
        let mut out = Vec::new();
        write_bytes_color(&mut out, b"", &Colorizer::default()).unwrap();
        assert!(out.is_empty());
    }
}
