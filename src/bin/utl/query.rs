//! CLI handlers for the `search` and `merge` commands.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Parser;

use utl::document::{write_json_color, write_yaml_color, DEFAULT_INDENT};
use utl::value::{merge_objects, Value};
use utl::yaml::Colorizer;

use crate::input::load;
use crate::{exit_codes, OutputFormat};

/// Search string values in a document.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Document to search
    pub file: PathBuf,

    /// Text to look for
    pub needle: String,
}

/// Merge two documents' top-level keys.
#[derive(Debug, Parser)]
pub struct MergeArgs {
    /// Base document
    pub base: PathBuf,

    /// Document whose non-null top-level values win
    pub overlay: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: OutputFormat,

    /// JSON indentation width (0 for compact)
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,
}

pub fn search(args: &SearchArgs) -> Result<i32> {
    let value = load(Some(args.file.as_path()), DEFAULT_INDENT)?.value()?;
    if value.contains_str(&args.needle) {
        println!("{}", args.file.display());
        Ok(exit_codes::SUCCESS)
    } else {
        log::info!("'{}' not found in {}", args.needle, args.file.display());
        Ok(exit_codes::NOT_FOUND)
    }
}

pub fn merge(args: &MergeArgs, colorizer: &Colorizer) -> Result<i32> {
    let base = load_object(&args.base)?;
    let overlay = load_object(&args.overlay)?;
    let merged = Value::Object(merge_objects(base, overlay));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.format {
        OutputFormat::Json => write_json_color(&mut out, &merged, args.indent, colorizer)?,
        OutputFormat::Yaml => write_yaml_color(&mut out, &merged, colorizer)?,
    }
    out.flush()?;
    Ok(exit_codes::SUCCESS)
}

fn load_object(path: &Path) -> Result<indexmap::IndexMap<String, Value>> {
    match load(Some(path), DEFAULT_INDENT)?.value()? {
        Value::Object(map) => Ok(map),
        other => bail!(
            "{} is a {}, expected an object",
            path.display(),
            other.type_name()
        ),
    }
}
