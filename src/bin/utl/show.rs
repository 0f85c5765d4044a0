//! CLI handler for the `show` command.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use utl::document::{write_bytes_color, write_json_color, write_yaml_color, DEFAULT_INDENT};
use utl::yaml::Colorizer;

use crate::input::{load, paths_or_stdin};
use crate::{exit_codes, OutputFormat};

/// Print YAML/JSON files in color.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Input files (reads stdin if none, or for `-`)
    pub files: Vec<PathBuf>,

    /// Re-serialize as this format instead of printing the source text
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// JSON indentation width (0 for compact)
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,
}

pub fn run(args: &ShowArgs, colorizer: &Colorizer) -> Result<i32> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut status = exit_codes::SUCCESS;

    for path in paths_or_stdin(&args.files) {
        // A failed input is reported and skipped; the rest still print
        if let Err(err) = show_one(&mut out, path, args, colorizer) {
            out.flush()?;
            eprintln!("utl: {:#}", err);
            status = exit_codes::ERROR;
        }
    }

    out.flush()?;
    Ok(status)
}

fn show_one<W: Write>(
    out: &mut W,
    path: Option<&Path>,
    args: &ShowArgs,
    colorizer: &Colorizer,
) -> Result<()> {
    let loaded = load(path, args.indent)?;
    match args.format {
        None => write_bytes_color(out, &loaded.source, colorizer)?,
        Some(OutputFormat::Json) => {
            write_json_color(out, &loaded.value()?, args.indent, colorizer)?
        }
        Some(OutputFormat::Yaml) => write_yaml_color(out, &loaded.value()?, colorizer)?,
    }
    Ok(())
}
