//! utl CLI: print YAML and JSON documents in color.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use utl::color::{color_samples, Palette};
use utl::yaml::Colorizer;

mod input;
mod query;
mod show;

#[derive(Debug, Parser)]
#[command(name = "utl")]
#[command(about = "Colorized YAML and JSON printing", long_about = None)]
#[command(version)]
struct Cli {
    /// Force color output even when stdout is not a terminal
    #[arg(short = 'C', long = "color-output", global = true)]
    color_output: bool,

    /// Disable color output
    #[arg(short = 'M', long = "monochrome-output", global = true)]
    monochrome_output: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print YAML/JSON files in color, comments and layout preserved
    Show(show::ShowArgs),
    /// Exit 0 if any string value in the document contains NEEDLE (case-insensitive)
    Search(query::SearchArgs),
    /// Merge the top-level keys of OVERLAY onto BASE and print the result
    Merge(query::MergeArgs),
    /// Print a sample line in every color alias
    Colors,
}

/// Output format when re-serializing a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    /// `search` found nothing
    pub const NOT_FOUND: i32 = 1;
    /// Usage, I/O or parse error
    pub const ERROR: i32 = 2;
}

/// Colors are on when forced, off when disabled or `NO_COLOR` is set, and
/// otherwise on only for a terminal.
fn use_color(cli: &Cli) -> bool {
    if cli.monochrome_output {
        false
    } else if cli.color_output {
        true
    } else if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        false
    } else {
        atty::is(atty::Stream::Stdout)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    let palette = if use_color(&cli) {
        Palette::from_env()
    } else {
        Palette::monochrome()
    };
    log::debug!("palette: {:?}", palette);
    let colorizer = Colorizer::new(palette);

    match cli.command {
        Command::Show(args) => show::run(&args, &colorizer),
        Command::Search(args) => query::search(&args),
        Command::Merge(args) => query::merge(&args, &colorizer),
        Command::Colors => {
            for line in color_samples() {
                println!("{}", line);
            }
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("utl: {:#}", err);
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_monochrome_wins() {
        let cli = Cli::parse_from(["utl", "-C", "-M", "colors"]);
        assert!(!use_color(&cli));
        let cli = Cli::parse_from(["utl", "colors", "--color-output"]);
        assert!(use_color(&cli));
    }
}
