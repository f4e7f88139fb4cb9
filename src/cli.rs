use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "file-probe")]
#[command(author, version, about = "Probe files by extension and report size, line count and readability")]
#[command(long_about = "Walks a directory, probes every file matching the configured \
    extensions, prints a report and saves it as JSON.\n\n\
    Exit codes:\n  \
    0 - No file failed\n  \
    1 - At least one file failed\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// File extensions to probe, each with its leading dot (e.g. --extensions .py .js .txt)
    #[arg(long, num_args = 1.., value_name = "EXT")]
    pub extensions: Option<Vec<String>>,

    /// Output file for the JSON report [default: test_report.json]
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Print each file as it is probed
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
