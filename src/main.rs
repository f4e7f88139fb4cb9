use clap::Parser;

use file_probe::cli::Cli;
use file_probe::commands::run_probe;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_probe(&cli));
}
