use crate::checker::Summary;
use crate::cli::Cli;
use crate::output::{ColorMode, ReportFormatter, TextFormatter, print_error_full, write_report};
use crate::runner::{RunOptions, Runner, exit_code};
use crate::{EXIT_CONFIG_ERROR, FileProbeError};

use super::context::{apply_cli_overrides, color_choice_to_mode, load_config};

#[must_use]
pub fn run_probe(cli: &Cli) -> i32 {
    match run_probe_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(color_choice_to_mode(cli.color), &e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Load config, probe the directory, print the text report and save the JSON
/// report. Returns the process exit code.
///
/// # Errors
/// Returns an error for invalid configuration or patterns, or when the JSON
/// report cannot be written.
pub fn run_probe_impl(cli: &Cli) -> crate::Result<i32> {
    let color = color_choice_to_mode(cli.color);

    // 1. Load configuration
    let loaded = load_config(cli.config.as_deref(), cli.no_config)?;
    if cli.verbose
        && let Some(source) = &loaded.source
    {
        eprintln!("Using configuration from {}", source.display());
    }

    // 2. Apply CLI overrides and validate the result
    let mut config = loaded.config;
    apply_cli_overrides(&mut config, cli);
    config.validate()?;

    // 3. Discover and probe
    let options = RunOptions {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
    };
    let runner = Runner::from_config(&config, options)?;
    let summary = runner.run(&cli.directory, &config.extensions)?;

    // 4. Text report
    print!("{}", TextFormatter::new(color).format(&summary)?);

    // 5. JSON report, only when something was probed
    save_report(&summary, &config.output, cli.quiet)?;

    Ok(exit_code(&summary))
}

fn save_report(summary: &Summary, path: &std::path::Path, quiet: bool) -> crate::Result<()> {
    if summary.is_empty() {
        return Ok(());
    }

    write_report(summary, path)?;
    if !quiet {
        println!("\nReport saved to {}", path.display());
    }
    Ok(())
}

fn report_error(color: ColorMode, error: &FileProbeError) {
    let detail = error.detail();
    print_error_full(
        color,
        error.error_type(),
        &error.to_string(),
        detail.as_deref(),
        error.suggestion(),
    );
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
