use std::path::Path;

use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::output::ColorMode;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from the filesystem, or defaults when `no_config` is set.
///
/// # Errors
/// Returns an error if the explicit config file is missing, or if any config
/// file found cannot be parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// CLI values win over whatever the config file says.
pub fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(extensions) = &cli.extensions {
        config.extensions.clone_from(extensions);
    }

    if let Some(output) = &cli.output {
        config.output.clone_from(output);
    }

    config.exclude.extend(cli.exclude.iter().cloned());
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
