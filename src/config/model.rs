use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{FileProbeError, Result};

/// Extensions probed when neither the config file nor the CLI names any.
pub const DEFAULT_EXTENSIONS: [&str; 8] =
    [".py", ".js", ".ts", ".java", ".cpp", ".c", ".txt", ".json"];

/// Where the JSON report goes unless told otherwise.
pub const DEFAULT_OUTPUT: &str = "test_report.json";

/// Run configuration.
///
/// Every field has a default, so an empty file (or no file at all) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File name suffixes to probe, each including the leading dot.
    pub extensions: Vec<String>,

    /// Glob patterns (relative to the scanned directory) to skip.
    pub exclude: Vec<String>,

    /// Destination of the persisted JSON report.
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            exclude: Vec::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    /// Check semantic constraints that the TOML shape cannot express.
    ///
    /// # Errors
    /// Returns a configuration error for an empty extension list, an empty
    /// extension, or an empty output path.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(FileProbeError::Config(
                "extensions must list at least one extension".to_string(),
            ));
        }

        if let Some(i) = self.extensions.iter().position(String::is_empty) {
            return Err(FileProbeError::Config(format!(
                "extensions[{i}] cannot be empty"
            )));
        }

        if self.output.as_os_str().is_empty() {
            return Err(FileProbeError::Config("output cannot be empty".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
