use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileProbeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to write report: {path}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read report: {path}")]
    ReportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid report: {path}")]
    InvalidReport {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl FileProbeError {
    /// Short name of the error kind, used as the heading of stderr diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::InvalidPattern { .. } => "Pattern",
            Self::ReportWrite { .. } => "ReportWrite",
            Self::ReportRead { .. } => "ReportRead",
            Self::InvalidReport { .. } => "Report",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TOML",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Innermost cause, if the error wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::ReportWrite { source, .. } | Self::ReportRead { source, .. } => {
                Some(source.to_string())
            }
            Self::InvalidReport { source, .. } => Some(source.to_string()),
            Self::Config(_) | Self::Io(_) | Self::TomlParse(_) | Self::JsonSerialize(_) => None,
        }
    }

    /// Actionable hint shown under the error, when one exists.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidPattern { .. } => Some("Check the glob syntax of --exclude and `exclude`"),
            Self::ReportWrite { .. } => {
                Some("Make sure the parent directory exists and is writable, or pass --output")
            }
            Self::TomlParse(_) => Some("Fix the configuration file or run with --no-config"),
            Self::InvalidReport { .. } => Some("Regenerate the report by running file-probe again"),
            Self::Config(_)
            | Self::ReportRead { .. }
            | Self::Io(_)
            | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FileProbeError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
