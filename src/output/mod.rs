mod error_output;
mod json;
mod progress;
mod text;

pub use error_output::{ErrorOutput, print_error_full, print_warning};
pub use json::{JsonFormatter, read_report, write_report};
pub use progress::ScanProgress;
pub use text::TextFormatter;

use crate::checker::Summary;
use crate::error::Result;

/// Trait for rendering a run summary.
pub trait ReportFormatter {
    /// Format the summary into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, summary: &Summary) -> Result<String>;
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
