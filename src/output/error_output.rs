//! Diagnostics on stderr.
//!
//! ```text
//! ✖ ReportWrite: Failed to write report: out/report.json
//!   × No such file or directory (os error 2)
//!   help: Make sure the parent directory exists and is writable, or pass --output
//! ```

use std::io::{IsTerminal, Write};

use super::{ColorMode, ansi};

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            // Presence of NO_COLOR (any value) disables color, see https://no-color.org
            ColorMode::Auto => std::env::var("NO_COLOR").is_err() && std::io::stderr().is_terminal(),
        }
    }

    pub fn print_error(
        &self,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error_type, message, detail, suggestion);
    }

    pub fn print_warning(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message);
    }

    fn paint(&self, text: &str, style: &str) -> String {
        if self.use_colors {
            format!("{style}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// Writes an error to `w`: a heading line, then the optional cause and hint.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let heading = format!("{}{}", ansi::BOLD, ansi::RED);

        // Write errors are discarded: there is nowhere left to report them.
        let _ = writeln!(w, "{} {message}", self.paint(&format!("✖ {error_type}:"), &heading));
        if let Some(d) = detail {
            let _ = writeln!(w, "  {}", self.paint(&format!("× {d}"), ansi::DIM));
        }
        if let Some(s) = suggestion {
            let _ = writeln!(w, "  {} {s}", self.paint("help:", ansi::CYAN));
        }
    }

    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str) {
        let heading = format!("{}{}", ansi::BOLD, ansi::YELLOW);
        let _ = writeln!(w, "{} {message}", self.paint("⚠ Warning:", &heading));
    }
}

/// Prints an error with detail and suggestion using the given color mode.
pub fn print_error_full(
    mode: ColorMode,
    error_type: &str,
    message: &str,
    detail: Option<&str>,
    suggestion: Option<&str>,
) {
    ErrorOutput::new(mode).print_error(error_type, message, detail, suggestion);
}

/// Prints a warning using the given color mode.
pub fn print_warning(mode: ColorMode, message: &str) {
    ErrorOutput::new(mode).print_warning(message);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
