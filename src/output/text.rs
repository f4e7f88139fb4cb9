use std::fmt::Write;

use crate::checker::{FileResult, Status, Summary};
use crate::error::Result;

use super::{ColorMode, ReportFormatter, ansi};

const RULE_WIDTH: usize = 60;

/// Human-readable report: totals, failures, warnings, then every file.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
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
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status_icon(status: Status) -> &'static str {
        match status {
            Status::Passed => "✓",
            Status::Failed => "✗",
            Status::Warning => "⚠",
            Status::Unknown => "?",
        }
    }

    const fn status_color(status: Status) -> &'static str {
        match status {
            Status::Passed => ansi::GREEN,
            Status::Failed => ansi::RED,
            Status::Warning => ansi::YELLOW,
            Status::Unknown => ansi::CYAN,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_header(&self, summary: &Summary, output: &mut String) {
        let rule = "=".repeat(RULE_WIDTH);

        let _ = writeln!(output);
        let _ = writeln!(output, "{rule}");
        let _ = writeln!(output, "TEST REPORT");
        let _ = writeln!(output, "{rule}");
        let _ = writeln!(output, "Total files tested: {}", summary.total());
        let _ = writeln!(
            output,
            "Passed: {}",
            self.colorize(&format!("{} ✓", summary.passed()), ansi::GREEN)
        );
        let _ = writeln!(
            output,
            "Failed: {}",
            self.colorize(&format!("{} ✗", summary.failed()), ansi::RED)
        );
        let _ = writeln!(
            output,
            "Warnings: {}",
            self.colorize(&format!("{} ⚠", summary.warnings()), ansi::YELLOW)
        );
        let _ = writeln!(output, "{rule}");
    }

    fn format_section<'a>(
        &self,
        title: &str,
        label: &str,
        results: impl Iterator<Item = &'a FileResult>,
        output: &mut String,
    ) {
        let _ = writeln!(output);
        let _ = writeln!(output, "{}", self.colorize(title, ansi::BOLD));
        for result in results {
            let _ = writeln!(output, "  - {}", result.path().display());
            for error in result.errors() {
                let _ = writeln!(output, "    {label}: {error}");
            }
        }
    }

    fn format_detail(&self, result: &FileResult, output: &mut String) {
        let status = result.status();
        let icon = self.colorize(Self::status_icon(status), Self::status_color(status));

        let _ = writeln!(output, "{icon} {}", result.path().display());
        let _ = writeln!(output, "    Size: {} bytes", result.size());
        let _ = writeln!(output, "    Lines: {}", result.lines());
        for error in result.errors() {
            let _ = writeln!(output, "    {error}");
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, summary: &Summary) -> Result<String> {
        let mut output = String::new();

        self.format_header(summary, &mut output);

        if summary.failed() > 0 {
            self.format_section(
                "FAILED FILES:",
                "Error",
                summary.failed_results(),
                &mut output,
            );
        }

        if summary.warnings() > 0 {
            self.format_section(
                "WARNINGS:",
                "Warning",
                summary.warning_results(),
                &mut output,
            );
        }

        let _ = writeln!(output);
        let _ = writeln!(output, "{}", self.colorize("DETAILED RESULTS:", ansi::BOLD));
        for result in summary.results() {
            self.format_detail(result, &mut output);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
