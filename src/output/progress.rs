use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for probing files.
///
/// Hidden in quiet mode or when stderr is not a TTY. Messages printed through
/// [`ScanProgress::message`] are written to stderr around the bar so it does
/// not get garbled.
pub struct ScanProgress {
    progress_bar: ProgressBar,
    quiet: bool,
}

impl ScanProgress {
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total)
        };

        Self {
            progress_bar,
            quiet,
        }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        let template = "{spinner:.green} Probing [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%)";
        // A bad template only loses styling, never progress.
        if let Ok(style) = ProgressStyle::default_bar().template(template) {
            pb.set_style(style.progress_chars("█▓░"));
        }
        pb
    }

    /// Print a status line on stderr unless quiet.
    pub fn message(&self, text: &str) {
        if self.quiet {
            return;
        }
        self.progress_bar.suspend(|| eprintln!("{text}"));
    }

    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.progress_bar.position()
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
