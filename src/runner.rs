//! Runs the probe over every discovered file and builds the summary.

use std::path::Path;

use crate::checker::{Checker, FileProbe, Summary};
use crate::config::Config;
use crate::error::Result;
use crate::output::{ColorMode, ScanProgress, print_warning};
use crate::scanner::{Discoverer, Discovery, DirectoryScanner, ExcludeFilter, FileScanner};
use crate::{EXIT_FILES_FAILED, EXIT_SUCCESS};

/// How much the runner reports on stderr while it works.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub quiet: bool,
    pub verbose: bool,
    pub color: ColorMode,
}

pub struct Runner<S: FileScanner, C: Checker> {
    discoverer: Discoverer<S>,
    checker: C,
    options: RunOptions,
}

impl Runner<DirectoryScanner<ExcludeFilter>, FileProbe> {
    /// Build a runner that walks the real filesystem.
    ///
    /// # Errors
    /// Returns an error if an exclude pattern is not a valid glob.
    pub fn from_config(config: &Config, options: RunOptions) -> Result<Self> {
        let filter = ExcludeFilter::new(&config.exclude)?;
        let scanner = DirectoryScanner::new(filter);
        Ok(Self::new(scanner, FileProbe::new(), options))
    }
}

impl<S: FileScanner, C: Checker> Runner<S, C> {
    #[must_use]
    pub const fn new(scanner: S, checker: C, options: RunOptions) -> Self {
        Self {
            discoverer: Discoverer::new(scanner),
            checker,
            options,
        }
    }

    /// Discover files under `root` and probe each one, in discovery order.
    ///
    /// Nothing is probed when discovery finds no files. A missing root is
    /// reported as a warning and yields an empty summary.
    ///
    /// # Errors
    /// Returns an error only if the directory scan itself fails; per-file
    /// problems are recorded in the summary.
    pub fn run(&self, root: &Path, extensions: &[String]) -> Result<Summary> {
        self.status(&format!("Discovering files in {}...", root.display()));

        let files = match self.discoverer.discover(root, extensions)? {
            Discovery::RootMissing => {
                print_warning(
                    self.options.color,
                    &format!("Directory {} does not exist", root.display()),
                );
                return Ok(Summary::default());
            }
            Discovery::Files(files) => files,
        };

        if files.is_empty() {
            self.status("No files found to test.");
            return Ok(Summary::default());
        }

        self.status(&format!("Found {} file(s) to test.", files.len()));

        let progress = ScanProgress::new(files.len() as u64, self.options.quiet);
        let mut results = Vec::with_capacity(files.len());
        for path in &files {
            if self.options.verbose {
                progress.message(&format!("Testing: {}", path.display()));
            }
            results.push(self.checker.check(path));
            progress.inc();
        }
        progress.finish();

        Ok(Summary::from_results(results))
    }

    fn status(&self, message: &str) {
        if !self.options.quiet {
            eprintln!("{message}");
        }
    }
}

/// Process exit code for a finished run: non-zero iff any file failed.
#[must_use]
pub const fn exit_code(summary: &Summary) -> i32 {
    if summary.has_failures() {
        EXIT_FILES_FAILED
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
