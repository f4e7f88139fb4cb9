mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{ExcludeFilter, FileFilter};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return every candidate file path in walk order.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Outcome of discovery.
///
/// A missing root is not an error; the caller decides how to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    RootMissing,
    Files(Vec<PathBuf>),
}

impl Discovery {
    /// The discovered files, empty when the root was missing.
    #[must_use]
    pub fn into_files(self) -> Vec<PathBuf> {
        match self {
            Self::RootMissing => Vec::new(),
            Self::Files(files) => files,
        }
    }
}

/// Enumerates files under a root, grouped by extension.
pub struct Discoverer<S: FileScanner> {
    scanner: S,
}

impl<S: FileScanner> Discoverer<S> {
    #[must_use]
    pub const fn new(scanner: S) -> Self {
        Self { scanner }
    }

    /// Find every file under `root` whose name ends with one of `extensions`.
    ///
    /// Extensions are processed in the order given; within one extension the
    /// scanner's walk order is kept. A file matching several extensions is
    /// listed once per extension.
    ///
    /// # Errors
    /// Returns an error if the scanner fails.
    pub fn discover(&self, root: &Path, extensions: &[String]) -> Result<Discovery> {
        if !root.exists() {
            return Ok(Discovery::RootMissing);
        }

        let candidates = self.scanner.scan(root)?;
        let files = extensions
            .iter()
            .flat_map(|ext| {
                candidates
                    .iter()
                    .filter(move |path| matches_extension(path, ext))
                    .cloned()
            })
            .collect();

        Ok(Discovery::Files(files))
    }
}

/// Whether the file name ends with `ext`, the way `*<ext>` matches a name.
#[must_use]
pub fn matches_extension(path: &Path, ext: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(ext))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
