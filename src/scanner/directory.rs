use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{FileFilter, FileScanner};
use crate::error::Result;

/// Recursive walker with a deterministic order.
///
/// Directory entries are visited sorted by file name. The root itself is
/// never yielded, even when it is a file. Filters see paths relative to the
/// root. A leading `./` is dropped from yielded paths.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(is_file_like)
            .filter(|e| {
                let relative = e.path().strip_prefix(root).unwrap_or_else(|_| e.path());
                self.filter.should_include(relative)
            })
            .map(|e| without_cur_dir(e.into_path()))
            .collect()
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.scan_impl(root))
    }
}

/// `./a.txt` becomes `a.txt`, the way paths read when the root is `.`.
fn without_cur_dir(path: PathBuf) -> PathBuf {
    match path.strip_prefix(".") {
        Ok(stripped) => stripped.to_path_buf(),
        Err(_) => path,
    }
}

// Symlinks are kept unless they point at a directory, so dangling links show
// up and get reported as missing by the probe.
fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
