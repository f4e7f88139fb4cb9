//! Disk access needed to find configuration, behind a trait so tests can
//! supply an in-memory tree.

use std::io;
use std::path::{Path, PathBuf};

pub trait FileSystem {
    /// Contents of the regular file at `path`, or `None` when there is none.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read as UTF-8 text.
    fn read_file(&self, path: &Path) -> io::Result<Option<String>>;

    /// Directory the tool was started from.
    ///
    /// # Errors
    /// Returns an error if the working directory is gone or inaccessible.
    fn working_dir(&self) -> io::Result<PathBuf>;

    /// `file-probe` directory under the platform's user config location
    /// (`~/.config/file-probe` on Linux), if the platform has one.
    fn user_config_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_file(&self, path: &Path) -> io::Result<Option<String>> {
        if !path.is_file() {
            return Ok(None);
        }
        std::fs::read_to_string(path).map(Some)
    }

    fn working_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn user_config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "file-probe")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
