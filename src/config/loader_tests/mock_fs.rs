use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::FileSystem;

/// In-memory tree rooted at `/project` with a user config dir under
/// `/home/user/.config/file-probe`.
pub struct MockFileSystem {
    files: BTreeMap<PathBuf, String>,
    unreadable: BTreeSet<PathBuf>,
    working_dir: PathBuf,
    user_config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
            unreadable: BTreeSet::new(),
            working_dir: PathBuf::from("/project"),
            user_config_dir: Some(PathBuf::from("/home/user/.config/file-probe")),
        }
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    /// A file that is present but fails to read.
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.unreadable.insert(PathBuf::from(path));
        self
    }

    pub fn in_dir(mut self, path: &str) -> Self {
        self.working_dir = PathBuf::from(path);
        self
    }

    pub fn without_user_config_dir(mut self) -> Self {
        self.user_config_dir = None;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_file(&self, path: &Path) -> io::Result<Option<String>> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        Ok(self.files.get(path).cloned())
    }

    fn working_dir(&self) -> io::Result<PathBuf> {
        Ok(self.working_dir.clone())
    }

    fn user_config_dir(&self) -> Option<PathBuf> {
        self.user_config_dir.clone()
    }
}
