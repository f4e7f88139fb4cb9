use std::path::{Path, PathBuf};

use crate::error::{FileProbeError, Result};

use super::{Config, FileSystem, RealFileSystem};

/// A loaded configuration and the file it came from.
///
/// Loading prints nothing; callers decide whether to mention the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub config: Config,
    /// File the config was read from; `None` when defaults were used.
    pub source: Option<PathBuf>,
}

pub trait ConfigLoader {
    /// Load from the first config file found in the search locations, or
    /// fall back to defaults.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load from an explicit path, which must exist.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or invalid.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub const LOCAL_CONFIG_NAME: &str = ".file-probe.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Search order for [`ConfigLoader::load`]:
/// 1. `.file-probe.toml` in the current directory
/// 2. `config.toml` in the platform-specific user config directory
/// 3. `Config::default()` if neither exists
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Candidate locations in priority order. A location that cannot be
    /// determined (no working directory, no user config dir) is skipped.
    fn search_paths(&self) -> Vec<PathBuf> {
        let local = self
            .fs
            .working_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME));
        let user = self
            .fs
            .user_config_dir()
            .map(|dir| dir.join(USER_CONFIG_NAME));

        local.into_iter().chain(user).collect()
    }

    fn read(&self, path: &Path) -> Result<Option<String>> {
        self.fs.read_file(path).map_err(|e| {
            FileProbeError::Config(format!(
                "cannot read configuration file {}: {e}",
                path.display()
            ))
        })
    }

    fn parse(content: &str, path: &Path) -> Result<LoadResult> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;

        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        for path in self.search_paths() {
            if let Some(content) = self.read(&path)? {
                return Self::parse(&content, &path);
            }
        }

        Ok(LoadResult {
            config: Config::default(),
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self.read(path)?.ok_or_else(|| {
            FileProbeError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            ))
        })?;

        Self::parse(&content, path)
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
