use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{FileProbeError, Result};

pub trait FileFilter {
    /// `path` is relative to the scanned root.
    fn should_include(&self, path: &Path) -> bool;
}

/// Drops paths matching any exclude glob. An empty pattern list keeps
/// everything.
pub struct ExcludeFilter {
    excluded: GlobSet,
}

impl ExcludeFilter {
    /// Compile the exclude patterns.
    ///
    /// # Errors
    /// Returns [`FileProbeError::InvalidPattern`] naming the first pattern
    /// that is not valid glob syntax.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let invalid = |pattern: &str, source| FileProbeError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        };

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern).map_err(|e| invalid(pattern, e))?);
        }
        let excluded = builder
            .build()
            .map_err(|e| invalid(&patterns.join(", "), e))?;

        Ok(Self { excluded })
    }
}

impl FileFilter for ExcludeFilter {
    fn should_include(&self, path: &Path) -> bool {
        !self.excluded.is_match(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
