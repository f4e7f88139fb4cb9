use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize, Serializer};

pub const MISSING_FILE_MESSAGE: &str = "File does not exist";
pub const ENCODING_MESSAGE: &str = "Binary file or encoding issue";

/// Outcome of probing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Failed,
    Warning,
    Unknown,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Warning => "warning",
            Self::Unknown => "unknown",
        }
    }

    /// Whether a result with this status must carry at least one error.
    #[must_use]
    pub const fn requires_errors(self) -> bool {
        matches!(self, Self::Failed | Self::Warning)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem recorded while probing a file.
///
/// Persisted as its display text. Parsing maps the two fixed messages back to
/// their variants and anything else to [`ProbeError::Io`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ProbeError {
    /// The path does not resolve to an existing filesystem entry.
    MissingFile,
    /// The content is not valid UTF-8.
    Encoding,
    /// Any other failure while reading metadata or content.
    Io(String),
}

impl ProbeError {
    #[must_use]
    pub fn io(err: &std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFile => f.write_str(MISSING_FILE_MESSAGE),
            Self::Encoding => f.write_str(ENCODING_MESSAGE),
            Self::Io(message) => f.write_str(message),
        }
    }
}

impl From<ProbeError> for String {
    fn from(err: ProbeError) -> Self {
        err.to_string()
    }
}

impl From<String> for ProbeError {
    fn from(message: String) -> Self {
        match message.as_str() {
            MISSING_FILE_MESSAGE => Self::MissingFile,
            ENCODING_MESSAGE => Self::Encoding,
            _ => Self::Io(message),
        }
    }
}

/// Everything recorded about one probed file.
///
/// Built through the status-specific constructors so that failed and warning
/// results always carry an error and passed results never do. Deserializing
/// enforces the same rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredResult")]
pub struct FileResult {
    #[serde(rename = "file", serialize_with = "serialize_path")]
    path: PathBuf,
    exists: bool,
    readable: bool,
    size: u64,
    lines: usize,
    status: Status,
    errors: Vec<ProbeError>,
}

fn serialize_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// Persisted shape of a [`FileResult`], checked before it becomes one.
#[derive(Deserialize)]
struct StoredResult {
    file: PathBuf,
    exists: bool,
    readable: bool,
    size: u64,
    lines: usize,
    status: Status,
    errors: Vec<ProbeError>,
}

impl TryFrom<StoredResult> for FileResult {
    type Error = String;

    fn try_from(stored: StoredResult) -> Result<Self, Self::Error> {
        if stored.status.requires_errors() == stored.errors.is_empty() {
            return Err(format!(
                "{}: status `{}` does not allow {} error(s)",
                stored.file.display(),
                stored.status,
                stored.errors.len()
            ));
        }

        Ok(Self {
            path: stored.file,
            exists: stored.exists,
            readable: stored.readable,
            size: stored.size,
            lines: stored.lines,
            status: stored.status,
            errors: stored.errors,
        })
    }
}

impl FileResult {
    #[must_use]
    pub fn missing(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            exists: false,
            readable: false,
            size: 0,
            lines: 0,
            status: Status::Failed,
            errors: vec![ProbeError::MissingFile],
        }
    }

    #[must_use]
    pub fn passed(path: &Path, readable: bool, size: u64, lines: usize) -> Self {
        Self {
            path: path.to_path_buf(),
            exists: true,
            readable,
            size,
            lines,
            status: Status::Passed,
            errors: Vec::new(),
        }
    }

    #[must_use]
    pub fn encoding_warning(path: &Path, readable: bool, size: u64) -> Self {
        Self {
            path: path.to_path_buf(),
            exists: true,
            readable,
            size,
            lines: 0,
            status: Status::Warning,
            errors: vec![ProbeError::Encoding],
        }
    }

    #[must_use]
    pub fn failed(path: &Path, exists: bool, readable: bool, size: u64, error: ProbeError) -> Self {
        Self {
            path: path.to_path_buf(),
            exists,
            readable,
            size,
            lines: 0,
            status: Status::Failed,
            errors: vec![error],
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn exists(&self) -> bool {
        self.exists
    }

    #[must_use]
    pub const fn readable(&self) -> bool {
        self.readable
    }

    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    #[must_use]
    pub const fn lines(&self) -> usize {
        self.lines
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn errors(&self) -> &[ProbeError] {
        &self.errors
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status == Status::Failed
    }

    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.status == Status::Warning
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
