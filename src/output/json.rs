use std::fs;
use std::path::Path;

use crate::checker::Summary;
use crate::error::{FileProbeError, Result};

use super::ReportFormatter;

/// The persisted report: the summary as pretty-printed JSON.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, summary: &Summary) -> Result<String> {
        Ok(serde_json::to_string_pretty(summary)?)
    }
}

/// Serialize `summary` and write it to `path`, replacing any existing file.
///
/// # Errors
/// Returns [`FileProbeError::ReportWrite`] if the file cannot be written.
pub fn write_report(summary: &Summary, path: &Path) -> Result<()> {
    let mut content = JsonFormatter.format(summary)?;
    content.push('\n');

    fs::write(path, content).map_err(|source| FileProbeError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a report previously written by [`write_report`].
///
/// The summary is rebuilt from its results, so a loaded report upholds the
/// same invariants as one produced by a run.
///
/// # Errors
/// Returns [`FileProbeError::ReportRead`] if the file cannot be read and
/// [`FileProbeError::InvalidReport`] if it is not JSON, has the wrong shape,
/// or its counts and statuses disagree with its results.
pub fn read_report(path: &Path) -> Result<Summary> {
    let content = fs::read_to_string(path).map_err(|source| FileProbeError::ReportRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| FileProbeError::InvalidReport {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
