use serde::{Deserialize, Serialize};

use super::{FileResult, Status};

/// Aggregate over every file probed in one run.
///
/// The counts are derived from `results` when the summary is built and are
/// never updated on their own. A deserialized summary is rebuilt from its
/// results and rejected if the stored counts disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredSummary")]
pub struct Summary {
    total: usize,
    passed: usize,
    failed: usize,
    warnings: usize,
    results: Vec<FileResult>,
}

#[derive(Deserialize)]
struct StoredSummary {
    total: usize,
    passed: usize,
    failed: usize,
    warnings: usize,
    results: Vec<FileResult>,
}

impl TryFrom<StoredSummary> for Summary {
    type Error = String;

    fn try_from(stored: StoredSummary) -> Result<Self, Self::Error> {
        let summary = Self::from_results(stored.results);

        let recorded = (stored.total, stored.passed, stored.failed, stored.warnings);
        let derived = (summary.total, summary.passed, summary.failed, summary.warnings);
        if recorded != derived {
            return Err(format!(
                "counts (total, passed, failed, warnings) {recorded:?} do not match the results {derived:?}"
            ));
        }

        Ok(summary)
    }
}

impl Summary {
    #[must_use]
    pub fn from_results(results: Vec<FileResult>) -> Self {
        let count = |status: Status| results.iter().filter(|r| r.status() == status).count();

        Self {
            total: results.len(),
            passed: count(Status::Passed),
            failed: count(Status::Failed),
            warnings: count(Status::Warning),
            results,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn passed(&self) -> usize {
        self.passed
    }

    #[must_use]
    pub const fn failed(&self) -> usize {
        self.failed
    }

    #[must_use]
    pub const fn warnings(&self) -> usize {
        self.warnings
    }

    /// Results whose status is [`Status::Unknown`].
    #[must_use]
    pub fn unknown(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status() == Status::Unknown)
            .count()
    }

    #[must_use]
    pub fn results(&self) -> &[FileResult] {
        &self.results
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn failed_results(&self) -> impl Iterator<Item = &FileResult> {
        self.results.iter().filter(|r| r.is_failed())
    }

    pub fn warning_results(&self) -> impl Iterator<Item = &FileResult> {
        self.results.iter().filter(|r| r.is_warning())
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
