mod probe;
mod result;
mod summary;

pub use probe::FileProbe;
pub use result::{ENCODING_MESSAGE, FileResult, MISSING_FILE_MESSAGE, ProbeError, Status};
pub use summary::Summary;

use std::path::Path;

pub trait Checker {
    /// Inspect a single path and describe what was found.
    ///
    /// Implementations never fail: every problem is recorded on the returned
    /// result as a status and error list.
    fn check(&self, path: &Path) -> FileResult;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
