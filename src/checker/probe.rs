use std::fs::{self, File};
use std::path::Path;

use crate::counter::{CountResult, LineCounter};

use super::{Checker, FileResult, ProbeError};

/// Probes files on the real filesystem.
///
/// Existence and metadata are read first, then the content is decoded as
/// UTF-8 to count lines. The file handle is dropped before `check` returns.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileProbe {
    counter: LineCounter,
}

impl FileProbe {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: LineCounter,
        }
    }

    fn probe_existing(&self, path: &Path) -> FileResult {
        let readable = is_readable(path);

        let size = match fs::metadata(path) {
            Ok(metadata) => metadata.len(),
            Err(e) => return FileResult::failed(path, true, readable, 0, ProbeError::io(&e)),
        };

        match File::open(path).and_then(|file| self.counter.count_reader(file)) {
            Ok(CountResult::Lines(lines)) => FileResult::passed(path, readable, size, lines),
            Ok(CountResult::InvalidEncoding) => FileResult::encoding_warning(path, readable, size),
            Err(e) => FileResult::failed(path, true, readable, size, ProbeError::io(&e)),
        }
    }
}

impl Checker for FileProbe {
    fn check(&self, path: &Path) -> FileResult {
        match path.try_exists() {
            Ok(true) => self.probe_existing(path),
            Ok(false) => FileResult::missing(path),
            Err(e) => FileResult::failed(path, false, false, 0, ProbeError::io(&e)),
        }
    }
}

fn is_readable(path: &Path) -> bool {
    File::open(path).is_ok()
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
