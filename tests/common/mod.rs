#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the file-probe binary.
#[macro_export]
macro_rules! file_probe {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("file-probe"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        self.create_bytes(relative_path, content.as_bytes());
    }

    /// Creates a file with raw bytes, for content that is not valid UTF-8.
    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a local `.file-probe.toml` config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".file-probe.toml", content);
    }

    /// Path of the JSON report inside the fixture.
    pub fn report_path(&self) -> PathBuf {
        self.dir.path().join("test_report.json")
    }

    /// Parses the report written by a run.
    pub fn read_report(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.report_path()).expect("Failed to read report");
        serde_json::from_str(&content).expect("Report is not valid JSON")
    }
}
