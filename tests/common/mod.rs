#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the style-guard binary.
#[macro_export]
macro_rules! style_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("style-guard"))
    };
}

pub const BASIC_OPTIONS: &str = r#"{
    "maxcols": 120,
    "maxcols_soft": 100,
    "excluded_paths": [],
    "c_style_include_exceptions": []
}"#;

pub const MATH_EXCEPTION_OPTIONS: &str = r#"{
    "maxcols": 120,
    "maxcols_soft": 100,
    "excluded_paths": [],
    "c_style_include_exceptions": ["math.h"]
}"#;

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
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes the discoverable options file.
    pub fn create_options(&self, content: &str) {
        self.create_file(".style-guard.json", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
