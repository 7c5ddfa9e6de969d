use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// One non-clean rule outcome with its location.
///
/// `line` is 1-based and only present for line rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub rule: &'static str,
    pub severity: Severity,
    pub message: String,
    pub line: Option<usize>,
}

impl Problem {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

/// Everything found in a single checked file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub problems: Vec<Problem>,
    /// Set when the file could not be read or decoded; no rules ran.
    pub read_error: Option<String>,
}

impl FileReport {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            problems: Vec::new(),
            read_error: None,
        }
    }

    #[must_use]
    pub fn unreadable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            problems: Vec::new(),
            read_error: Some(reason.into()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file verdict: no error-level problem and the file was readable.
    /// Warnings never affect it.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.read_error.is_none() && !self.problems.iter().any(Problem::is_error)
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.problems.iter().filter(|p| p.is_error()).count()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.problems.len() - self.error_count()
    }
}
