use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::checker::{FileChecker, FileReport};
use crate::config::Config;
use crate::output::ScanProgress;
use crate::registry::RuleRegistry;

/// Source of file contents (for testability).
pub trait FileReader: Sync {
    /// Read the raw bytes of a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads from the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileReader;

impl FileReader for RealFileReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Outcome of a whole run.
///
/// `reports` holds one entry per checked file in input order; files no
/// dispatch pattern matched are only listed in `skipped`.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub reports: Vec<FileReport>,
    pub skipped: Vec<PathBuf>,
}

impl RunSummary {
    #[must_use]
    pub fn checked(&self) -> usize {
        self.reports.len()
    }

    /// Paths of checked files whose verdict is false, in input order.
    #[must_use]
    pub fn uncompliant(&self) -> Vec<&Path> {
        self.reports
            .iter()
            .filter(|r| !r.is_compliant())
            .map(FileReport::path)
            .collect()
    }

    /// The overall verdict: true iff no checked file is uncompliant.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.reports.iter().all(FileReport::is_compliant)
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.reports.iter().map(FileReport::error_count).sum()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.reports.iter().map(FileReport::warning_count).sum()
    }
}

enum FileOutcome {
    Checked(FileReport),
    Skipped(PathBuf),
}

/// Checks a list of files against the dispatch table.
///
/// Files are independent, so they are checked in parallel on the current
/// rayon pool; results are merged back in input order.
pub struct Runner<'a> {
    registry: &'a RuleRegistry,
    config: &'a Config,
    reader: &'a dyn FileReader,
}

impl<'a> Runner<'a> {
    #[must_use]
    pub const fn new(
        registry: &'a RuleRegistry,
        config: &'a Config,
        reader: &'a dyn FileReader,
    ) -> Self {
        Self {
            registry,
            config,
            reader,
        }
    }

    #[must_use]
    pub fn check_files(&self, files: &[PathBuf], progress: Option<&ScanProgress>) -> RunSummary {
        let outcomes: Vec<FileOutcome> = files
            .par_iter()
            .map(|path| {
                let outcome = self.check_file(path);
                if let Some(progress) = progress {
                    progress.inc();
                }
                outcome
            })
            .collect();

        let mut summary = RunSummary::default();
        for outcome in outcomes {
            match outcome {
                FileOutcome::Checked(report) => summary.reports.push(report),
                FileOutcome::Skipped(path) => summary.skipped.push(path),
            }
        }
        summary
    }

    fn check_file(&self, path: &Path) -> FileOutcome {
        let Some(rules) = self.registry.select_for_path(path) else {
            return FileOutcome::Skipped(path.to_path_buf());
        };

        let report = match self.reader.read(path) {
            Ok(bytes) => FileChecker::new(self.config).check_bytes(path, &bytes, rules),
            Err(e) => FileReport::unreadable(path, format!("Failed to read file: {e}")),
        };
        FileOutcome::Checked(report)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
