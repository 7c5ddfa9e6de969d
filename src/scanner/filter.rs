use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;

use crate::error::{Result, StyleGuardError};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Drops files whose path matches a configured exclusion.
///
/// Regex patterns come from the configuration's `excluded_paths` and are
/// searched anywhere in the `/`-separated path; glob patterns come from the
/// command line.
pub struct PathFilter {
    excluded_paths: Vec<Regex>,
    exclude_globs: GlobSet,
}

impl PathFilter {
    /// Create a filter from compiled regexes and raw glob patterns.
    ///
    /// # Errors
    /// Returns an error if any glob pattern is invalid.
    pub fn new(excluded_paths: Vec<Regex>, exclude_globs: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_globs {
            let glob = Glob::new(pattern).map_err(|e| StyleGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_globs = builder
            .build()
            .map_err(|e| StyleGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            excluded_paths,
            exclude_globs,
        })
    }

    fn matches_regex(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }
        let path_str = path.to_string_lossy().replace('\\', "/");
        self.excluded_paths.iter().any(|re| re.is_match(&path_str))
    }

    fn matches_glob(&self, path: &Path) -> bool {
        self.exclude_globs.is_match(path)
    }
}

impl FileFilter for PathFilter {
    fn should_include(&self, path: &Path) -> bool {
        !self.matches_regex(path) && !self.matches_glob(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
