use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StyleGuardError};

/// Default hard line-length limit written by `init`.
pub const DEFAULT_MAXCOLS: usize = 120;

/// Default soft line-length limit written by `init`.
pub const DEFAULT_MAXCOLS_SOFT: usize = 100;

/// Angle-bracket include with a path separator before the `.h` name, e.g. `<GL/gl.h>`.
const ALLOWED_INCLUDE: &str = r"^\s*#include <.*/.*\.h>";

/// Any angle-bracket include of a `.h` header, e.g. `<math.h>`.
const DISALLOWED_INCLUDE: &str = r"^\s*#include <.*\.h>";

/// Configuration document as it appears on disk.
///
/// All four fields are required; a missing field is a configuration error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawConfig {
    /// Hard line-length limit. Longer lines are errors.
    pub maxcols: usize,

    /// Soft line-length limit. Longer lines (up to `maxcols`) are warnings.
    pub maxcols_soft: usize,

    /// Regular expressions searched in the full path of every discovered file.
    pub excluded_paths: Vec<String>,

    /// Header names allowed in C-style `#include <...>` form, e.g. `math.h`.
    pub c_style_include_exceptions: Vec<String>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            maxcols: DEFAULT_MAXCOLS,
            maxcols_soft: DEFAULT_MAXCOLS_SOFT,
            excluded_paths: Vec::new(),
            c_style_include_exceptions: Vec::new(),
        }
    }
}

/// Include patterns derived from `c_style_include_exceptions`, compiled once at load.
#[derive(Debug, Clone)]
pub struct IncludePatterns {
    pub allowed: Regex,
    pub disallowed: Regex,
    pub exceptions: Vec<Regex>,
}

impl IncludePatterns {
    fn compile(exceptions: &[String]) -> Result<Self> {
        let exceptions = exceptions
            .iter()
            .map(|token| {
                compile_regex(&format!(r"^\s*#include <{}>", regex::escape(token)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            allowed: compile_regex(ALLOWED_INCLUDE)?,
            disallowed: compile_regex(DISALLOWED_INCLUDE)?,
            exceptions,
        })
    }
}

/// Loaded, validated configuration shared read-only by every rule and worker.
#[derive(Debug, Clone)]
pub struct Config {
    pub maxcols: usize,
    pub maxcols_soft: usize,
    pub excluded_paths: Vec<Regex>,
    pub includes: IncludePatterns,
}

impl Config {
    /// Validate a raw document and compile every derived pattern.
    ///
    /// # Errors
    /// Returns an error if an exclusion pattern is not a valid regular expression
    /// or if `maxcols_soft` exceeds `maxcols`.
    pub fn from_raw(raw: RawConfig) -> Result<Self> {
        if raw.maxcols_soft > raw.maxcols {
            return Err(StyleGuardError::Config(format!(
                "maxcols_soft ({}) must not exceed maxcols ({})",
                raw.maxcols_soft, raw.maxcols
            )));
        }

        let excluded_paths = raw
            .excluded_paths
            .iter()
            .map(|pattern| compile_regex(pattern))
            .collect::<Result<Vec<_>>>()?;
        let includes = IncludePatterns::compile(&raw.c_style_include_exceptions)?;

        Ok(Self {
            maxcols: raw.maxcols,
            maxcols_soft: raw.maxcols_soft,
            excluded_paths,
            includes,
        })
    }

    /// First exclusion pattern found anywhere in `path`, if any.
    #[must_use]
    pub fn excluding_pattern(&self, path: &str) -> Option<&Regex> {
        self.excluded_paths.iter().find(|re| re.is_match(path))
    }
}

impl Default for Config {
    fn default() -> Self {
        // SAFETY: the default document has no user patterns; only the built-in
        // include patterns are compiled and those are static strings.
        Self::from_raw(RawConfig::default()).expect("default config is valid")
    }
}

fn compile_regex(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| StyleGuardError::InvalidRegex {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
