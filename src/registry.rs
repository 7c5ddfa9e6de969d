use std::path::Path;

use regex::Regex;

use crate::error::{Result, StyleGuardError};
use crate::rules::{
    LIMIT_LINE_LENGTH, NO_BAD_CPP_PATTERNS, NO_TABS, NO_TRAILING_WHITESPACE, Rule,
    SINGLE_BLANK_LINE_EOF, UNIX_LINEBREAK,
};

/// Rules applied to every checked file.
pub const BASE_RULES: &[Rule] = &[
    NO_TRAILING_WHITESPACE,
    NO_TABS,
    UNIX_LINEBREAK,
    SINGLE_BLANK_LINE_EOF,
];

/// Extra rules for C++ sources and headers, applied after [`BASE_RULES`].
pub const CPP_RULES: &[Rule] = &[NO_BAD_CPP_PATTERNS, LIMIT_LINE_LENGTH];

/// One row of the dispatch table.
#[derive(Debug, Clone)]
pub struct DispatchEntry {
    pub pattern: Regex,
    pub rules: Vec<Rule>,
}

/// Ordered mapping from file base name to the rules that apply to it.
///
/// Patterns may overlap; entries are scanned top to bottom and the first
/// match wins. A name that matches nothing is not checked at all.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    entries: Vec<DispatchEntry>,
}

impl RuleRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry with lower priority than every existing one.
    ///
    /// # Errors
    /// Returns an error if `pattern` is not a valid regular expression.
    pub fn register(&mut self, pattern: &str, rules: Vec<Rule>) -> Result<()> {
        let pattern = Regex::new(pattern).map_err(|source| StyleGuardError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })?;
        self.entries.push(DispatchEntry { pattern, rules });
        Ok(())
    }

    /// Rules for the first entry whose pattern matches `file_name`.
    #[must_use]
    pub fn select(&self, file_name: &str) -> Option<&[Rule]> {
        self.select_entry(file_name)
            .map(|entry| entry.rules.as_slice())
    }

    /// Like [`select`](Self::select), but also returns the matching entry.
    #[must_use]
    pub fn select_entry(&self, file_name: &str) -> Option<&DispatchEntry> {
        self.entries
            .iter()
            .find(|entry| entry.pattern.is_match(file_name))
    }

    /// Dispatch on the base name of `path`.
    ///
    /// Names that are not valid UTF-8 are matched lossily, so `bad\xff.cpp`
    /// is still checked as a C++ source.
    #[must_use]
    pub fn select_for_path(&self, path: &Path) -> Option<&[Rule]> {
        path.file_name()
            .and_then(|name| self.select(&name.to_string_lossy()))
    }

    #[must_use]
    pub fn entries(&self) -> &[DispatchEntry] {
        &self.entries
    }

    /// The built-in table: C++ sources and headers first, then build, CI,
    /// script, doc and stylesheet files.
    ///
    /// # Panics
    ///
    /// Panics only if a built-in pattern is invalid, which the unit tests rule out.
    #[must_use]
    pub fn builtin() -> Self {
        let cpp_rules: Vec<Rule> = BASE_RULES.iter().chain(CPP_RULES).copied().collect();
        let table: [(&str, &[Rule]); 10] = [
            (r"(?i)^.*\.cpp$", cpp_rules.as_slice()),
            (r"(?i)^.*\.h$", cpp_rules.as_slice()),
            (r"^CMakeLists\.txt$", BASE_RULES),
            (r"(?i)^.*\.cmake$", BASE_RULES),
            (r"(?i)^.*\.in$", BASE_RULES),
            (r"(?i)^.*\.yml$", BASE_RULES),
            (r"(?i)^.*\.yaml$", BASE_RULES),
            (r"(?i)^.*\.sh$", BASE_RULES),
            (r"(?i)^.*\.md$", BASE_RULES),
            (r"(?i)^.*\.qss$", BASE_RULES),
        ];

        let mut registry = Self::new();
        for (pattern, rules) in table {
            registry
                .register(pattern, rules.to_vec())
                // SAFETY: Patterns are static strings covered by tests
                .expect("valid built-in pattern");
        }
        registry
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
