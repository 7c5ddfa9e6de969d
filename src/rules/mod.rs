//! Style rules: pure predicates over a single line or a whole file.
//!
//! A rule never prints and never fails; it answers with an [`Outcome`]. The
//! [`Rule`] enum tags each rule with its scope so the checker can dispatch
//! without inspecting input shapes.

mod file;
mod line;

pub use file::SingleBlankLineEof;
pub use line::{LimitLineLength, NoBadCppPatterns, NoTabs, NoTrailingWhitespace, UnixLinebreak};

use std::fmt;

use crate::config::Config;

/// Result of applying one rule to one line or one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Warning(String),
    Error(String),
}

impl Outcome {
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        matches!(self, Self::Clean)
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// A rule evaluated once per line, without knowledge of neighbours or file identity.
pub trait LineRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn check_line(&self, line: &str, config: &Config) -> Outcome;
}

/// A rule evaluated once over the file's `\n`-split line sequence.
///
/// A file ending in `\n` yields a trailing empty element; rules see it as is.
pub trait FileRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn check_file(&self, lines: &[&str], config: &Config) -> Outcome;
}

/// A registered rule, tagged with its scope.
#[derive(Clone, Copy)]
pub enum Rule {
    Line(&'static dyn LineRule),
    File(&'static dyn FileRule),
}

impl Rule {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Line(rule) => rule.name(),
            Self::File(rule) => rule.name(),
        }
    }

    #[must_use]
    pub const fn scope(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::File(_) => "file",
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule::{}({})", self.scope(), self.name())
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.scope() == other.scope() && self.name() == other.name()
    }
}

pub const NO_TRAILING_WHITESPACE: Rule = Rule::Line(&NoTrailingWhitespace);
pub const NO_TABS: Rule = Rule::Line(&NoTabs);
pub const UNIX_LINEBREAK: Rule = Rule::Line(&UnixLinebreak);
pub const NO_BAD_CPP_PATTERNS: Rule = Rule::Line(&NoBadCppPatterns);
pub const LIMIT_LINE_LENGTH: Rule = Rule::Line(&LimitLineLength);
pub const SINGLE_BLANK_LINE_EOF: Rule = Rule::File(&SingleBlankLineEof);

/// Every built-in rule, in the order they are documented.
pub const ALL_RULES: &[Rule] = &[
    NO_TRAILING_WHITESPACE,
    NO_TABS,
    UNIX_LINEBREAK,
    NO_BAD_CPP_PATTERNS,
    LIMIT_LINE_LENGTH,
    SINGLE_BLANK_LINE_EOF,
];

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
