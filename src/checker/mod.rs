mod result;

pub use result::{FileReport, Problem, Severity};

use std::path::Path;

use crate::config::Config;
use crate::rules::{Outcome, Rule};

/// Applies an ordered rule list to one file's content.
///
/// Every rule runs on every line even after an error has been found, so a
/// single run reports everything wrong with the file.
pub struct FileChecker<'a> {
    config: &'a Config,
}

impl<'a> FileChecker<'a> {
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Decode `bytes` as UTF-8 and check the text.
    ///
    /// Invalid UTF-8 yields an unreadable report; it is not a rule violation.
    #[must_use]
    pub fn check_bytes(&self, path: &Path, bytes: &[u8], rules: &[Rule]) -> FileReport {
        match std::str::from_utf8(bytes) {
            Ok(content) => self.check_content(path, content, rules),
            Err(e) => FileReport::unreadable(path, format!("File is not valid UTF-8: {e}")),
        }
    }

    /// Split on `\n` (so CRLF files keep their `\r`) and apply `rules` in order.
    #[must_use]
    pub fn check_content(&self, path: &Path, content: &str, rules: &[Rule]) -> FileReport {
        let lines: Vec<&str> = content.split('\n').collect();
        let mut report = FileReport::new(path);

        for rule in rules {
            match rule {
                Rule::Line(line_rule) => {
                    for (idx, line) in lines.iter().enumerate() {
                        let outcome = line_rule.check_line(line, self.config);
                        push_problem(&mut report, rule.name(), outcome, Some(idx + 1));
                    }
                }
                Rule::File(file_rule) => {
                    let outcome = file_rule.check_file(&lines, self.config);
                    push_problem(&mut report, rule.name(), outcome, None);
                }
            }
        }

        report
    }

    /// Verdict-only shortcut over [`check_bytes`](Self::check_bytes).
    #[must_use]
    pub fn check(&self, path: &Path, bytes: &[u8], rules: &[Rule]) -> bool {
        self.check_bytes(path, bytes, rules).is_compliant()
    }
}

fn push_problem(report: &mut FileReport, rule: &'static str, outcome: Outcome, line: Option<usize>) {
    let (severity, message) = match outcome {
        Outcome::Clean => return,
        Outcome::Warning(message) => (Severity::Warning, message),
        Outcome::Error(message) => (Severity::Error, message),
    };
    report.problems.push(Problem {
        rule,
        severity,
        message,
        line,
    });
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
