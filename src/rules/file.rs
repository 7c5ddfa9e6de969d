use crate::config::Config;

use super::{FileRule, Outcome};

/// Requires exactly one trailing line separator.
///
/// Works on the raw `\n` split: a compliant file ends in a single empty
/// element, and an empty file (`[""]`) is compliant.
pub struct SingleBlankLineEof;

impl FileRule for SingleBlankLineEof {
    fn name(&self) -> &'static str {
        "single_blank_line_eof"
    }

    fn check_file(&self, lines: &[&str], _config: &Config) -> Outcome {
        match lines {
            [.., last] if !last.is_empty() => {
                Outcome::Error("File does not end with blank line.".to_string())
            }
            [.., second_last, _] if second_last.is_empty() => {
                Outcome::Error("File ends with more than one blank line.".to_string())
            }
            _ => Outcome::Clean,
        }
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
