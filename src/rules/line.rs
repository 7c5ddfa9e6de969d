use crate::config::Config;

use super::{LineRule, Outcome};

/// Flags lines whose content changes when trailing whitespace is trimmed.
pub struct NoTrailingWhitespace;

impl LineRule for NoTrailingWhitespace {
    fn name(&self) -> &'static str {
        "no_trailing_whitespace"
    }

    fn check_line(&self, line: &str, _config: &Config) -> Outcome {
        if line.trim_end() == line {
            Outcome::Clean
        } else {
            Outcome::Error("Line contains trailing whitespace.".to_string())
        }
    }
}

/// Flags a horizontal tab anywhere in the leading whitespace run.
pub struct NoTabs;

impl LineRule for NoTabs {
    fn name(&self) -> &'static str {
        "no_tabs"
    }

    fn check_line(&self, line: &str, _config: &Config) -> Outcome {
        let indent_len = line.len() - line.trim_start().len();
        if line[..indent_len].contains('\t') {
            Outcome::Error("Line is indented using tabs.".to_string())
        } else {
            Outcome::Clean
        }
    }
}

/// Flags the `\r` left behind when a CRLF file is split on `\n`.
pub struct UnixLinebreak;

impl LineRule for UnixLinebreak {
    fn name(&self) -> &'static str {
        "unix_linebreak"
    }

    fn check_line(&self, line: &str, _config: &Config) -> Outcome {
        if line.ends_with('\r') {
            Outcome::Error("Line ends with CRLF.".to_string())
        } else {
            Outcome::Clean
        }
    }
}

/// Flags C headers included as `<name.h>` instead of their C++ counterparts.
///
/// Precedence: configured exceptions, then the path-qualified form
/// (`<GL/gl.h>`), then the bare form. The allowed form is also a match of the
/// bare form, so the order cannot be collapsed.
pub struct NoBadCppPatterns;

impl LineRule for NoBadCppPatterns {
    fn name(&self) -> &'static str {
        "no_bad_cpp_patterns"
    }

    fn check_line(&self, line: &str, config: &Config) -> Outcome {
        let includes = &config.includes;
        if includes.exceptions.iter().any(|re| re.is_match(line)) {
            return Outcome::Clean;
        }
        if includes.allowed.is_match(line) {
            return Outcome::Clean;
        }
        if includes.disallowed.is_match(line) {
            return Outcome::Error(
                "Don't use C includes (like <math.h>), use C++ includes (like <cmath>)."
                    .to_string(),
            );
        }
        Outcome::Clean
    }
}

/// Hard (`maxcols`) and soft (`maxcols_soft`) line-length limits, in characters.
pub struct LimitLineLength;

impl LineRule for LimitLineLength {
    fn name(&self) -> &'static str {
        "limit_line_length"
    }

    fn check_line(&self, line: &str, config: &Config) -> Outcome {
        let len = line.chars().count();
        if len > config.maxcols {
            Outcome::Error(format!("Line too long ({len}>{}).", config.maxcols))
        } else if len > config.maxcols_soft {
            Outcome::Warning(format!(
                "Line too long ({len}>{}) if there's no good reason.",
                config.maxcols_soft
            ))
        } else {
            Outcome::Clean
        }
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
