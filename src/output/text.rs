use std::io::Write;

use crate::checker::{FileReport, Problem, Severity};
use crate::error::Result;
use crate::runner::RunSummary;

use super::{ColorMode, OutputFormatter, ansi};

/// Line-oriented report: one line per problem, then the verdict.
///
/// ```text
/// ERROR in src/a.cpp:3: Line contains trailing whitespace.
/// WARNING in src/a.cpp:9: Line too long (104>100) if there's no good reason.
/// Uncompliant files (1)
/// src/a.cpp
/// ```
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn severity_label(&self, severity: Severity) -> String {
        let color = match severity {
            Severity::Warning => ansi::YELLOW,
            Severity::Error => ansi::RED,
        };
        self.colorize(&severity.to_string(), color)
    }

    fn format_problem(&self, report: &FileReport, problem: &Problem, output: &mut Vec<u8>) {
        let location = problem.line.map_or_else(
            || report.path.display().to_string(),
            |line| format!("{}:{line}", report.path.display()),
        );
        writeln!(
            output,
            "{} in {location}: {}",
            self.severity_label(problem.severity),
            problem.message
        )
        .ok();
    }

    fn format_report(&self, report: &FileReport, output: &mut Vec<u8>) {
        if let Some(reason) = &report.read_error {
            writeln!(
                output,
                "{} in {}: {reason}",
                self.severity_label(Severity::Error),
                report.path.display()
            )
            .ok();
        }
        for problem in &report.problems {
            self.format_problem(report, problem, output);
        }
    }

    fn format_summary(&self, summary: &RunSummary, output: &mut Vec<u8>) {
        let uncompliant = summary.uncompliant();
        if uncompliant.is_empty() {
            writeln!(output, "{}", self.colorize("All files comply.", ansi::GREEN)).ok();
            return;
        }

        let header = format!("Uncompliant files ({})", uncompliant.len());
        writeln!(output, "{}", self.colorize(&header, ansi::RED)).ok();
        for path in uncompliant {
            writeln!(output, "{}", path.display()).ok();
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &RunSummary) -> Result<String> {
        let mut output = Vec::new();

        for report in &summary.reports {
            self.format_report(report, &mut output);
        }
        self.format_summary(summary, &mut output);

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
