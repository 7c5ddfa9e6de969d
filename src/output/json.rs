use serde::Serialize;

use crate::checker::{FileReport, Severity};
use crate::error::Result;
use crate::runner::RunSummary;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    files: Vec<FileResult>,
    uncompliant: Vec<String>,
}

#[derive(Serialize)]
struct Summary {
    compliant: bool,
    checked: usize,
    skipped: usize,
    uncompliant: usize,
    errors: usize,
    warnings: usize,
}

#[derive(Serialize)]
struct FileResult {
    path: String,
    compliant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    read_error: Option<String>,
    problems: Vec<ProblemResult>,
}

#[derive(Serialize)]
struct ProblemResult {
    rule: &'static str,
    severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &RunSummary) -> Result<String> {
        let uncompliant: Vec<String> = summary
            .uncompliant()
            .iter()
            .map(|p| p.display().to_string())
            .collect();

        let output = JsonOutput {
            summary: Summary {
                compliant: summary.is_compliant(),
                checked: summary.checked(),
                skipped: summary.skipped.len(),
                uncompliant: uncompliant.len(),
                errors: summary.error_count(),
                warnings: summary.warning_count(),
            },
            files: summary.reports.iter().map(convert_report).collect(),
            uncompliant,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_report(report: &FileReport) -> FileResult {
    FileResult {
        path: report.path.display().to_string(),
        compliant: report.is_compliant(),
        read_error: report.read_error.clone(),
        problems: report
            .problems
            .iter()
            .map(|p| ProblemResult {
                rule: p.rule,
                severity: p.severity,
                line: p.line,
                message: p.message.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
