use std::path::PathBuf;

use super::*;
use crate::checker::Problem;

fn summary() -> RunSummary {
    RunSummary {
        reports: vec![
            FileReport {
                path: PathBuf::from("src/a.cpp"),
                problems: vec![
                    Problem {
                        rule: "no_tabs",
                        severity: Severity::Error,
                        message: "Line is indented using tabs.".to_string(),
                        line: Some(2),
                    },
                    Problem {
                        rule: "limit_line_length",
                        severity: Severity::Warning,
                        message: "Line too long (101>100) if there's no good reason.".to_string(),
                        line: Some(5),
                    },
                ],
                read_error: None,
            },
            FileReport::new("src/b.cpp"),
        ],
        skipped: vec![PathBuf::from("main.py")],
    }
}

#[test]
fn json_summary_counts() {
    let output = JsonFormatter.format(&summary()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["summary"]["compliant"], false);
    assert_eq!(value["summary"]["checked"], 2);
    assert_eq!(value["summary"]["skipped"], 1);
    assert_eq!(value["summary"]["uncompliant"], 1);
    assert_eq!(value["summary"]["errors"], 1);
    assert_eq!(value["summary"]["warnings"], 1);
    assert_eq!(value["uncompliant"][0], "src/a.cpp");
}

#[test]
fn json_problem_fields() {
    let output = JsonFormatter.format(&summary()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    let problem = &value["files"][0]["problems"][0];
    assert_eq!(problem["rule"], "no_tabs");
    assert_eq!(problem["severity"], "error");
    assert_eq!(problem["line"], 2);
    assert_eq!(value["files"][1]["compliant"], true);
    assert!(value["files"][1].get("read_error").is_none());
}

#[test]
fn json_file_rule_has_no_line() {
    let summary = RunSummary {
        reports: vec![FileReport {
            path: PathBuf::from("a.md"),
            problems: vec![Problem {
                rule: "single_blank_line_eof",
                severity: Severity::Error,
                message: "File does not end with blank line.".to_string(),
                line: None,
            }],
            read_error: None,
        }],
        skipped: vec![],
    };

    let output = JsonFormatter.format(&summary).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert!(value["files"][0]["problems"][0].get("line").is_none());
}
