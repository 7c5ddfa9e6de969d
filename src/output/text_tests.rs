use std::path::PathBuf;

use super::*;

fn problem(severity: Severity, line: Option<usize>, message: &str) -> Problem {
    Problem {
        rule: "test_rule",
        severity,
        message: message.to_string(),
        line,
    }
}

fn report(path: &str, problems: Vec<Problem>) -> FileReport {
    FileReport {
        path: PathBuf::from(path),
        problems,
        read_error: None,
    }
}

#[test]
fn all_compliant_prints_single_message() {
    let summary = RunSummary {
        reports: vec![report("a.cpp", vec![])],
        skipped: vec![],
    };

    let output = TextFormatter::new(ColorMode::Never).format(&summary).unwrap();

    assert_eq!(output, "All files comply.\n");
}

#[test]
fn problems_include_location_and_severity() {
    let summary = RunSummary {
        reports: vec![report(
            "src/a.cpp",
            vec![
                problem(Severity::Error, Some(3), "Line contains trailing whitespace."),
                problem(Severity::Warning, Some(9), "Line too long (104>100) if there's no good reason."),
                problem(Severity::Error, None, "File does not end with blank line."),
            ],
        )],
        skipped: vec![],
    };

    let output = TextFormatter::new(ColorMode::Never).format(&summary).unwrap();

    assert_eq!(
        output,
        "ERROR in src/a.cpp:3: Line contains trailing whitespace.\n\
         WARNING in src/a.cpp:9: Line too long (104>100) if there's no good reason.\n\
         ERROR in src/a.cpp: File does not end with blank line.\n\
         Uncompliant files (1)\n\
         src/a.cpp\n"
    );
}

#[test]
fn warnings_only_still_comply() {
    let summary = RunSummary {
        reports: vec![report(
            "a.h",
            vec![problem(Severity::Warning, Some(1), "long")],
        )],
        skipped: vec![],
    };

    let output = TextFormatter::new(ColorMode::Never).format(&summary).unwrap();

    assert!(output.starts_with("WARNING in a.h:1: long\n"));
    assert!(output.ends_with("All files comply.\n"));
}

#[test]
fn unreadable_file_is_reported_as_error() {
    let summary = RunSummary {
        reports: vec![FileReport::unreadable("bin.md", "File is not valid UTF-8")],
        skipped: vec![],
    };

    let output = TextFormatter::new(ColorMode::Never).format(&summary).unwrap();

    assert!(output.contains("ERROR in bin.md: File is not valid UTF-8\n"));
    assert!(output.contains("Uncompliant files (1)\nbin.md\n"));
}

#[test]
fn uncompliant_list_keeps_order() {
    let bad = || vec![problem(Severity::Error, Some(1), "bad")];
    let summary = RunSummary {
        reports: vec![report("b.md", bad()), report("ok.md", vec![]), report("a.md", bad())],
        skipped: vec![],
    };

    let output = TextFormatter::new(ColorMode::Never).format(&summary).unwrap();

    assert!(output.ends_with("Uncompliant files (2)\nb.md\na.md\n"));
}

#[test]
fn colors_wrap_severity_labels() {
    let summary = RunSummary {
        reports: vec![report("a.md", vec![problem(Severity::Error, Some(1), "bad")])],
        skipped: vec![],
    };

    let output = TextFormatter::new(ColorMode::Always).format(&summary).unwrap();

    assert!(output.contains("\x1b[31mERROR\x1b[0m in a.md:1: bad"));
}
