use super::*;
use crate::config::RawConfig;

#[test]
fn explain_cpp_lists_all_rules_in_order() {
    let registry = RuleRegistry::builtin();

    let out = explain_path(Path::new("src/main.cpp"), &registry, None);

    assert!(out.contains("Matched pattern: (?i)^.*\\.cpp$"));
    let first = out.find("no_trailing_whitespace (line)").unwrap();
    let eof = out.find("single_blank_line_eof (file)").unwrap();
    let last = out.find("limit_line_length (line)").unwrap();
    assert!(first < eof && eof < last);
}

#[test]
fn explain_unmatched_name() {
    let registry = RuleRegistry::builtin();

    let out = explain_path(Path::new("tools/gen.py"), &registry, None);

    assert!(out.contains("Not checked: no pattern matches 'gen.py'"));
}

#[test]
fn explain_excluded_path_wins_over_dispatch() {
    let registry = RuleRegistry::builtin();
    let config = Config::from_raw(RawConfig {
        excluded_paths: vec!["^third_party/".to_string()],
        ..RawConfig::default()
    })
    .unwrap();

    let out = explain_path(Path::new("third_party/zlib.h"), &registry, Some(&config));

    assert!(out.contains("Excluded by pattern: ^third_party/"));
    assert!(!out.contains("Rules:"));
}
