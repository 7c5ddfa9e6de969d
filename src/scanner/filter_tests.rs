use std::path::Path;

use super::*;

fn regexes(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

#[test]
fn empty_filter_accepts_all() {
    let filter = PathFilter::new(vec![], &[]).unwrap();

    assert!(filter.should_include(Path::new("src/main.cpp")));
    assert!(filter.should_include(Path::new("Makefile")));
}

#[test]
fn regex_is_searched_anywhere_in_path() {
    let filter = PathFilter::new(regexes(&["third_party", r"^\./build/"]), &[]).unwrap();

    assert!(!filter.should_include(Path::new("./src/third_party/zlib/zlib.h")));
    assert!(!filter.should_include(Path::new("./build/gen.cpp")));
    assert!(filter.should_include(Path::new("./src/build/gen.cpp")));
    assert!(filter.should_include(Path::new("./src/main.cpp")));
}

#[test]
fn glob_patterns_exclude() {
    let filter = PathFilter::new(
        vec![],
        &["**/generated/**".to_string(), "**/*.pb.h".to_string()],
    )
    .unwrap();

    assert!(!filter.should_include(Path::new("src/generated/ui.h")));
    assert!(!filter.should_include(Path::new("src/proto/msg.pb.h")));
    assert!(filter.should_include(Path::new("src/proto/msg.h")));
}

#[test]
fn regex_and_glob_combine() {
    let filter = PathFilter::new(regexes(&["vendor"]), &["**/*.md".to_string()]).unwrap();

    assert!(!filter.should_include(Path::new("vendor/lib.cpp")));
    assert!(!filter.should_include(Path::new("docs/README.md")));
    assert!(filter.should_include(Path::new("src/lib.cpp")));
}

#[test]
fn invalid_glob_returns_error() {
    let result = PathFilter::new(vec![], &["[invalid".to_string()]);
    assert!(matches!(
        result,
        Err(StyleGuardError::InvalidPattern { .. })
    ));
}
