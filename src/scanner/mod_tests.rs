use std::path::Path;

use regex::Regex;
use tempfile::TempDir;

use super::*;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn should_include(&self, _path: &Path) -> bool {
        true
    }
}

#[test]
fn scanner_finds_files_in_subdirectories_sorted() {
    let temp_dir = TempDir::new().unwrap();
    let sub_dir = temp_dir.path().join("src");
    std::fs::create_dir(&sub_dir).unwrap();
    std::fs::write(sub_dir.join("b.cpp"), "").unwrap();
    std::fs::write(sub_dir.join("a.cpp"), "").unwrap();
    std::fs::write(temp_dir.path().join("CMakeLists.txt"), "").unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 3);
    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
}

#[test]
fn scanner_applies_configured_exclusions() {
    let temp_dir = TempDir::new().unwrap();
    let vendor = temp_dir.path().join("vendor");
    std::fs::create_dir(&vendor).unwrap();
    std::fs::write(vendor.join("lib.h"), "").unwrap();
    std::fs::write(temp_dir.path().join("main.cpp"), "").unwrap();

    let filter = PathFilter::new(vec![Regex::new("/vendor/").unwrap()], &[]).unwrap();
    let files = DirectoryScanner::new(filter).scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("main.cpp"));
}

#[test]
fn scanner_with_gitignore_skips_ignored_files() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(".gitignore"), "build/\n").unwrap();
    let build = temp_dir.path().join("build");
    std::fs::create_dir(&build).unwrap();
    std::fs::write(build.join("gen.cpp"), "").unwrap();
    std::fs::write(temp_dir.path().join("main.cpp"), "").unwrap();

    let scanner = DirectoryScanner::with_gitignore(AcceptAllFilter, true);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert!(files.iter().any(|f| f.ends_with("main.cpp")));
    assert!(!files.iter().any(|f| f.ends_with("gen.cpp")));
}

#[test]
fn scanner_missing_root_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let scanner = DirectoryScanner::new(AcceptAllFilter);

    assert!(scanner.scan(&temp_dir.path().join("nope")).is_err());
}
