//! Fixture harness for the FBI parser.
//!
//! Valid documents live in test/fbi/ with expected JSON renderings of
//! their generic export in test/json/ under the same basename. Documents
//! expected to fail live in test/nbi/ alongside .error files holding the
//! expected error message.

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;

/// Root fixture directory at the workspace root.
fn test_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("test")
}

/// All fixture paths with the given extension under a test/ subdirectory.
fn fixture_paths(subdir: &str, ext: &str) -> Vec<PathBuf> {
    let pattern = test_root().join(subdir).join(format!("*.{}", ext));
    let mut paths: Vec<PathBuf> = glob(pattern.to_str().unwrap())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .collect();
    paths.sort();
    paths
}

/// Expected-output path for a fixture: same basename, different subdir/ext.
fn expected_path(fixture: &Path, subdir: &str, ext: &str) -> PathBuf {
    let basename = fixture.file_stem().unwrap().to_string_lossy();
    test_root().join(subdir).join(format!("{}.{}", basename, ext))
}

#[test]
fn valid_fixtures_produce_expected_json() {
    let fixtures = fixture_paths("fbi", "fbi");
    assert!(!fixtures.is_empty(), "no fixtures found in test/fbi/");

    for path in fixtures {
        let source = fs::read_to_string(&path).unwrap();
        let root = match libfbi::parse(&source) {
            Ok(root) => root,
            Err(err) => panic!("{} failed to parse: {}", path.display(), err),
        };
        let rendered = libfbi::encode_json(&root.to_raw());
        let expected = fs::read_to_string(expected_path(&path, "json", "json")).unwrap();
        assert_eq!(
            rendered.trim(),
            expected.trim(),
            "unexpected export for {}",
            path.display()
        );
    }
}

#[test]
fn invalid_fixtures_produce_expected_errors() {
    let fixtures = fixture_paths("nbi", "nbi");
    assert!(!fixtures.is_empty(), "no fixtures found in test/nbi/");

    for path in fixtures {
        let source = fs::read_to_string(&path).unwrap();
        let err = match libfbi::parse(&source) {
            Ok(_) => panic!("{} parsed but should have failed", path.display()),
            Err(err) => err,
        };
        let expected = fs::read_to_string(expected_path(&path, "nbi", "error")).unwrap();
        assert_eq!(
            err.to_string(),
            expected.trim(),
            "unexpected error for {}",
            path.display()
        );
    }
}

#[test]
fn valid_fixtures_roundtrip_through_outline() {
    // The outline rendering is a convenience, but it must at least cover
    // every section exactly once: count the "[" header lines.
    for path in fixture_paths("fbi", "fbi") {
        let source = fs::read_to_string(&path).unwrap();
        let root = libfbi::parse(&source).unwrap();
        let outline = root.outline();
        let headers = outline
            .lines()
            .filter(|line| line.trim_start().starts_with('['))
            .count();
        assert_eq!(
            headers,
            count_sections(&root),
            "outline mismatch for {}",
            path.display()
        );
    }
}

fn count_sections(section: &libfbi::Section) -> usize {
    1 + section.children.iter().map(count_sections).sum::<usize>()
}
