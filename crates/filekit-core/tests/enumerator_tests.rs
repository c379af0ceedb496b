//! Integration tests for wildcard file enumeration.
//!
//! Each test builds a small tree in a temp directory, registers specs
//! against it, and compares the sorted set of visited paths.

use std::fs;
use std::path::{Path, PathBuf};

use filekit_core::{EnumerateError, FileEnumerator};
use tempfile::TempDir;

// ============================================================================
// Helpers
// ============================================================================

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"content\n").unwrap();
}

/// Source-tree fixture: three files at the top and a copy one level down.
fn source_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in ["FileEnumerator.rs", "FileEnumerator.h", "FileEnumeratorTest.rs"] {
        touch(dir.path(), name);
        touch(dir.path(), &format!("TempTestDir/{}", name));
    }
    touch(dir.path(), "Unrelated.txt");
    dir
}

fn spec(root: &Path, pattern: &str) -> PathBuf {
    root.join(pattern)
}

fn enumerate_sorted(files: &FileEnumerator) -> Vec<PathBuf> {
    let mut found = Vec::new();
    files
        .enumerate(|path| {
            found.push(path.to_path_buf());
            Ok::<(), EnumerateError>(())
        })
        .unwrap();
    found.sort();
    found
}

fn expected(root: &Path, names: &[&str]) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = names.iter().map(|n| root.join(n)).collect();
    paths.sort();
    paths
}

// ============================================================================
// Shallow and recursive enumeration
// ============================================================================

#[test]
fn shallow_without_wildcard() {
    let tree = source_tree();
    let root = tree.path();

    let mut files = FileEnumerator::new();
    files.insert(spec(root, "FileEnumerator.rs")).unwrap();

    assert_eq!(enumerate_sorted(&files), expected(root, &["FileEnumerator.rs"]));
}

#[test]
fn shallow_with_wildcard() {
    let tree = source_tree();
    let root = tree.path();

    let mut files = FileEnumerator::new();
    files.insert(spec(root, "FileEn*.rs")).unwrap();

    assert_eq!(
        enumerate_sorted(&files),
        expected(root, &["FileEnumerator.rs", "FileEnumeratorTest.rs"])
    );
}

#[test]
fn recursive_without_wildcard() {
    let tree = source_tree();
    let root = tree.path();

    let mut files = FileEnumerator::new();
    files.set_recursive(true);
    files.insert(spec(root, "FileEnumerator.rs")).unwrap();
    files.insert(spec(root, "FileEnumerator.h")).unwrap();

    assert_eq!(
        enumerate_sorted(&files),
        expected(
            root,
            &[
                "FileEnumerator.rs",
                "FileEnumerator.h",
                "TempTestDir/FileEnumerator.rs",
                "TempTestDir/FileEnumerator.h",
            ]
        )
    );
}

#[test]
fn recursive_with_wildcard() {
    let tree = source_tree();
    let root = tree.path();

    let mut files = FileEnumerator::new();
    files.set_recursive(true);
    files.insert(spec(root, "FileEn*.rs")).unwrap();
    files.insert(spec(root, "FileEn*.h")).unwrap();

    assert_eq!(
        enumerate_sorted(&files),
        expected(
            root,
            &[
                "FileEnumerator.rs",
                "FileEnumerator.h",
                "FileEnumeratorTest.rs",
                "TempTestDir/FileEnumerator.rs",
                "TempTestDir/FileEnumerator.h",
                "TempTestDir/FileEnumeratorTest.rs",
            ]
        )
    );
}

#[test]
fn recursive_versus_shallow_on_small_tree() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    touch(root, "a.txt");
    touch(root, "sub/b.txt");

    let mut shallow = FileEnumerator::new();
    shallow.insert(spec(root, "*.txt")).unwrap();
    assert_eq!(enumerate_sorted(&shallow), expected(root, &["a.txt"]));

    let mut recursive = FileEnumerator::new();
    recursive.set_recursive(true);
    recursive.insert(spec(root, "*.txt")).unwrap();
    assert_eq!(
        enumerate_sorted(&recursive),
        expected(root, &["a.txt", "sub/b.txt"])
    );
}

// ============================================================================
// Grouping and re-enumeration
// ============================================================================

#[test]
fn overlapping_specs_in_one_directory_yield_no_duplicates() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    touch(root, "report.txt");
    touch(root, "notes.md");
    touch(root, "image.png");

    let mut files = FileEnumerator::new();
    files.insert(spec(root, "*.txt")).unwrap();
    files.insert(spec(root, "r*")).unwrap();
    files.insert(spec(root, "*.md")).unwrap();

    assert_eq!(
        enumerate_sorted(&files),
        expected(root, &["notes.md", "report.txt"])
    );
}

#[test]
fn specs_in_several_directories() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    touch(root, "one/a.rs");
    touch(root, "one/b.txt");
    touch(root, "two/c.rs");

    let mut files = FileEnumerator::new();
    files.insert(spec(root, "one/*.rs")).unwrap();
    files.insert(spec(root, "two/*.rs")).unwrap();

    assert_eq!(
        enumerate_sorted(&files),
        expected(root, &["one/a.rs", "two/c.rs"])
    );
}

#[test]
fn directories_are_visited_in_ascending_order() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    touch(root, "b/x.txt");
    touch(root, "a/x.txt");

    let mut files = FileEnumerator::new();
    files.insert(spec(root, "b/*.txt")).unwrap();
    files.insert(spec(root, "a/*.txt")).unwrap();

    let mut order = Vec::new();
    files
        .enumerate(|path| {
            order.push(path.to_path_buf());
            Ok::<(), EnumerateError>(())
        })
        .unwrap();
    assert_eq!(order, vec![root.join("a/x.txt"), root.join("b/x.txt")]);
}

#[test]
fn re_enumeration_is_idempotent() {
    let tree = source_tree();
    let root = tree.path();

    let mut files = FileEnumerator::new();
    files.set_recursive(true);
    files.insert(spec(root, "*")).unwrap();

    let first = enumerate_sorted(&files);
    let second = enumerate_sorted(&files);
    assert_eq!(first, second);
    assert_eq!(first.len(), 7);
}

#[test]
fn inserts_after_enumeration_are_picked_up() {
    let tree = source_tree();
    let root = tree.path();

    let mut files = FileEnumerator::new();
    files.insert(spec(root, "*.h")).unwrap();
    assert_eq!(enumerate_sorted(&files).len(), 1);

    files.insert(spec(root, "*.txt")).unwrap();
    assert_eq!(enumerate_sorted(&files).len(), 2);
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn metacharacters_in_names_match_literally() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    touch(root, "a+b (1).txt");
    touch(root, "aab 1.txt");

    let mut files = FileEnumerator::new();
    files.insert(spec(root, "a+b (1).txt")).unwrap();

    assert_eq!(enumerate_sorted(&files), expected(root, &["a+b (1).txt"]));
}

#[test]
fn matching_subdirectory_is_not_visited() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::create_dir(root.join("logs.txt")).unwrap();
    touch(root, "real.txt");

    let mut files = FileEnumerator::new();
    files.insert(spec(root, "*.txt")).unwrap();

    assert_eq!(enumerate_sorted(&files), expected(root, &["real.txt"]));
}

#[cfg(unix)]
#[test]
fn broken_symlink_is_skipped_silently() {
    use std::os::unix::fs::symlink;

    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    touch(root, "kept.txt");
    symlink(root.join("gone.txt"), root.join("dangling.txt")).unwrap();

    let mut files = FileEnumerator::new();
    files.insert(spec(root, "*.txt")).unwrap();

    assert_eq!(enumerate_sorted(&files), expected(root, &["kept.txt"]));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn missing_directory_fails_with_access_error() {
    let tmp = TempDir::new().unwrap();

    let mut files = FileEnumerator::new();
    files.insert(spec(tmp.path(), "missing/*.txt")).unwrap();

    let result = files.enumerate(|_| Ok::<(), EnumerateError>(()));
    assert!(matches!(
        result,
        Err(EnumerateError::DirectoryAccess { ref dir, .. }) if dir.ends_with("missing")
    ));
}

#[test]
fn visitor_error_aborts_enumeration() {
    #[derive(Debug)]
    enum VisitError {
        Stop,
        Enumerate,
    }

    impl From<EnumerateError> for VisitError {
        fn from(_: EnumerateError) -> Self {
            VisitError::Enumerate
        }
    }

    let tree = source_tree();
    let mut files = FileEnumerator::new();
    files.set_recursive(true);
    files.insert(spec(tree.path(), "*")).unwrap();

    let mut visits = 0;
    let result = files.enumerate(|_| {
        visits += 1;
        Err(VisitError::Stop)
    });

    assert!(matches!(result, Err(VisitError::Stop)));
    assert_eq!(visits, 1);
}
