//! File specifications and their grouping by directory.

use std::collections::BTreeMap;
use std::path::{is_separator, Path, PathBuf};

use crate::error::{EnumerateError, EnumerateResult};

// ============================================================================
// FileSpec
// ============================================================================

/// One registered wildcard: a path whose final segment may contain `*`/`?`.
///
/// Directory components are always taken literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    path: PathBuf,
    directory: PathBuf,
    file_name: String,
}

impl FileSpec {
    /// Parse a spec, deriving its directory and file-name pattern.
    ///
    /// Fails with [`EnumerateError::InvalidSpec`] when the path has no
    /// file-name segment: empty paths, `.`, `..`, roots, and anything
    /// ending in a path separator or a `.` segment.
    pub fn parse(spec: impl AsRef<Path>) -> EnumerateResult<Self> {
        let path = spec.as_ref();
        let text = path.to_string_lossy();
        // `Path::file_name` skips a trailing `.`, so check the raw last segment.
        let last = text.rsplit(is_separator).next().unwrap_or_default();
        if last.is_empty() || last == "." {
            return Err(EnumerateError::invalid_spec(text));
        }

        let file_name = path
            .file_name()
            .ok_or_else(|| EnumerateError::invalid_spec(text.to_string()))?
            .to_string_lossy()
            .into_owned();

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(FileSpec {
            path: path.to_path_buf(),
            directory,
            file_name,
        })
    }

    /// The full spec as given.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parent of the spec, or `.` if it has none.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Final path segment, before wildcard translation.
    pub fn file_name_pattern(&self) -> &str {
        &self.file_name
    }

    /// Returns true if the file-name pattern contains a wildcard.
    pub fn has_wildcard(&self) -> bool {
        super::glob::has_wildcard(&self.file_name)
    }
}

// ============================================================================
// FileSpecRegistry
// ============================================================================

/// Multi-valued mapping from directory to the specs registered under it.
///
/// Specs sharing a directory are kept side by side in insertion order and
/// never merged. Directory keys compare with `Path` equality, which is
/// component-wise and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct FileSpecRegistry {
    by_directory: BTreeMap<PathBuf, Vec<FileSpec>>,
    count: usize,
}

impl FileSpecRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a spec under its directory.
    pub fn insert(&mut self, spec: FileSpec) {
        self.by_directory
            .entry(spec.directory.clone())
            .or_default()
            .push(spec);
        self.count += 1;
    }

    /// Every spec registered under exactly `dir`, in insertion order.
    pub fn specs_for_directory(&self, dir: &Path) -> &[FileSpec] {
        self.by_directory
            .get(dir)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The distinct directories, each once, in ascending path order.
    pub fn unique_directories(&self) -> impl Iterator<Item = &Path> {
        self.by_directory.keys().map(PathBuf::as_path)
    }

    /// Total number of inserted specs (not unique directories).
    pub fn count(&self) -> usize {
        self.count
    }

    /// All specs, grouped by directory.
    pub fn iter(&self) -> impl Iterator<Item = &FileSpec> {
        self.by_directory.values().flatten()
    }
}
