//! Shallow and recursive directory walking.

use std::fs;
use std::path::Path;

use regex::Regex;
use walkdir::{DirEntry, WalkDir};

use crate::error::{AccessCause, EnumerateError};

/// How far below each registered directory to look.
///
/// Chosen once per enumeration and applied to every directory visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Direct children only.
    #[default]
    Shallow,
    /// Direct children and all nested descendants.
    Recursive,
}

impl Traversal {
    /// Select the traversal for a recursive flag.
    pub fn from_recursive(recursive: bool) -> Self {
        if recursive {
            Traversal::Recursive
        } else {
            Traversal::Shallow
        }
    }

    fn walker(self, dir: &Path) -> WalkDir {
        // symlinked directories are never descended into
        let walker = WalkDir::new(dir).min_depth(1).follow_links(false);
        match self {
            Traversal::Shallow => walker.max_depth(1),
            Traversal::Recursive => walker,
        }
    }
}

/// Walk `dir`, calling `visit` for every regular file whose name fully
/// matches `pattern`.
///
/// Symlinks are resolved to decide whether an entry is a regular file, but
/// the path handed to `visit` is the unresolved one. Broken links are
/// skipped. Entry order is whatever the OS listing yields.
///
/// A missing or unreadable directory fails with
/// [`EnumerateError::DirectoryAccess`]. An error returned by `visit` stops
/// the walk and is returned unchanged.
pub fn walk<F, E>(dir: &Path, pattern: &Regex, traversal: Traversal, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&Path) -> Result<(), E>,
    E: From<EnumerateError>,
{
    let metadata = fs::metadata(dir).map_err(|e| EnumerateError::directory_access(dir, e))?;
    if !metadata.is_dir() {
        return Err(EnumerateError::directory_access(dir, AccessCause::NotADirectory).into());
    }

    tracing::debug!("walking {} ({:?})", dir.display(), traversal);

    for entry in traversal.walker(dir) {
        let entry = entry.map_err(|e| {
            let failed = e.path().unwrap_or(dir).to_path_buf();
            EnumerateError::directory_access(failed, e)
        })?;

        if !is_regular_file(&entry) {
            tracing::trace!("skipping non-file {}", entry.path().display());
            continue;
        }
        if !name_matches(&entry, pattern) {
            continue;
        }

        visit(entry.path())?;
    }

    Ok(())
}

/// Returns true if the entry, after following symlinks, is a regular file.
fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false)
    } else {
        entry.file_type().is_file()
    }
}

/// Full-string match of the entry's base name.
fn name_matches(entry: &DirEntry, pattern: &Regex) -> bool {
    pattern.is_match(&entry.file_name().to_string_lossy())
}
