//! Wildcard file enumeration.
//!
//! A [`FileEnumerator`] collects wildcard specs such as `src/*.rs` or
//! `docs/chapter?.md`, groups them by directory, and walks each directory
//! once with a single combined matcher:
//!
//! - [`glob`] translates one filename wildcard into a regex fragment
//! - [`registry`] keeps the specs, keyed by directory
//! - [`combiner`] merges a directory's specs into one anchored regex
//! - [`walker`] scans a directory, shallow or recursive, for matching files
//!
//! Directories are visited in ascending path order. Files within one
//! directory arrive in whatever order the OS lists them; callers that need
//! a stable order must sort the results themselves.
//!
//! # Example
//!
//! ```no_run
//! use filekit_core::{EnumerateError, FileEnumerator};
//!
//! let mut files = FileEnumerator::new();
//! files.set_recursive(true);
//! files.insert("src/*.rs")?;
//! files.insert("src/*.toml")?;
//!
//! files.enumerate(|path| {
//!     println!("{}", path.display());
//!     Ok::<(), EnumerateError>(())
//! })?;
//! # Ok::<(), EnumerateError>(())
//! ```

pub mod combiner;
pub mod glob;
pub mod registry;
pub mod walker;

use std::path::Path;

pub use registry::{FileSpec, FileSpecRegistry};
pub use walker::Traversal;

use crate::error::{EnumerateError, EnumerateResult};

/// Collects wildcard specs and feeds every matching file to a visitor.
///
/// Inserts and enumerations may be interleaved; each call to
/// [`enumerate`](Self::enumerate) works from the specs registered so far.
#[derive(Debug, Clone, Default)]
pub struct FileEnumerator {
    traversal: Traversal,
    registry: FileSpecRegistry,
}

impl FileEnumerator {
    /// Create an enumerator with no specs, in shallow mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a wildcard spec.
    ///
    /// Fails with [`EnumerateError::InvalidSpec`] if the spec has no
    /// file-name segment.
    pub fn insert(&mut self, spec: impl AsRef<Path>) -> EnumerateResult<()> {
        let spec = FileSpec::parse(spec)?;
        self.registry.insert(spec);
        Ok(())
    }

    /// Choose recursive or shallow walking for subsequent enumerations.
    pub fn set_recursive(&mut self, recursive: bool) {
        self.traversal = Traversal::from_recursive(recursive);
    }

    /// Returns true if enumerations descend into subdirectories.
    pub fn is_recursive(&self) -> bool {
        self.traversal == Traversal::Recursive
    }

    /// Number of specs inserted so far.
    pub fn num_file_specs(&self) -> usize {
        self.registry.count()
    }

    /// The registered specs, grouped by directory.
    pub fn file_specs(&self) -> impl Iterator<Item = &FileSpec> {
        self.registry.iter()
    }

    /// Call `visit` for every regular file matched by the registered specs.
    ///
    /// Each unique directory is walked once, so a file matched by several
    /// specs is visited once. Enumerating with no specs visits nothing.
    ///
    /// The first error, whether from the enumerator or from `visit`, stops
    /// enumeration and is returned. Visits already made are not undone.
    pub fn enumerate<F, E>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&Path) -> Result<(), E>,
        E: From<EnumerateError>,
    {
        for dir in self.registry.unique_directories() {
            let pattern = combiner::combine(self.registry.specs_for_directory(dir))?;
            walker::walk(dir, &pattern, self.traversal, &mut visit)?;
        }
        Ok(())
    }
}
