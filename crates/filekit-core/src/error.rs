//! Error types for file enumeration.
//!
//! The enumerator never catches or suppresses these. They propagate to the
//! caller, which decides how to report them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Cause of a directory access failure.
#[derive(Debug, Error)]
pub enum AccessCause {
    /// Failure reported while iterating directory entries.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    /// Failure reported while inspecting the directory itself.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The path exists but does not name a directory.
    #[error("not a directory")]
    NotADirectory,
}

/// Error type for enumeration operations.
#[derive(Debug, Error)]
pub enum EnumerateError {
    /// A spec has no file-name segment (e.g. a bare directory path).
    #[error("the path \"{spec}\" does not contain a file name")]
    InvalidSpec { spec: String },

    /// A directory selected for walking could not be opened or read.
    #[error("unable to read directory {}: {source}", dir.display())]
    DirectoryAccess {
        dir: PathBuf,
        #[source]
        source: AccessCause,
    },

    /// A combined pattern failed to compile.
    #[error("invalid file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for enumeration operations.
pub type EnumerateResult<T> = Result<T, EnumerateError>;

impl EnumerateError {
    /// Create an invalid spec error.
    pub fn invalid_spec(spec: impl Into<String>) -> Self {
        EnumerateError::InvalidSpec { spec: spec.into() }
    }

    /// Create a directory access error.
    pub fn directory_access(dir: impl Into<PathBuf>, source: impl Into<AccessCause>) -> Self {
        EnumerateError::DirectoryAccess {
            dir: dir.into(),
            source: source.into(),
        }
    }
}
