//! Error types and exit codes for the filekit tools.
//!
//! This module provides a unified error type (`ToolError`) that bridges
//! enumeration errors from `filekit-core` and the I/O and parse failures of
//! the individual tools into one type with a stable exit code.
//!
//! ## Exit Codes
//!
//! - `0`: Success
//! - `2`: Invalid arguments (bad command line, spec without a file name)
//! - `3`: Access errors (missing directory, unreadable or unwritable file)
//! - `4`: Syntax errors (malformed input file)
//! - `10`: Internal errors (bugs, unexpected state)

use std::fmt;
use std::io;
use std::path::Path;

use filekit_core::EnumerateError;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Process exit codes reported by every tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitErrorCode {
    /// Invalid arguments from the caller.
    InvalidArguments = 2,
    /// A file or directory could not be read or written.
    AccessError = 3,
    /// An input file is malformed.
    SyntaxError = 4,
    /// Internal errors (bugs, unexpected state).
    InternalError = 10,
}

impl ExitErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for ExitErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for all filekit tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments from the caller.
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// A file spec has no file-name component.
    #[error("invalid file spec: the path \"{spec}\" does not contain a file name")]
    InvalidSpec { spec: String },

    /// A directory could not be walked.
    #[error("unable to read directory {dir}: {message}")]
    DirectoryAccess { dir: String, message: String },

    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Writing tool output (normally stdout) failed.
    #[error("unable to write output: {0}")]
    Output(#[from] io::Error),

    /// An input file could not be parsed.
    #[error("{path}: {message}")]
    Syntax { path: String, message: String },

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    Internal { message: String },
}

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

// ============================================================================
// Error Code Mapping
// ============================================================================

impl From<&ToolError> for ExitErrorCode {
    fn from(err: &ToolError) -> Self {
        match err {
            ToolError::InvalidArguments { .. } => ExitErrorCode::InvalidArguments,
            ToolError::InvalidSpec { .. } => ExitErrorCode::InvalidArguments,
            ToolError::DirectoryAccess { .. } => ExitErrorCode::AccessError,
            ToolError::Io { .. } => ExitErrorCode::AccessError,
            ToolError::Output(_) => ExitErrorCode::AccessError,
            ToolError::Syntax { .. } => ExitErrorCode::SyntaxError,
            ToolError::Internal { .. } => ExitErrorCode::InternalError,
        }
    }
}

// ============================================================================
// Bridge: EnumerateError -> ToolError
// ============================================================================

impl From<EnumerateError> for ToolError {
    fn from(err: EnumerateError) -> Self {
        match err {
            EnumerateError::InvalidSpec { spec } => ToolError::InvalidSpec { spec },
            EnumerateError::DirectoryAccess { dir, source } => ToolError::DirectoryAccess {
                dir: dir.display().to_string(),
                message: source.to_string(),
            },
            EnumerateError::Pattern { pattern, source } => ToolError::Internal {
                message: format!("file pattern '{}' failed to compile: {}", pattern, source),
            },
        }
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl ToolError {
    /// Create an invalid arguments error.
    pub fn invalid_args(message: impl Into<String>) -> Self {
        ToolError::InvalidArguments {
            message: message.into(),
        }
    }

    /// Create an I/O error for a path.
    pub fn io(path: &Path, source: io::Error) -> Self {
        ToolError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create a syntax error for a path.
    pub fn syntax(path: &Path, message: impl Into<String>) -> Self {
        ToolError::Syntax {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn error_code(&self) -> ExitErrorCode {
        ExitErrorCode::from(self)
    }
}

/// Attach a path to `io::Error`s.
pub trait IoResultExt<T> {
    /// Convert an `io::Result` into a `ToolResult` naming `path`.
    fn with_path(self, path: &Path) -> ToolResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path(self, path: &Path) -> ToolResult<T> {
        self.map_err(|e| ToolError::io(path, e))
    }
}

// ============================================================================
// Tests
// ============================================================================
