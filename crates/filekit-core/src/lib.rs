//! Core infrastructure for filekit.
//!
//! This crate provides the pieces shared by every filekit tool:
//! - Wildcard file specifications and their grouping by directory
//! - Glob-to-regex translation and per-directory pattern combination
//! - Shallow and recursive directory walking
//! - Error types for enumeration failures

pub mod enumerator;
pub mod error;

pub use enumerator::{FileEnumerator, FileSpec, Traversal};
pub use error::{EnumerateError, EnumerateResult};
