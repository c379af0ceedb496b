//! filekit: small command-line utilities for batches of files.
//!
//! Every file-based tool takes wildcard file specs, resolves them with
//! [`filekit_core::FileEnumerator`], and applies one operation per file.

// Shared infrastructure
pub mod cli;
pub mod error;
pub mod fsutil;

// File-based tools
pub mod ascii;
pub mod eol;
pub mod file_ext;
pub mod indent;
pub mod json_pp;
pub mod regex_move;
pub mod strip_ws;

// Tools that do not enumerate files
pub mod cvs_status;
pub mod random;
