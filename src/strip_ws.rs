//! Trailing whitespace removal (`stripws`).
//!
//! Spaces and tabs are stripped before every `\r` or `\n`, and at the end
//! of a file that lacks a final line ending.

use std::fs;
use std::io::Write;
use std::path::Path;

use filekit_core::FileEnumerator;

use crate::error::{IoResultExt, ToolResult};
use crate::fsutil::{display_path, replace_contents};

/// Trailing whitespace found (or removed) in one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripCounts {
    pub lines: usize,
    pub spaces: usize,
    pub tabs: usize,
}

impl StripCounts {
    fn record(&mut self, run: &[u8]) {
        if run.is_empty() {
            return;
        }
        self.lines += 1;
        self.spaces += run.iter().filter(|&&b| b == b' ').count();
        self.tabs += run.iter().filter(|&&b| b == b'\t').count();
    }
}

/// Strip trailing whitespace from `content`.
///
/// Returns the counts and the stripped bytes. The output equals the input
/// whenever `counts.lines` is zero.
pub fn strip(content: &[u8]) -> (StripCounts, Vec<u8>) {
    let mut counts = StripCounts::default();
    let mut stripped = Vec::with_capacity(content.len());
    let mut run_start = None;

    for (i, &byte) in content.iter().enumerate() {
        match byte {
            b' ' | b'\t' => {
                if run_start.is_none() {
                    run_start = Some(i);
                }
            }
            b'\r' | b'\n' => {
                if let Some(start) = run_start.take() {
                    counts.record(&content[start..i]);
                }
                stripped.push(byte);
            }
            _ => {
                if let Some(start) = run_start.take() {
                    stripped.extend_from_slice(&content[start..i]);
                }
                stripped.push(byte);
            }
        }
    }
    if let Some(start) = run_start {
        counts.record(&content[start..]);
    }
    (counts, stripped)
}

/// What `stripws` does with each file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Report what could be stripped.
    Query,
    /// Strip and rewrite the file.
    Strip,
}

/// Query or strip one file. Files without trailing whitespace print nothing.
pub fn process_file(path: &Path, mode: Mode, out: &mut dyn Write) -> ToolResult<()> {
    let content = fs::read(path).with_path(path)?;
    let (counts, stripped) = strip(&content);
    if counts.lines == 0 {
        return Ok(());
    }

    match mode {
        Mode::Query => writeln!(
            out,
            "   {} -- {} lines end in {} spaces and {} tabs",
            display_path(path),
            counts.lines,
            counts.spaces,
            counts.tabs
        )?,
        Mode::Strip => {
            replace_contents(path, &stripped)?;
            writeln!(
                out,
                "   {} -- {} spaces and {} tabs stripped from {} lines",
                display_path(path),
                counts.spaces,
                counts.tabs,
                counts.lines
            )?;
        }
    }
    Ok(())
}

/// Query or strip every enumerated file.
pub fn run(files: &FileEnumerator, mode: Mode, out: &mut dyn Write) -> ToolResult<()> {
    files.enumerate(|path| process_file(path, mode, out))
}
