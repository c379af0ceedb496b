//! Line-ending detection and conversion (`xeol`).

use std::fs;
use std::io::Write;
use std::path::Path;

use filekit_core::FileEnumerator;

use crate::error::{IoResultExt, ToolResult};
use crate::fsutil::{display_path, replace_contents};

/// Line-ending convention of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EolType {
    /// No line endings at all.
    Indeterminate,
    /// More than one convention; possibly binary.
    Mixed,
    /// `\r\n`
    Dos,
    /// `\r` (classic Mac OS)
    Macintosh,
    /// `\n`
    Unix,
}

impl EolType {
    /// One-letter code used in reports.
    pub fn indicator(self) -> char {
        match self {
            EolType::Indeterminate => 'I',
            EolType::Mixed => 'X',
            EolType::Dos => 'D',
            EolType::Macintosh => 'M',
            EolType::Unix => 'U',
        }
    }
}

/// A convention files can be converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetEol {
    Dos,
    Macintosh,
    Unix,
}

impl TargetEol {
    fn as_bytes(self) -> &'static [u8] {
        match self {
            TargetEol::Dos => b"\r\n",
            TargetEol::Macintosh => b"\r",
            TargetEol::Unix => b"\n",
        }
    }

    fn eol_type(self) -> EolType {
        match self {
            TargetEol::Dos => EolType::Dos,
            TargetEol::Macintosh => EolType::Macintosh,
            TargetEol::Unix => EolType::Unix,
        }
    }
}

/// Line endings seen in one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EolCounts {
    pub dos: usize,
    pub mac: usize,
    pub unix: usize,
}

impl EolCounts {
    /// Total number of line endings.
    pub fn total(&self) -> usize {
        self.dos + self.mac + self.unix
    }

    /// The file's convention, judged from the counts.
    pub fn eol_type(&self) -> EolType {
        match (self.dos > 0, self.mac > 0, self.unix > 0) {
            (false, false, false) => EolType::Indeterminate,
            (true, false, false) => EolType::Dos,
            (false, true, false) => EolType::Macintosh,
            (false, false, true) => EolType::Unix,
            _ => EolType::Mixed,
        }
    }
}

fn push(out: &mut Option<&mut Vec<u8>>, bytes: &[u8]) {
    if let Some(buf) = out {
        buf.extend_from_slice(bytes);
    }
}

/// Count line endings, optionally writing a copy that uses `eol` instead.
fn scan_inner(content: &[u8], mut out: Option<&mut Vec<u8>>, eol: &[u8]) -> EolCounts {
    let mut counts = EolCounts::default();
    let mut after_cr = false;

    for &byte in content {
        match (after_cr, byte) {
            (true, b'\n') => {
                counts.dos += 1;
                push(&mut out, eol);
                after_cr = false;
            }
            (true, b'\r') => {
                counts.mac += 1;
                push(&mut out, eol);
            }
            (false, b'\r') => after_cr = true,
            (false, b'\n') => {
                counts.unix += 1;
                push(&mut out, eol);
            }
            (was_cr, other) => {
                if was_cr {
                    counts.mac += 1;
                    push(&mut out, eol);
                    after_cr = false;
                }
                push(&mut out, &[other]);
            }
        }
    }
    if after_cr {
        counts.mac += 1;
        push(&mut out, eol);
    }
    counts
}

/// Count the line endings in `content`.
pub fn scan(content: &[u8]) -> EolCounts {
    scan_inner(content, None, b"")
}

/// Rewrite `content` with every line ending replaced by `target`.
pub fn convert(content: &[u8], target: TargetEol) -> (EolCounts, Vec<u8>) {
    let mut converted = Vec::with_capacity(content.len());
    let counts = scan_inner(content, Some(&mut converted), target.as_bytes());
    (counts, converted)
}

/// What `xeol` does with each file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Report each file's convention.
    Query,
    /// Convert files to `target`; mixed files only when `force` is set.
    Translate { target: TargetEol, force: bool },
}

/// Print one file's line-ending convention.
pub fn query_file(path: &Path, out: &mut dyn Write) -> ToolResult<()> {
    let counts = scan(&fs::read(path).with_path(path)?);
    let eol_type = counts.eol_type();
    writeln!(out, "{} {}", eol_type.indicator(), display_path(path))?;
    if eol_type == EolType::Mixed {
        writeln!(
            out,
            "     (Mixed:  {} DOS, {} Mac, {} Unix)",
            counts.dos, counts.mac, counts.unix
        )?;
    }
    Ok(())
}

/// Convert one file's line endings to `target`.
///
/// Files with no line endings, or already using `target`, are left alone.
/// Mixed files are skipped with a note unless `force` is set.
pub fn translate_file(
    path: &Path,
    target: TargetEol,
    force: bool,
    out: &mut dyn Write,
) -> ToolResult<()> {
    let content = fs::read(path).with_path(path)?;
    let (counts, converted) = convert(&content, target);
    let eol_type = counts.eol_type();

    if eol_type == EolType::Indeterminate || eol_type == target.eol_type() {
        return Ok(());
    }
    if eol_type == EolType::Mixed && !force {
        tracing::warn!("skipping {}: mixed line endings", path.display());
        writeln!(
            out,
            "---- {}\n        (Skipped, possibly binary:  {} DOS, {} Mac, {} Unix)",
            display_path(path),
            counts.dos,
            counts.mac,
            counts.unix
        )?;
        return Ok(());
    }

    replace_contents(path, &converted)?;
    writeln!(
        out,
        "{}->{} {}",
        eol_type.indicator(),
        target.eol_type().indicator(),
        display_path(path)
    )?;
    Ok(())
}

/// Query or translate every enumerated file.
pub fn run(files: &FileEnumerator, mode: Mode, out: &mut dyn Write) -> ToolResult<()> {
    files.enumerate(|path| match mode {
        Mode::Query => query_file(path, out),
        Mode::Translate { target, force } => translate_file(path, target, force, out),
    })
}
