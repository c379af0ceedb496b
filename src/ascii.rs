//! Detection of bytes outside 7-bit ASCII (`isplainascii`).

use std::fs;
use std::io::Write;
use std::path::Path;

use filekit_core::FileEnumerator;

use crate::error::{IoResultExt, ToolResult};
use crate::fsutil::display_path;

/// A run of consecutive non-ASCII bytes on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonAsciiRun {
    /// 1-based line number.
    pub line: usize,
    /// 1-based byte column of the first byte in the run.
    pub column: usize,
    /// The offending bytes.
    pub bytes: Vec<u8>,
}

impl NonAsciiRun {
    /// The bytes as `\xhh` escapes.
    pub fn hex_escaped(&self) -> String {
        self.bytes.iter().map(|b| format!("\\x{:02x}", b)).collect()
    }
}

/// Find every run of non-ASCII bytes.
///
/// `\n`, `\r\n` and a lone `\r` each end a line. Columns count bytes, so
/// they are approximate for multi-byte characters.
pub fn scan(content: &[u8]) -> Vec<NonAsciiRun> {
    let mut runs = Vec::new();
    let mut current: Option<NonAsciiRun> = None;
    let mut line = 1;
    let mut column = 0;
    let mut after_cr = false;

    for &byte in content {
        match byte {
            b'\r' => {
                runs.extend(current.take());
                if after_cr {
                    line += 1;
                }
                column = 0;
                after_cr = true;
            }
            b'\n' => {
                runs.extend(current.take());
                line += 1;
                column = 0;
                after_cr = false;
            }
            _ => {
                if after_cr {
                    line += 1;
                    after_cr = false;
                }
                column += 1;
                if byte.is_ascii() {
                    runs.extend(current.take());
                } else {
                    current
                        .get_or_insert_with(|| NonAsciiRun {
                            line,
                            column,
                            bytes: Vec::new(),
                        })
                        .bytes
                        .push(byte);
                }
            }
        }
    }
    runs.extend(current);
    runs
}

/// Report the non-ASCII runs of one file.
pub fn report_file(path: &Path, out: &mut dyn Write) -> ToolResult<()> {
    let content = fs::read(path).with_path(path)?;
    let shown = display_path(path);
    for run in scan(&content) {
        writeln!(
            out,
            "{}, line {}, approx. column {}:  \"{}\" (\"{}\")",
            shown,
            run.line,
            run.column,
            String::from_utf8_lossy(&run.bytes),
            run.hex_escaped(),
        )?;
    }
    Ok(())
}

/// Scan every enumerated file.
pub fn run(files: &FileEnumerator, out: &mut dyn Write) -> ToolResult<()> {
    files.enumerate(|path| report_file(path, out))
}
