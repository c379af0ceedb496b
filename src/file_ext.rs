//! File extension census (`findfileext`).

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use filekit_core::FileEnumerator;

use crate::cli::build_enumerator;
use crate::error::{ToolError, ToolResult};
use crate::fsutil::display_path;

const NO_EXTENSION: &str = "<no extension>";

/// How each extension line is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Format {
    /// Append `-- <count>` to each line.
    pub counts: bool,
    /// Print extensions as `*<ext>` wildcards.
    pub wildcards: bool,
}

/// Extension counts gathered from an enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionTally {
    /// Extension (with its leading dot, or empty) to file count.
    pub counts: BTreeMap<String, usize>,
    /// Files without an extension, sorted.
    pub no_extension: Vec<PathBuf>,
}

/// The extension of `path` including its dot, or `""` when it has none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Build an enumerator that covers every file directly inside each directory.
///
/// Each argument must name an existing directory.
pub fn enumerator_for(dirs: Vec<PathBuf>, recursive: bool) -> ToolResult<FileEnumerator> {
    let mut specs = Vec::with_capacity(dirs.len());
    for dir in dirs {
        match fs::metadata(&dir) {
            Err(_) => {
                return Err(ToolError::invalid_args(format!(
                    "{} does not exist",
                    dir.display()
                )));
            }
            Ok(meta) if !meta.is_dir() => {
                return Err(ToolError::invalid_args(format!(
                    "{} is not a directory",
                    dir.display()
                )));
            }
            Ok(_) => specs.push(dir.join("*")),
        }
    }
    build_enumerator(specs, recursive, "No directories specified")
}

/// Count the extensions of every enumerated file.
pub fn tally(files: &FileEnumerator) -> ToolResult<ExtensionTally> {
    let mut tally = ExtensionTally::default();
    files.enumerate(|path| -> ToolResult<()> {
        let ext = extension_of(path);
        if ext.is_empty() {
            tally.no_extension.push(path.to_path_buf());
        }
        *tally.counts.entry(ext).or_default() += 1;
        Ok(())
    })?;
    tally.no_extension.sort();
    Ok(tally)
}

/// Write the report, framed by blank lines.
pub fn report(tally: &ExtensionTally, format: Format, out: &mut dyn Write) -> ToolResult<()> {
    writeln!(out)?;
    for (ext, count) in &tally.counts {
        let no_ext = ext.is_empty();
        if format.wildcards && no_ext {
            continue;
        }
        let shown = if no_ext { NO_EXTENSION } else { ext.as_str() };
        let star = if format.wildcards { "*" } else { "" };

        if format.counts {
            writeln!(out, "{star}{shown} -- {count}")?;
            if no_ext {
                for path in &tally.no_extension {
                    writeln!(out, "   {}", display_path(path))?;
                }
            }
        } else {
            writeln!(out, "{star}{shown}")?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Tally and report.
pub fn run(files: &FileEnumerator, format: Format, out: &mut dyn Write) -> ToolResult<()> {
    let tally = tally(files)?;
    report(&tally, format, out)
}
