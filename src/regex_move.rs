//! Regular-expression renaming (`regexmove`).
//!
//! Entry names under a root directory that fully match a pattern are
//! renamed to the pattern's replacement. Replacements use the `regex`
//! crate's syntax: `$1`, `${name}`, and `$$` for a literal dollar.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use regex::{Regex, RegexBuilder};
use walkdir::WalkDir;

use crate::error::{IoResultExt, ToolError, ToolResult};
use crate::fsutil::display_path;

/// Which kinds of entry are renamed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Targets {
    #[default]
    Files,
    FilesAndDirectories,
    Directories,
}

impl Targets {
    /// Resolve the `-d` and `--dirs-only` flags.
    pub fn from_flags(dirs: bool, dirs_only: bool) -> Self {
        match (dirs, dirs_only) {
            (_, true) => Targets::Directories,
            (true, false) => Targets::FilesAndDirectories,
            (false, false) => Targets::Files,
        }
    }

    fn includes(self, is_dir: bool) -> bool {
        match self {
            Targets::Files => !is_dir,
            Targets::FilesAndDirectories => true,
            Targets::Directories => is_dir,
        }
    }
}

/// Options for one `regexmove` run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub targets: Targets,
    pub recursive: bool,
    pub verbose: bool,
    pub overwrite: bool,
}

/// A validated rename request.
#[derive(Debug, Clone)]
pub struct Renamer {
    root: PathBuf,
    pattern: Regex,
    replacement: String,
    options: Options,
}

/// One planned rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Anchor a user pattern so it must match the whole name.
///
/// The pattern is grouped first, so the anchors bind to every top-level
/// alternative. Anchors the user already wrote stay valid inside the group.
pub fn anchor(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}

impl Renamer {
    /// Validate the root directory and compile the pattern.
    pub fn new(
        root: impl Into<PathBuf>,
        pattern: &str,
        replacement: impl Into<String>,
        case_insensitive: bool,
        options: Options,
    ) -> ToolResult<Self> {
        let root = root.into();
        let Ok(meta) = fs::metadata(&root) else {
            return Err(ToolError::invalid_args(format!(
                "The directory \"{}\" does not exist",
                root.display()
            )));
        };
        if !meta.is_dir() {
            return Err(ToolError::invalid_args(format!(
                "\"{}\" is not a directory",
                root.display()
            )));
        }

        let pattern = RegexBuilder::new(&anchor(pattern))
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|err| {
                ToolError::invalid_args(format!(
                    "\"{pattern}\" is not a valid regular expression ({err})"
                ))
            })?;

        Ok(Renamer {
            root,
            pattern,
            replacement: replacement.into(),
            options,
        })
    }

    /// The new name for `name`, if the pattern matches it.
    pub fn new_name(&self, name: &str) -> Option<String> {
        self.pattern
            .is_match(name)
            .then(|| self.pattern.replace(name, self.replacement.as_str()).into_owned())
    }

    /// Collect every rename, deepest paths first.
    ///
    /// Children are listed before their parent directory, so applying the
    /// list in order never moves a path that is still pending.
    pub fn plan(&self) -> ToolResult<Vec<Rename>> {
        let max_depth = if self.options.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(false)
            .contents_first(true);

        let mut renames = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|err| ToolError::DirectoryAccess {
                dir: err
                    .path()
                    .unwrap_or(&self.root)
                    .display()
                    .to_string(),
                message: err.to_string(),
            })?;

            let Some(is_dir) = entry_kind(&entry) else {
                continue;
            };
            if !self.options.targets.includes(is_dir) {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if let Some(new_name) = self.new_name(&name) {
                renames.push(Rename {
                    from: entry.path().to_path_buf(),
                    to: entry.path().with_file_name(new_name),
                });
            }
        }
        tracing::debug!("planned {} renames under {}", renames.len(), self.root.display());
        Ok(renames)
    }

    /// Plan and apply every rename, reporting to `out`.
    pub fn run(&self, out: &mut dyn Write) -> ToolResult<()> {
        for rename in self.plan()? {
            self.apply(&rename, out)?;
        }
        Ok(())
    }

    fn apply(&self, rename: &Rename, out: &mut dyn Write) -> ToolResult<()> {
        if rename.to == rename.from {
            return Ok(());
        }
        let from = display_path(&rename.from);
        let new_name = rename
            .to
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if rename.to.symlink_metadata().is_err() {
            fs::rename(&rename.from, &rename.to).with_path(&rename.from)?;
            if self.options.verbose {
                writeln!(out, "\"{from}\" --> \"{new_name}\"")?;
            }
        } else if self.options.overwrite {
            fs::rename(&rename.from, &rename.to).with_path(&rename.from)?;
            writeln!(out, "\"{from}\" overwrote \"{new_name}\"")?;
        } else {
            tracing::warn!("not renaming {}: {} exists", from, rename.to.display());
            writeln!(out, "\"{from}\" skipped -- \"{new_name}\" exists")?;
        }
        Ok(())
    }
}

/// `Some(true)` for a directory, `Some(false)` for a regular file, `None`
/// for anything else. Symlinks are judged by their target.
fn entry_kind(entry: &walkdir::DirEntry) -> Option<bool> {
    let file_type = if entry.path_is_symlink() {
        fs::metadata(entry.path()).ok()?.file_type()
    } else {
        entry.file_type()
    };
    if file_type.is_dir() {
        Some(true)
    } else if file_type.is_file() {
        Some(false)
    } else {
        None
    }
}
