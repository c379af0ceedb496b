//! Indentation style classification (`indentclassifier`).
//!
//! Every line is sorted into one of the [`IndentType`] buckets and the
//! per-file counts decide the file's overall style. Java files also
//! recognize JavaDoc continuation lines (` * ...`), which are allowed to
//! carry a single space after tab indentation.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;

use filekit_core::FileEnumerator;
use regex::Regex;

use crate::error::{IoResultExt, ToolResult};
use crate::fsutil::display_path;

static SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ +([^ \t].*)?$").unwrap());
static TAB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\t+([^ \t].*)?$").unwrap());
static JAVADOC_TAB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\t+ \*.*$").unwrap());
static JAVADOC_LEFT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ \*.*$").unwrap());
static INDETERMINATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([^ \t].*)?$").unwrap());

/// Indentation style of a line or a whole file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IndentType {
    /// Indents consist entirely of spaces.
    Space,
    /// Indents consist entirely of tabs.
    Tab,
    /// Tabs, or tabs followed by one space and an asterisk (tab-indented JavaDoc).
    JavadocTab,
    /// Exactly one space and an asterisk (unindented JavaDoc). Lines only.
    JavadocLeft,
    /// Tabs and spaces mixed within a line or across lines.
    Mixed,
    /// No whitespace indent at all.
    Indeterminate,
}

impl IndentType {
    /// One-letter code printed before each file.
    pub fn indicator(self) -> char {
        match self {
            IndentType::Space => 'S',
            IndentType::Tab => 'T',
            IndentType::JavadocTab | IndentType::JavadocLeft => 'J',
            IndentType::Mixed => 'M',
            IndentType::Indeterminate => 'I',
        }
    }
}

/// Number of lines of each indent type in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTypeCounts(BTreeMap<IndentType, usize>);

impl LineTypeCounts {
    /// Count for `kind`, zero if never seen.
    pub fn get(&self, kind: IndentType) -> usize {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    fn bump(&mut self, kind: IndentType) {
        *self.0.entry(kind).or_insert(0) += 1;
    }
}

/// Classify a single line (without its line terminator).
pub fn classify_line(line: &str, is_java: bool) -> IndentType {
    if INDETERMINATE.is_match(line) {
        IndentType::Indeterminate
    } else if is_java && JAVADOC_LEFT.is_match(line) {
        IndentType::JavadocLeft
    } else if SPACE.is_match(line) {
        IndentType::Space
    } else if TAB.is_match(line) {
        IndentType::Tab
    } else if is_java && JAVADOC_TAB.is_match(line) {
        IndentType::JavadocTab
    } else {
        IndentType::Mixed
    }
}

/// Count the indent types of every line in `content`.
///
/// Lines end at `\n`; a `\r` before it is dropped. Invalid UTF-8 is
/// replaced rather than rejected, since only leading whitespace matters.
pub fn scan(content: &[u8], is_java: bool) -> LineTypeCounts {
    let mut counts = LineTypeCounts::default();
    for raw in content.split(|&b| b == b'\n') {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = String::from_utf8_lossy(raw);
        counts.bump(classify_line(&line, is_java));
    }
    counts
}

/// Decide a file's indent type from its line counts.
pub fn classify_file(counts: &LineTypeCounts) -> IndentType {
    use IndentType::*;

    let space = counts.get(Space);
    let tab = counts.get(Tab);
    let jd_tab = counts.get(JavadocTab);
    let jd_left = counts.get(JavadocLeft);
    let mixed = counts.get(Mixed);

    if space > 0 && tab + jd_tab + mixed == 0 {
        Space
    } else if tab > 0 && space + jd_tab + jd_left + mixed == 0 {
        Tab
    } else if (tab + jd_tab > 0 && space + mixed == 0)
        || (jd_left > 0 && space + jd_tab + mixed == 0)
    {
        JavadocTab
    } else if space + tab + jd_tab + jd_left + mixed == 0 {
        Indeterminate
    } else {
        Mixed
    }
}

fn is_java_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("java"))
        .unwrap_or(false)
}

/// Print the indent type of one file.
pub fn report_file(path: &Path, out: &mut dyn Write) -> ToolResult<()> {
    let content = fs::read(path).with_path(path)?;
    let counts = scan(&content, is_java_file(path));
    let file_type = classify_file(&counts);

    writeln!(out, "{} {}", file_type.indicator(), display_path(path))?;
    if file_type == IndentType::Mixed {
        writeln!(
            out,
            "     (Mixed:  {} space, {} tab, {} JavaDoc tab, {} mixed, {} indeterminate)",
            counts.get(IndentType::Space),
            counts.get(IndentType::Tab),
            counts.get(IndentType::JavadocTab) + counts.get(IndentType::JavadocLeft),
            counts.get(IndentType::Mixed),
            counts.get(IndentType::Indeterminate),
        )?;
    }
    Ok(())
}

/// Classify every enumerated file.
pub fn run(files: &FileEnumerator, out: &mut dyn Write) -> ToolResult<()> {
    files.enumerate(|path| report_file(path, out))
}
