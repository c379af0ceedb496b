//! `cvs status` summarizer (`xformcvsstatus`).
//!
//! Condenses the verbose output of `cvs status` into one line per file:
//! a two-character status code followed by the path.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{IoResultExt, ToolResult};

static EXAMINING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^cvs (?:server|status): Examining (.*)$").unwrap());

static NEW_FILE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\?) (.*)$").unwrap());

static FILE_STATUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^File: (?:no file )?(.*)[ \t]+Status: (.*)$").unwrap());

const NEW: &str = "? ";
const UP_TO_DATE: &str = "  ";
const ADDED: &str = "A ";
const LOCAL: [&str; 3] = ["M ", ADDED, "D "];

/// Map a `cvs` status phrase to its two-character code.
///
/// Unrecognized phrases pass through trimmed.
pub fn translate_status(raw: &str) -> String {
    let status = raw.trim();
    let code = match status {
        "Locally Added" => ADDED,
        "Locally Modified" => "M ",
        "Locally Removed" => "D ",
        "Up-to-date" => UP_TO_DATE,
        "?" | "Unknown" => NEW,
        "Needs Checkout" | "Needs Patch" => " *",
        "Needs Merge" => "M*",
        "File had conflicts on merge" | "Unresolved Conflict" => "C ",
        other => other,
    };
    code.to_string()
}

/// Which statuses are left out of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Suppress {
    /// Hide `? ` (unknown) files.
    pub new: bool,
    /// Hide up-to-date files.
    pub up_to_date: bool,
    /// Hide locally modified, added, and removed files.
    pub local: bool,
}

impl Suppress {
    fn hides(&self, status: &str) -> bool {
        (self.new && status == NEW)
            || (self.up_to_date && status == UP_TO_DATE)
            || (self.local && LOCAL.contains(&status))
    }
}

/// File statuses collected from `cvs status` output.
#[derive(Debug, Clone)]
pub struct StatusTable {
    current_dir: PathBuf,
    statuses: BTreeMap<PathBuf, String>,
}

impl Default for StatusTable {
    fn default() -> Self {
        StatusTable {
            current_dir: PathBuf::from("."),
            statuses: BTreeMap::new(),
        }
    }
}

impl StatusTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every line of `input`.
    pub fn read_from(&mut self, mut input: impl BufRead) -> ToolResult<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf).with_path(Path::new("<stdin>"))? == 0 {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&buf);
            self.feed_line(line.trim_end_matches(['\n', '\r']));
        }
    }

    /// Consume a single line of output. Lines that are not understood are
    /// ignored.
    pub fn feed_line(&mut self, line: &str) {
        if let Some(caps) = EXAMINING.captures(line) {
            self.current_dir = PathBuf::from(&caps[1]);
        } else if let Some(caps) = NEW_FILE.captures(line) {
            self.record(&caps[2], &caps[1]);
        } else if let Some(caps) = FILE_STATUS.captures(line) {
            self.record(&caps[1], &caps[2]);
        }
    }

    fn record(&mut self, raw_file: &str, raw_status: &str) {
        let path = self.build_path(raw_file);
        let status = translate_status(raw_status);
        match self.statuses.get_mut(&path) {
            None => {
                self.statuses.insert(path, status);
            }
            Some(existing) if existing == NEW && status == ADDED => *existing = status,
            Some(_) => {}
        }
    }

    fn build_path(&self, raw_file: &str) -> PathBuf {
        let file = raw_file.trim();
        let dir = self.current_dir.as_os_str();
        if dir.is_empty() || dir == "." {
            PathBuf::from(file)
        } else {
            self.current_dir.join(file)
        }
    }

    /// Status recorded for `path`, if any.
    pub fn status(&self, path: &Path) -> Option<&str> {
        self.statuses.get(path).map(String::as_str)
    }

    /// Write `<status> <path>` lines in path order.
    pub fn report(&self, suppress: Suppress, out: &mut dyn Write) -> ToolResult<()> {
        for (path, status) in &self.statuses {
            if !suppress.hides(status) {
                writeln!(out, "{} {}", status, path.display())?;
            }
        }
        Ok(())
    }
}

/// Summarize `input` to `out`.
pub fn run(input: impl BufRead, suppress: Suppress, out: &mut dyn Write) -> ToolResult<()> {
    let mut table = StatusTable::new();
    table.read_from(input)?;
    tracing::debug!("collected {} file statuses", table.statuses.len());
    table.report(suppress, out)
}
