//! JSON pretty-printing and minifying (`jsonpp`).

use std::fs;
use std::path::{Path, PathBuf};

use filekit_core::FileEnumerator;
use serde_json::Value;

use crate::error::{IoResultExt, ToolError, ToolResult};
use crate::fsutil::replace_contents;

/// Output style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// Tab-indented, one member per line.
    #[default]
    Pretty,
    /// No insignificant whitespace.
    Minified,
}

impl Style {
    fn suffix(self) -> &'static str {
        match self {
            Style::Pretty => "-pretty",
            Style::Minified => "-minified",
        }
    }
}

/// Options for one `jsonpp` run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub style: Style,
    pub in_place: bool,
}

/// Parse JSON text, keeping object key order.
pub fn parse(path: &Path, text: &[u8]) -> ToolResult<Value> {
    serde_json::from_slice(text).map_err(|err| {
        ToolError::syntax(
            path,
            format!("Parse error near line {}: {}", err.line(), err),
        )
    })
}

/// Render a value in the given style.
pub fn render(value: &Value, style: Style) -> String {
    match style {
        Style::Minified => value.to_string(),
        Style::Pretty => {
            let mut out = String::new();
            write_pretty(&mut out, value, 0);
            out.push('\n');
            out
        }
    }
}

fn indent(out: &mut String, level: usize) {
    out.extend(std::iter::repeat_n('\t', level));
}

fn write_pretty(out: &mut String, value: &Value, level: usize) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            out.push_str("{\n");
            for (i, (key, member)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                indent(out, level + 1);
                // Keys are plain strings, so Display is their escaped form.
                out.push_str(&Value::String(key.clone()).to_string());
                out.push_str(" : ");
                write_pretty(out, member, level + 1);
            }
            out.push('\n');
            indent(out, level);
            out.push('}');
        }
        Value::Array(items) if !items.is_empty() => {
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                indent(out, level + 1);
                write_pretty(out, item, level + 1);
            }
            out.push('\n');
            indent(out, level);
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// Where the output for `path` is written when not editing in place.
///
/// `dir/data.json` becomes `dir/data-pretty.json` or `dir/data-minified.json`.
pub fn output_path(path: &Path, style: Style) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    path.with_file_name(format!("{stem}{}{ext}", style.suffix()))
}

/// Reformat one file.
pub fn process_file(path: &Path, options: Options) -> ToolResult<()> {
    let text = fs::read(path).with_path(path)?;
    let value = parse(path, &text)?;
    let rendered = render(&value, options.style);

    if options.in_place {
        replace_contents(path, rendered.as_bytes())
    } else {
        let target = output_path(path, options.style);
        fs::write(&target, rendered).with_path(&target)?;
        tracing::info!("wrote {}", target.display());
        Ok(())
    }
}

/// Reformat every enumerated file.
pub fn run(files: &FileEnumerator, options: Options) -> ToolResult<()> {
    files.enumerate(|path| process_file(path, options))
}
