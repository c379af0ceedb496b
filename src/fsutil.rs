//! File helpers shared by the tools that rewrite files.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{IoResultExt, ToolResult};

/// Path as shown to the user, without a leading `./` or `.\`.
pub fn display_path(path: &Path) -> String {
    let shown = path.display().to_string();
    match shown.strip_prefix("./").or_else(|| shown.strip_prefix(".\\")) {
        Some(rest) => rest.to_string(),
        None => shown,
    }
}

/// Replace a file's contents atomically.
///
/// The new contents go to a temp file in the same directory, which then
/// takes over the original's permissions and is renamed over it. On failure
/// the original is untouched and the temp file is removed.
pub fn replace_contents(path: &Path, contents: &[u8]) -> ToolResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).with_path(dir)?;
    temp.write_all(contents).with_path(temp.path())?;
    temp.as_file().sync_all().with_path(temp.path())?;

    let permissions = fs::metadata(path).with_path(path)?.permissions();
    fs::set_permissions(temp.path(), permissions).with_path(temp.path())?;

    temp.persist(path).map_err(|e| e.error).with_path(path)?;
    tracing::info!("rewrote {}", path.display());
    Ok(())
}
