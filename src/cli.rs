//! Command-line plumbing shared by every filekit binary.
//!
//! Each binary declares its own clap parser and flattens in the pieces
//! defined here: the global `--log-level` flag and, for file-based tools,
//! the `-r` flag plus positional wildcard specs.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, ValueEnum};
use filekit_core::FileEnumerator;

use crate::error::{ToolError, ToolResult};

// ============================================================================
// Logging
// ============================================================================

/// Log level for tracing output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Convert to the corresponding tracing level.
    pub fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Global logging arguments.
#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    /// Log level for diagnostics written to stderr (RUST_LOG overrides).
    #[arg(long, global = true, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize the tracing subscriber. Logs go to stderr.
pub fn init_tracing(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

// ============================================================================
// File Specs
// ============================================================================

/// Wildcard file arguments accepted by the file-based tools.
#[derive(Args, Debug, Clone, Default)]
pub struct FileArgs {
    /// Search for files in sub-directories recursively.
    #[arg(short, long)]
    pub recursive: bool,

    /// Files to process; `*` and `?` wildcards are allowed in the file name.
    #[arg(value_name = "FILE")]
    pub specs: Vec<PathBuf>,
}

impl FileArgs {
    /// Build an enumerator from the arguments.
    ///
    /// Fails with `InvalidArguments` ("No files specified") when no spec was
    /// given, before anything is enumerated.
    pub fn into_enumerator(self) -> ToolResult<FileEnumerator> {
        build_enumerator(self.specs, self.recursive, "No files specified")
    }
}

/// Insert every spec into a fresh enumerator, rejecting an empty list.
pub fn build_enumerator(
    specs: impl IntoIterator<Item = PathBuf>,
    recursive: bool,
    none_given: &str,
) -> ToolResult<FileEnumerator> {
    let mut files = FileEnumerator::new();
    files.set_recursive(recursive);
    for spec in specs {
        files.insert(spec)?;
    }
    if files.num_file_specs() == 0 {
        return Err(ToolError::invalid_args(none_given));
    }
    Ok(files)
}

// ============================================================================
// Process Exit
// ============================================================================

/// Run a tool body and turn its result into a process exit code.
///
/// Errors are reported on stderr as `<tool>: error: <message>`.
pub fn finish(tool: &str, result: ToolResult<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("{} failed: {:?}", tool, err);
            eprintln!("{}: error: {}", tool, err);
            ExitCode::from(err.error_code().code())
        }
    }
}
