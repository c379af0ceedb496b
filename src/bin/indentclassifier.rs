//! `indentclassifier`: report how each file indents its lines.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use filekit::cli::{finish, init_tracing, FileArgs, LogArgs};
use filekit::error::ToolResult;
use filekit::indent;

/// Classify the indentation of each file.
///
/// Prints one letter per file: S (spaces), T (tabs), J (tabs with JavaDoc
/// continuation lines), M (mixed), or I (indeterminate).
#[derive(Parser, Debug)]
#[command(name = "indentclassifier", version)]
struct Cli {
    #[command(flatten)]
    files: FileArgs,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log.log_level);
    finish("indentclassifier", run(cli))
}

fn run(cli: Cli) -> ToolResult<()> {
    let files = cli.files.into_enumerator()?;
    let mut out = io::stdout().lock();
    indent::run(&files, &mut out)?;
    out.flush()?;
    Ok(())
}
