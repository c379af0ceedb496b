//! `isplainascii`: find bytes outside the 7-bit ASCII range.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use filekit::ascii;
use filekit::cli::{finish, init_tracing, FileArgs, LogArgs};
use filekit::error::ToolResult;

/// Report every run of non-ASCII bytes with its line and column.
#[derive(Parser, Debug)]
#[command(name = "isplainascii", version)]
struct Cli {
    #[command(flatten)]
    files: FileArgs,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log.log_level);
    finish("isplainascii", run(cli))
}

fn run(cli: Cli) -> ToolResult<()> {
    let files = cli.files.into_enumerator()?;
    let mut out = io::stdout().lock();
    ascii::run(&files, &mut out)?;
    out.flush()?;
    Ok(())
}
