//! `stripws`: report or remove trailing whitespace.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use filekit::cli::{finish, init_tracing, FileArgs, LogArgs};
use filekit::error::ToolResult;
use filekit::strip_ws::{self, Mode};

/// Report trailing spaces and tabs, or strip them with -s.
#[derive(Parser, Debug)]
#[command(name = "stripws", version)]
struct Cli {
    /// Strip the whitespace instead of reporting it.
    #[arg(short, long)]
    strip: bool,

    #[command(flatten)]
    files: FileArgs,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log.log_level);
    finish("stripws", run(cli))
}

fn run(cli: Cli) -> ToolResult<()> {
    let mode = if cli.strip { Mode::Strip } else { Mode::Query };
    let files = cli.files.into_enumerator()?;
    let mut out = io::stdout().lock();
    strip_ws::run(&files, mode, &mut out)?;
    out.flush()?;
    Ok(())
}
