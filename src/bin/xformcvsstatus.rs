//! `xformcvsstatus`: condense `cvs status` output read from stdin.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use filekit::cli::{finish, init_tracing, LogArgs};
use filekit::cvs_status::{self, Suppress};
use filekit::error::ToolResult;

/// Summarize `cvs status` output as one "<status> <path>" line per file.
#[derive(Parser, Debug)]
#[command(name = "xformcvsstatus", version)]
struct Cli {
    /// Leave out new (unknown) files.
    #[arg(short = 'n', long)]
    no_new: bool,

    /// Leave out up-to-date files.
    #[arg(short = 'u', long)]
    no_up_to_date: bool,

    /// Leave out locally modified, added, and removed files.
    #[arg(short = 'l', long)]
    no_local: bool,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log.log_level);
    finish("xformcvsstatus", run(cli))
}

fn run(cli: Cli) -> ToolResult<()> {
    let suppress = Suppress {
        new: cli.no_new,
        up_to_date: cli.no_up_to_date,
        local: cli.no_local,
    };
    let mut out = io::stdout().lock();
    cvs_status::run(io::stdin().lock(), suppress, &mut out)?;
    out.flush()?;
    Ok(())
}
