//! `random`: print uniformly distributed random integers.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use filekit::cli::{finish, init_tracing, LogArgs};
use filekit::error::ToolResult;

/// Print <COUNT> random integers between <LOWER> and <UPPER>, inclusive.
#[derive(Parser, Debug)]
#[command(name = "random", version, allow_negative_numbers = true)]
struct Cli {
    /// Smallest value that can be produced.
    lower: i64,

    /// Largest value that can be produced.
    upper: i64,

    /// How many numbers to print (default 1).
    count: Option<usize>,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log.log_level);
    finish("random", run(cli))
}

fn run(cli: Cli) -> ToolResult<()> {
    let mut out = io::stdout().lock();
    filekit::random::run(cli.lower, cli.upper, cli.count.unwrap_or(1), &mut out)?;
    out.flush()?;
    Ok(())
}
