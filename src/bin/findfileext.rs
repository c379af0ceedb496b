//! `findfileext`: list the file extensions found in directories.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use filekit::cli::{finish, init_tracing, LogArgs};
use filekit::error::ToolResult;
use filekit::file_ext::{self, Format};

/// List the distinct file extensions in each directory.
#[derive(Parser, Debug)]
#[command(name = "findfileext", version)]
struct Cli {
    /// Show how many files have each extension.
    #[arg(short, long)]
    count: bool,

    /// Search sub-directories recursively.
    #[arg(short, long)]
    recursive: bool,

    /// Print extensions as wildcards, e.g. "*.txt".
    #[arg(short, long)]
    wildcards: bool,

    /// Directories to search.
    #[arg(value_name = "DIR")]
    dirs: Vec<PathBuf>,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log.log_level);
    finish("findfileext", run(cli))
}

fn run(cli: Cli) -> ToolResult<()> {
    let format = Format {
        counts: cli.count,
        wildcards: cli.wildcards,
    };
    let files = file_ext::enumerator_for(cli.dirs, cli.recursive)?;
    let mut out = io::stdout().lock();
    file_ext::run(&files, format, &mut out)?;
    out.flush()?;
    Ok(())
}
