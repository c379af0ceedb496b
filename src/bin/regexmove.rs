//! `regexmove`: rename files with a regular expression.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use filekit::cli::{finish, init_tracing, LogArgs};
use filekit::error::ToolResult;
use filekit::regex_move::{Options, Renamer, Targets};

/// Rename entries whose whole name matches <REGEX> to <REPLACEMENT>.
///
/// Replacements refer to capture groups as $1 or ${name}.
#[derive(Parser, Debug)]
#[command(name = "regexmove", version)]
struct Cli {
    /// Match case-insensitively.
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Rename directories as well as files.
    #[arg(short = 'd', long)]
    dirs: bool,

    /// Rename only directories.
    #[arg(long)]
    dirs_only: bool,

    /// Search sub-directories of <ROOTDIR> too.
    #[arg(short, long)]
    recursive: bool,

    /// Print every rename.
    #[arg(short, long)]
    verbose: bool,

    /// Overwrite existing entries that have the new name.
    #[arg(short = 'y', long)]
    overwrite: bool,

    /// Directory whose entries are renamed.
    #[arg(value_name = "ROOTDIR")]
    root: PathBuf,

    /// Pattern selecting the names to change.
    #[arg(value_name = "REGEX")]
    pattern: String,

    /// Substitution giving the new names.
    #[arg(value_name = "REPLACEMENT")]
    replacement: String,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log.log_level);
    finish("regexmove", run(cli))
}

fn run(cli: Cli) -> ToolResult<()> {
    let options = Options {
        targets: Targets::from_flags(cli.dirs, cli.dirs_only),
        recursive: cli.recursive,
        verbose: cli.verbose,
        overwrite: cli.overwrite,
    };
    let renamer = Renamer::new(
        cli.root,
        &cli.pattern,
        cli.replacement,
        cli.ignore_case,
        options,
    )?;
    let mut out = io::stdout().lock();
    renamer.run(&mut out)?;
    out.flush()?;
    Ok(())
}
