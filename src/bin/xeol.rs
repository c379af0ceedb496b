//! `xeol`: query or convert line endings.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use filekit::cli::{finish, init_tracing, FileArgs, LogArgs};
use filekit::eol::{self, Mode, TargetEol};
use filekit::error::{ToolError, ToolResult};

/// Report each file's line-ending convention, or convert it.
///
/// Without a target flag each file is listed as D (DOS), M (Mac), U (Unix),
/// X (mixed), or I (no line endings).
#[derive(Parser, Debug)]
#[command(name = "xeol", version)]
#[command(group(ArgGroup::new("target").args(["dos", "mac", "unix"])))]
struct Cli {
    /// Convert to DOS line endings (CR LF).
    #[arg(short, long)]
    dos: bool,

    /// Convert to classic Mac line endings (CR).
    #[arg(short, long)]
    mac: bool,

    /// Convert to Unix line endings (LF).
    #[arg(short, long)]
    unix: bool,

    /// Also convert files with mixed line endings.
    #[arg(short, long)]
    force: bool,

    #[command(flatten)]
    files: FileArgs,

    #[command(flatten)]
    log: LogArgs,
}

impl Cli {
    fn mode(&self) -> ToolResult<Mode> {
        let target = if self.dos {
            Some(TargetEol::Dos)
        } else if self.mac {
            Some(TargetEol::Macintosh)
        } else if self.unix {
            Some(TargetEol::Unix)
        } else {
            None
        };
        match (target, self.force) {
            (Some(target), force) => Ok(Mode::Translate { target, force }),
            (None, false) => Ok(Mode::Query),
            (None, true) => Err(ToolError::invalid_args(
                "-f requires one of -d, -m, or -u",
            )),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log.log_level);
    finish("xeol", run(cli))
}

fn run(cli: Cli) -> ToolResult<()> {
    let mode = cli.mode()?;
    let files = cli.files.into_enumerator()?;
    let mut out = io::stdout().lock();
    eol::run(&files, mode, &mut out)?;
    out.flush()?;
    Ok(())
}
