//! `jsonpp`: pretty-print or minify JSON files.

use std::process::ExitCode;

use clap::Parser;
use filekit::cli::{finish, init_tracing, FileArgs, LogArgs};
use filekit::error::ToolResult;
use filekit::json_pp::{self, Options, Style};

/// Pretty-print each JSON file with tab indentation.
///
/// Output goes to a sibling file named with "-pretty" or "-minified"
/// appended to the stem, unless --in-place is given.
#[derive(Parser, Debug)]
#[command(name = "jsonpp", version)]
struct Cli {
    /// Overwrite each input file instead of writing a sibling.
    #[arg(long)]
    in_place: bool,

    /// Minify instead of pretty-printing.
    #[arg(short, long)]
    minify: bool,

    #[command(flatten)]
    files: FileArgs,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log.log_level);
    finish("jsonpp", run(cli))
}

fn run(cli: Cli) -> ToolResult<()> {
    let options = Options {
        style: if cli.minify {
            Style::Minified
        } else {
            Style::Pretty
        },
        in_place: cli.in_place,
    };
    let files = cli.files.into_enumerator()?;
    json_pp::run(&files, options)
}
