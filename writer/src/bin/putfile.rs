//! Write text verbatim into a file.
//!
//! Lenient variant: only complains when fewer than two arguments are
//! given; anything after the text is accepted and ignored. No trailing
//! newline is added.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use writer::fs::{write_file, Newline};

#[derive(Parser)]
#[command(name = "putfile")]
#[command(about = "Write text verbatim into a file", long_about = None)]
#[command(version)]
struct Cli {
    /// Destination file (created if absent, truncated if present)
    file: PathBuf,

    /// Text to write
    text: String,

    /// Extra arguments are tolerated and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<String>,
}

fn main() -> Result<()> {
    let cli = parse_args();
    write_file(&cli.file, &cli.text, Newline::None)?;
    Ok(())
}

fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp || e.kind() == ErrorKind::DisplayVersion => {
            e.exit()
        }
        Err(_) => {
            eprintln!("Usage: putfile <file> <text>");
            process::exit(1);
        }
    }
}
