//! Write a line of text into a file.
//!
//! Strict variant: exactly two arguments are accepted. The text is written
//! with a trailing newline.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use writer::fs::{write_file, Newline};

#[derive(Parser)]
#[command(name = "writer")]
#[command(about = "Write a line of text into a file", long_about = None)]
#[command(version)]
struct Cli {
    /// Destination file (created if absent, truncated if present)
    file: PathBuf,

    /// Text to write
    text: String,
}

fn main() -> Result<()> {
    let cli = parse_args();
    write_file(&cli.file, &cli.text, Newline::Trailing)?;
    Ok(())
}

/// Parse arguments, keeping the traditional contract: a usage line on
/// standard error and exit code 1 on any argument-count mistake.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp || e.kind() == ErrorKind::DisplayVersion => {
            e.exit()
        }
        Err(_) => {
            eprintln!("Usage: writer <file> <text>");
            process::exit(1);
        }
    }
}
