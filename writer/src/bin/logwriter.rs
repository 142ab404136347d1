//! Write text into a file, recording the action in the system log.
//!
//! Argument order follows the historical utility: the text comes first,
//! the destination file second. Errors are reported both on standard
//! error and as `LOG_ERR` records; a successful write leaves a
//! `LOG_DEBUG` record naming the text and the file.

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use writer::fs::{write_file, Newline};
use writer::syslog::Syslog;

#[derive(Parser)]
#[command(name = "logwriter")]
#[command(about = "Write text into a file, logging the action via syslog", long_about = None)]
#[command(version)]
struct Cli {
    /// Text to write
    text: String,

    /// Destination file (created if absent, truncated if present)
    file: PathBuf,
}

fn main() {
    process::exit(run());
}

/// All exits funnel through the returned code so the syslog handle is
/// dropped, and `closelog` runs, on every path.
fn run() -> i32 {
    let log = Syslog::open();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp || e.kind() == ErrorKind::DisplayVersion => {
            drop(log);
            e.exit()
        }
        Err(_) => {
            log.error("Incorrect number of arguments");
            eprintln!("Usage: logwriter <text> <file>");
            return 1;
        }
    };

    match write_file(&cli.file, &cli.text, Newline::None) {
        Ok(()) => {
            log.debug(&format!("Writing {} to {}", cli.text, cli.file.display()));
            0
        }
        Err(err) => {
            log.error(&format!("{err:#}"));
            eprintln!("logwriter: {err:#}");
            1
        }
    }
}
