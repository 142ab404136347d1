//! File-write plumbing shared by the writer binaries.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Whether the written text gets a trailing newline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Newline {
    /// Append a single `\n` after the text.
    Trailing,
    /// Write the text verbatim.
    None,
}

/// Write `text` into the file at `path`.
///
/// The file is created if absent and truncated if present; whatever was
/// there before is discarded. The handle is flushed and closed before
/// returning, so a successful return means the bytes reached the file.
///
/// # Arguments
/// * `path` - Destination file
/// * `text` - Text to write
/// * `newline` - Whether to append a trailing newline
pub fn write_file(path: &Path, text: &str, newline: Newline) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;

    file.write_all(text.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    if newline == Newline::Trailing {
        file.write_all(b"\n")
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    }

    file.flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_file_with_trailing_newline() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("f.txt");

        write_file(&path, "hello", Newline::Trailing).expect("write should succeed");
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_write_file_verbatim() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("f.txt");

        write_file(&path, "hello", Newline::None).expect("write should succeed");
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_truncates_existing_content() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("f.txt");
        fs::write(&path, "a much longer pre-existing line").unwrap();

        write_file(&path, "short", Newline::None).expect("write should succeed");
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_file_missing_parent_directory_fails() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("no-such-dir").join("f.txt");

        let err = write_file(&path, "hello", Newline::None).unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }
}
