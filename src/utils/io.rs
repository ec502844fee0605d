//! File and stdin I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io::{IsTerminal, Read};
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Write content to file with standardized error handling.
///
/// Wraps `fs::write` with consistent `Error::internal_io` formatting.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Resolve a command-line text value: `-` reads all of stdin, anything else
/// is returned as given.
pub fn read_input(value: &str, field: &str) -> Result<String> {
    if value != "-" {
        return Ok(value.to_string());
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(Error::validation_invalid_argument(
            field,
            "Cannot read input from stdin when stdin is a TTY",
            None,
            None,
        ));
    }

    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .map_err(|e| Error::internal_io(e.to_string(), Some("read stdin".to_string())))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "test content").unwrap();

        let content = read_file(temp.path(), "test read").unwrap();
        assert!(content.contains("test content"));
    }

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/path.txt"), "test read");
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn write_file_returns_error_for_invalid_path() {
        let result = write_file(
            Path::new("/nonexistent/dir/file.txt"),
            "content",
            "test write",
        );
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn read_input_passes_literal_values_through() {
        assert_eq!(read_input("/efs/a", "path").unwrap(), "/efs/a");
        assert_eq!(read_input("", "path").unwrap(), "");
    }
}
