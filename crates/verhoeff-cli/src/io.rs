/// Input reading with size enforcement and UTF-8 validation, plus splitting
/// the content into values.
///
/// `verhoeff-core` never touches the filesystem; all reading happens here.
///
/// - Disk files: size checked via `std::fs::metadata` before any read.
/// - Stdin: buffered with a `Read::take` cap so allocation is bounded.
/// - UTF-8 validation via `std::str::from_utf8` with byte-offset reporting.
/// - All I/O errors become [`CliError`] variants with exit code 2.
use std::io::Read;
use std::path::Path;

use crate::PathOrStdin;
use crate::error::CliError;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reads the entire contents of `source` into a `String`.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for a missing or unreadable file, input
/// larger than `max_size`, any other I/O error, or invalid UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => {
            let stdin = std::io::stdin();
            read_capped(stdin.lock(), "-", max_size)
        }
    }
}

/// Splits input content into values, one per line.
///
/// Trailing whitespace (including the `\r` of CRLF line endings) is trimmed
/// and blank lines are skipped. Leading whitespace is kept: it is part of the
/// value and will be reported as a non-digit.
pub fn split_values(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

// ---------------------------------------------------------------------------
// Disk file reading
// ---------------------------------------------------------------------------

fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let file_size = std::fs::metadata(path)
        .map_err(|e| io_error_to_cli(&e, path))?
        .len();

    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))?;
    bytes_to_string(bytes, &path.display().to_string())
}

/// Maps a `std::io::Error` from a disk-file operation to a [`CliError`].
fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == std::io::ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == std::io::ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Capped stream reading
// ---------------------------------------------------------------------------

/// Reads `reader` to the end, failing once more than `max_size` bytes arrive.
///
/// Reads at most `max_size + 1` bytes so the allocation stays bounded while
/// still telling "exactly at the limit" apart from "over the limit".
fn read_capped<R: Read>(reader: R, label: &str, max_size: u64) -> Result<String, CliError> {
    let mut buf: Vec<u8> = Vec::new();
    reader
        .take(max_size.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|e| CliError::IoError {
            source: label.to_owned(),
            detail: e.to_string(),
        })?;

    if buf.len() as u64 > max_size {
        return Err(CliError::FileTooLarge {
            source: label.to_owned(),
            limit: max_size,
            actual: None,
        });
    }

    bytes_to_string(buf, label)
}

// ---------------------------------------------------------------------------
// UTF-8 conversion
// ---------------------------------------------------------------------------

fn bytes_to_string(bytes: Vec<u8>, source_label: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::wildcard_enum_match_arm)]

    use std::io::Write as _;
    use std::path::PathBuf;

    use super::*;

    fn temp_file_with(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("create temp file");
        f.write_all(contents).expect("write temp file");
        f
    }

    // ── disk file ────────────────────────────────────────────────────────────

    #[test]
    fn read_valid_file() {
        let f = temp_file_with(b"2363\n2364\n");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        let content = read_input(&source, 1024).expect("should read file");
        assert_eq!(content, "2363\n2364\n");
    }

    #[test]
    fn read_file_exactly_at_limit_succeeds() {
        let f = temp_file_with(b"12345");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        assert_eq!(read_input(&source, 5).expect("at limit"), "12345");
    }

    #[test]
    fn read_file_over_limit_reports_actual_size() {
        let f = temp_file_with(b"12345678901");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        match read_input(&source, 4).expect_err("over limit") {
            CliError::FileTooLarge {
                actual: Some(n), ..
            } => assert_eq!(n, 11),
            other => panic!("expected FileTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn read_invalid_utf8_reports_offset() {
        let f = temp_file_with(b"236\xFF");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        match read_input(&source, 1024).expect_err("bad UTF-8") {
            CliError::InvalidUtf8 { byte_offset, .. } => assert_eq!(byte_offset, 3),
            other => panic!("expected InvalidUtf8, got {other:?}"),
        }
    }

    #[test]
    fn read_nonexistent_file_returns_file_not_found() {
        let source = PathOrStdin::Path(PathBuf::from("/no/such/file/ever.txt"));
        let err = read_input(&source, 1024).expect_err("missing");
        assert_eq!(err.exit_code(), 2);
        assert!(matches!(err, CliError::FileNotFound { .. }));
    }

    // ── capped stream ────────────────────────────────────────────────────────

    #[test]
    fn capped_reader_accepts_exactly_max_size() {
        let content = read_capped(&b"2363"[..], "-", 4).expect("at limit");
        assert_eq!(content, "2363");
    }

    #[test]
    fn capped_reader_rejects_one_byte_over() {
        match read_capped(&b"23630"[..], "-", 4).expect_err("over limit") {
            CliError::FileTooLarge {
                source,
                limit,
                actual,
            } => {
                assert_eq!(source, "-");
                assert_eq!(limit, 4);
                assert_eq!(actual, None);
            }
            other => panic!("expected FileTooLarge, got {other:?}"),
        }
    }

    // ── split_values ─────────────────────────────────────────────────────────

    #[test]
    fn split_values_trims_crlf_and_skips_blank_lines() {
        let values = split_values("2363\r\n\n  \n2364  \n");
        assert_eq!(values, vec!["2363", "2364"]);
    }

    #[test]
    fn split_values_keeps_leading_whitespace() {
        assert_eq!(split_values(" 42\n"), vec![" 42"]);
    }

    #[test]
    fn split_values_of_empty_input_is_empty() {
        assert!(split_values("").is_empty());
    }
}
