//! Recorded HID report files.
//!
//! One report per line as whitespace-separated hex bytes, e.g.
//! `00 00 04 00 00 00 00 00`. `#` starts a comment; blank lines are skipped.

use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {msg}")]
    Parse { line: usize, msg: String },
}

/// One report, with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedReport {
    pub line: usize,
    pub bytes: Vec<u8>,
}

fn parse_byte(token: &str) -> Result<u8, String> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u8::from_str_radix(digits, 16).map_err(|e| format!("bad byte {token:?}: {e}"))
}

/// Parse one line. `Ok(None)` for blank and comment-only lines.
pub fn parse_line(line: &str) -> Result<Option<Vec<u8>>, String> {
    let data = line.split('#').next().unwrap_or("").trim();
    if data.is_empty() {
        return Ok(None);
    }
    data.split_whitespace()
        .map(parse_byte)
        .collect::<Result<Vec<u8>, String>>()
        .map(Some)
}

pub fn parse_reports(content: &str) -> Result<Vec<RecordedReport>, ReplayError> {
    let mut reports = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let parsed = parse_line(line).map_err(|msg| ReplayError::Parse { line: i + 1, msg })?;
        if let Some(bytes) = parsed {
            reports.push(RecordedReport { line: i + 1, bytes });
        }
    }
    Ok(reports)
}

pub fn read_reports(path: &Path) -> Result<Vec<RecordedReport>, ReplayError> {
    let content = fs::read_to_string(path)?;
    parse_reports(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_hex_lines_and_comments() {
        let content = "\
# Ctrl+M
01 00 10 00 00 00 00 00
00 00 00 00 00 00 00 00

0x00 0x00 0x0e  # k
";
        let reports = parse_reports(content).unwrap();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].line, 2);
        assert_eq!(reports[0].bytes, [0x01, 0, 0x10, 0, 0, 0, 0, 0]);
        assert_eq!(reports[2].line, 5);
        assert_eq!(reports[2].bytes, [0, 0, 0x0e]);
    }

    #[test]
    fn reports_bad_byte_with_line() {
        let err = parse_reports("00 00 04\n00 zz 04\n").unwrap_err();
        match err {
            ReplayError::Parse { line, msg } => {
                assert_eq!(line, 2);
                assert!(msg.contains("zz"), "{msg}");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(parse_line("100").is_err());
    }

    #[test]
    fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "00 00 04 00 00 00 00 00").unwrap();
        writeln!(file, "# release").unwrap();
        writeln!(file, "00 00 00 00 00 00 00 00").unwrap();
        let reports = read_reports(file.path()).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].line, 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_reports(&dir.path().join("absent.hid")).unwrap_err();
        assert!(matches!(err, ReplayError::Io(_)));
    }
}
