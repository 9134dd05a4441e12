//! Input loading.
//!
//! Reads the whole input once at startup into an immutable, ordered `LineSet`.

use crate::constants::NO_INPUT_PLACEHOLDER;
use crate::validation::InputValidator;
use crate::{Result, VgrepError};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::Path;

/// Ordered input lines, indices stable for the whole session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineSet {
    lines: Vec<String>,
}

impl LineSet {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Single placeholder line shown when there is nothing to read
    pub fn placeholder() -> Self {
        Self::new(vec![NO_INPUT_PLACEHOLDER.to_string()])
    }

    /// Load from stdin when it is piped, else from `file`, else the placeholder
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let stdin = io::stdin();
        let piped = !stdin.is_terminal();
        Self::load_from(stdin.lock(), piped, file)
    }

    /// Source selection behind `load`, with stdin passed in
    pub fn load_from<R: BufRead>(stdin: R, stdin_piped: bool, file: Option<&Path>) -> Result<Self> {
        if stdin_piped {
            debug!("Reading input from stdin");
            return Self::from_reader(stdin).map_err(VgrepError::IoError);
        }

        match file {
            Some(path) => Self::from_file(path),
            None => {
                info!("No input given, using placeholder");
                Ok(Self::placeholder())
            }
        }
    }

    /// Read every line of a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let display = path.to_string_lossy();
        InputValidator::validate_file_path(&display)?;

        let file = File::open(path)
            .map_err(|e| VgrepError::input_unavailable(&display, &e.to_string()))?;
        debug!("Reading input from {}", path.display());

        Self::from_reader(BufReader::new(file))
            .map_err(|e| VgrepError::input_unavailable(&display, &e.to_string()))
    }

    /// Split a reader into lines, dropping `\n` / `\r\n` terminators.
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn from_reader<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut lines = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            lines.push(String::from_utf8_lossy(&buf).into_owned());
        }
        debug!("Loaded {} lines", lines.len());
        Ok(Self { lines })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl From<Vec<&str>> for LineSet {
    fn from(lines: Vec<&str>) -> Self {
        Self::new(lines.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_reader_strips_terminators() {
        let input = Cursor::new("apple\r\nbanana\ncherry");
        let lines = LineSet::from_reader(input).unwrap();
        assert_eq!(lines, LineSet::from(vec!["apple", "banana", "cherry"]));
    }

    #[test]
    fn test_from_reader_keeps_blank_lines() {
        let lines = LineSet::from_reader(Cursor::new("a\n\nb\n")).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.get(1), Some(""));
    }

    #[test]
    fn test_from_reader_empty() {
        let lines = LineSet::from_reader(Cursor::new("")).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_from_reader_invalid_utf8() {
        let lines = LineSet::from_reader(Cursor::new(b"ok\n\xffbad\n".to_vec())).unwrap();
        assert_eq!(lines.get(0), Some("ok"));
        assert!(lines.get(1).unwrap().ends_with("bad"));
    }

    #[test]
    fn test_piped_stdin_wins_over_file() {
        let lines = LineSet::load_from(
            Cursor::new("from stdin\n"),
            true,
            Some(Path::new("/does/not/exist")),
        )
        .unwrap();
        assert_eq!(lines, LineSet::from(vec!["from stdin"]));
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "first").unwrap();
        writeln!(file, "second").unwrap();

        let lines = LineSet::load_from(Cursor::new(""), false, Some(file.path())).unwrap();
        assert_eq!(lines, LineSet::from(vec!["first", "second"]));
    }

    #[test]
    fn test_missing_file_is_input_unavailable() {
        let err = LineSet::load_from(Cursor::new(""), false, Some(Path::new("/no/such/vgrep/file")))
            .unwrap_err();
        assert!(matches!(err, VgrepError::InputUnavailable { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_no_input_uses_placeholder() {
        let lines = LineSet::load_from(Cursor::new(""), false, None).unwrap();
        assert_eq!(lines, LineSet::placeholder());
        assert_eq!(lines.get(0), Some(NO_INPUT_PLACEHOLDER));
    }
}
