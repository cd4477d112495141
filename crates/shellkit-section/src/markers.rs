//! Literal start/end marker lines

use std::io::{self, BufRead};

use crate::{Error, Result};

/// The pair of literal lines that delimit a section.
///
/// Markers are compared against whole lines by exact byte equality, with
/// only the trailing `\n` stripped. They are never interpreted as patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Markers {
    start: String,
    end: String,
}

impl Markers {
    /// Create a marker pair. Both markers must be non-empty.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        let start = start.into();
        let end = end.into();

        if start.is_empty() {
            return Err(Error::insufficient("start marker must not be empty"));
        }
        if end.is_empty() {
            return Err(Error::insufficient("end marker must not be empty"));
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Whether `line` (without its `\n`) is the start marker.
    pub fn is_start(&self, line: &[u8]) -> bool {
        line == self.start.as_bytes()
    }

    /// Whether `line` (without its `\n`) is the end marker.
    pub fn is_end(&self, line: &[u8]) -> bool {
        line == self.end.as_bytes()
    }

    /// Whether both markers occur as lines anywhere in `reader`.
    ///
    /// This is a membership test only. The relative order of the markers
    /// and whether they pair up are not checked.
    pub fn present_in<R: BufRead>(&self, mut reader: R) -> io::Result<bool> {
        let mut seen_start = false;
        let mut seen_end = false;
        let mut line = Vec::new();

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(false);
            }

            let content = line_content(&line);
            seen_start |= self.is_start(content);
            seen_end |= self.is_end(content);

            if seen_start && seen_end {
                return Ok(true);
            }
        }
    }
}

/// A raw line with its `\n` terminator removed.
pub(crate) fn line_content(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\n").unwrap_or(line)
}
