//! Single forward pass over the lines of a file
//!
//! The scanner copies lines from a reader to a writer while tracking where
//! it stands relative to the first section. The state only moves forward:
//! once the first section has been handled, every remaining line is copied
//! verbatim, including any later section with the same markers.

use std::io::{self, BufRead, ErrorKind, Read, Write};

use crate::SectionMode;
use crate::markers::{Markers, line_content};

/// Position of the scanner relative to the first section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// The first start marker has not been seen yet.
    Before,
    /// Inside the first section; original lines are dropped.
    InSuppressedSpan,
    /// The first section has been handled.
    After,
}

impl ScanState {
    /// Advance by one line, writing whatever the line produces.
    fn step<W: Write>(
        self,
        raw: &[u8],
        markers: &Markers,
        mode: SectionMode,
        payload: &[String],
        writer: &mut W,
    ) -> io::Result<Self> {
        let content = line_content(raw);

        match self {
            Self::Before if markers.is_start(content) => {
                if mode == SectionMode::Upsert {
                    write_line(writer, markers.start())?;
                    write_payload(writer, payload)?;
                }
                Ok(Self::InSuppressedSpan)
            }
            Self::InSuppressedSpan if markers.is_end(content) => {
                if mode == SectionMode::Upsert {
                    writer.write_all(raw)?;
                }
                Ok(Self::After)
            }
            Self::InSuppressedSpan => Ok(Self::InSuppressedSpan),
            Self::Before | Self::After => {
                writer.write_all(raw)?;
                Ok(self)
            }
        }
    }
}

/// Rewrite the first section of `reader` into `writer`.
///
/// In [`SectionMode::Upsert`] the body of the first section is replaced by
/// `payload`; in [`SectionMode::Remove`] the first section is dropped with
/// its markers. Returns the state the scan ended in.
pub fn rewrite_section<R: BufRead, W: Write>(
    mut reader: R,
    writer: &mut W,
    markers: &Markers,
    mode: SectionMode,
    payload: &[String],
) -> io::Result<ScanState> {
    let mut state = ScanState::Before;
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        state = state.step(&line, markers, mode, payload, writer)?;
    }

    writer.flush()?;
    Ok(state)
}

/// Copy `reader` into `writer` verbatim and append a new section.
///
/// A newline is inserted first when the copied content is non-empty and
/// does not already end with one.
pub fn append_section<R: Read, W: Write>(
    mut reader: R,
    writer: &mut W,
    markers: &Markers,
    payload: &[String],
) -> io::Result<()> {
    let mut buf = [0u8; 8192];
    let mut last_byte = None;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buf[..n])?;
        last_byte = Some(buf[n - 1]);
    }

    if matches!(last_byte, Some(b) if b != b'\n') {
        writer.write_all(b"\n")?;
    }

    write_line(writer, markers.start())?;
    write_payload(writer, payload)?;
    write_line(writer, markers.end())?;
    writer.flush()
}

fn write_line<W: Write>(writer: &mut W, line: &str) -> io::Result<()> {
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\n")
}

fn write_payload<W: Write>(writer: &mut W, payload: &[String]) -> io::Result<()> {
    payload.iter().try_for_each(|line| write_line(writer, line))
}
