//! In-place section editing through a scratch file

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use shellkit_fs::ScratchFile;

use crate::scanner::{append_section, rewrite_section};
use crate::{Error, Result, SectionMode, SectionRequest};

/// What an edit did to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The target file does not exist; nothing was done.
    Skipped,
    /// Remove was requested but the markers are not both present.
    Unchanged,
    /// The section was appended at the end of the file.
    Inserted,
    /// The body of the first section was replaced.
    Replaced,
    /// The first section was deleted.
    Removed,
}

impl EditOutcome {
    /// Whether the target file was rewritten.
    pub fn modified(&self) -> bool {
        matches!(self, Self::Inserted | Self::Replaced | Self::Removed)
    }
}

impl fmt::Display for EditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Skipped => "skipped",
            Self::Unchanged => "unchanged",
            Self::Inserted => "inserted",
            Self::Replaced => "replaced",
            Self::Removed => "removed",
        };
        f.write_str(s)
    }
}

/// Apply `request` to its target file.
///
/// A missing target is not an error: the editor manages existing files and
/// never creates them. Otherwise the new content is written to a scratch
/// file in the target's directory and renamed over the target. On any
/// failure the scratch file is deleted and the target is left untouched.
pub fn update_section(request: &SectionRequest) -> Result<EditOutcome> {
    let path = request.path();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "Target file does not exist, nothing to update");
        return Ok(EditOutcome::Skipped);
    }

    tracing::info!(path = %path.display(), mode = %request.mode(), "Updating file");

    let mut scratch = ScratchFile::create(path).map_err(|source| {
        report(Error::TempFileCreationFailed {
            path: path.to_path_buf(),
            source,
        })
    })?;

    let edit = File::open(path)
        .map(BufReader::new)
        .and_then(|reader| request.markers().present_in(reader))
        .map_err(|source| processing_failed(path, source))
        .and_then(|found| {
            write_edit(
                || File::open(path).map(BufReader::new),
                request,
                found,
                &mut scratch,
            )
        });

    let outcome = match edit {
        Ok(outcome) => outcome,
        Err(e) => {
            scratch.discard();
            return Err(report(e));
        }
    };

    if !outcome.modified() {
        tracing::debug!(path = %path.display(), "Markers not found, nothing to remove");
        scratch.discard();
        return Ok(outcome);
    }

    scratch.promote().map_err(|e| report(Error::Fs(e)))?;
    tracing::debug!(path = %path.display(), outcome = %outcome, "Section updated");

    Ok(outcome)
}

/// Parse `[--remove] <file> <start-marker> <end-marker> [line]...` and apply it.
///
/// Argument errors are reported before the target is touched.
pub fn update_section_args<S: AsRef<str>>(args: &[S]) -> Result<EditOutcome> {
    let request = SectionRequest::from_args(args).map_err(report)?;
    update_section(&request)
}

/// Write the edited content of the target into `out`.
///
/// `open` yields a fresh reader over the original content. `found` is the
/// result of the marker presence test.
pub(crate) fn write_edit<R, F, W>(
    open: F,
    request: &SectionRequest,
    found: bool,
    out: &mut W,
) -> Result<EditOutcome>
where
    R: BufRead,
    F: FnOnce() -> io::Result<R>,
    W: Write,
{
    let path = request.path();
    let markers = request.markers();

    match (found, request.mode()) {
        (true, mode) => {
            let mut writer = BufWriter::new(out);
            open()
                .and_then(|reader| {
                    rewrite_section(reader, &mut writer, markers, mode, request.lines())
                })
                .map_err(|source| processing_failed(path, source))?;

            Ok(match mode {
                SectionMode::Upsert => EditOutcome::Replaced,
                SectionMode::Remove => EditOutcome::Removed,
            })
        }
        (false, SectionMode::Remove) => Ok(EditOutcome::Unchanged),
        (false, SectionMode::Upsert) => {
            let mut writer = BufWriter::new(out);
            open()
                .and_then(|reader| append_section(reader, &mut writer, markers, request.lines()))
                .map_err(|source| Error::AppendFailed {
                    path: path.to_path_buf(),
                    source,
                })?;

            Ok(EditOutcome::Inserted)
        }
    }
}

fn processing_failed(path: &Path, source: io::Error) -> Error {
    Error::SectionProcessingFailed {
        path: path.to_path_buf(),
        source,
    }
}

fn report(error: Error) -> Error {
    tracing::error!(error = %error, "Section update failed");
    error
}
