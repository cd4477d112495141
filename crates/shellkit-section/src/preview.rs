//! Dry-run previews of section edits

use std::fs;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use crate::editor::{EditOutcome, write_edit};
use crate::{Error, Result, SectionRequest};

/// The result of running an edit in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPreview {
    pub path: PathBuf,
    pub outcome: EditOutcome,
    pub before: String,
    pub after: String,
}

impl SectionPreview {
    /// Whether applying the edit would change the file's bytes.
    pub fn has_changes(&self) -> bool {
        self.before != self.after
    }

    /// Render the change as a unified diff. Empty when nothing changes.
    pub fn unified_diff(&self) -> String {
        if !self.has_changes() {
            return String::new();
        }

        let name = self.path.display().to_string();
        TextDiff::from_lines(&self.before, &self.after)
            .unified_diff()
            .context_radius(3)
            .header(&format!("a/{name}"), &format!("b/{name}"))
            .to_string()
    }
}

/// Compute what [`crate::update_section`] would do without writing anything.
pub fn preview_section(request: &SectionRequest) -> Result<SectionPreview> {
    let path = request.path();

    if !path.exists() {
        return Ok(unchanged(path, EditOutcome::Skipped, String::new()));
    }

    let original = fs::read(path).map_err(|e| Error::Fs(shellkit_fs::Error::io(path, e)))?;
    let found = request
        .markers()
        .present_in(original.as_slice())
        .map_err(|source| Error::SectionProcessingFailed {
            path: path.to_path_buf(),
            source,
        })?;

    let mut edited = Vec::with_capacity(original.len());
    let outcome = write_edit(|| Ok(original.as_slice()), request, found, &mut edited)?;

    let before = String::from_utf8_lossy(&original).into_owned();
    if !outcome.modified() {
        return Ok(unchanged(path, outcome, before));
    }

    Ok(SectionPreview {
        path: path.to_path_buf(),
        outcome,
        before,
        after: String::from_utf8_lossy(&edited).into_owned(),
    })
}

fn unchanged(path: &Path, outcome: EditOutcome, content: String) -> SectionPreview {
    SectionPreview {
        path: path.to_path_buf(),
        outcome,
        after: content.clone(),
        before: content,
    }
}
