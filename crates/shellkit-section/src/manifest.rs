//! Declarative lists of section edits
//!
//! A manifest declares edits in TOML, JSON or YAML:
//!
//! ```toml
//! [[section]]
//! file = "~/.bashrc"
//! start = "# >>> shellkit >>>"
//! end = "# <<< shellkit <<<"
//! lines = ["export EDITOR=vim"]
//!
//! [[section]]
//! file = "legacy.rc"
//! start = "# BEGIN legacy"
//! end = "# END legacy"
//! remove = true
//! ```
//!
//! Relative `file` paths resolve against the manifest's directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use shellkit_fs::{ConfigStore, expand_home, resolve_against};

use crate::{EditOutcome, Error, Markers, Result, SectionMode, SectionRequest, update_section};

/// One declared edit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionEntry {
    pub file: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub remove: bool,
    #[serde(default)]
    pub lines: Vec<String>,
}

/// An ordered list of section edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionManifest {
    #[serde(default, rename = "section")]
    pub sections: Vec<SectionEntry>,
    #[serde(skip)]
    base_dir: PathBuf,
}

impl SectionManifest {
    /// Load a manifest; the format is chosen by file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let mut manifest: Self = ConfigStore::new().load(path).map_err(Error::Config)?;
        manifest.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        tracing::debug!(
            path = %path.display(),
            sections = manifest.sections.len(),
            "Loaded section manifest"
        );
        Ok(manifest)
    }

    /// Build a manifest in memory, resolving relative paths against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>, sections: Vec<SectionEntry>) -> Self {
        Self {
            sections,
            base_dir: base_dir.into(),
        }
    }

    /// Validate every entry into a request.
    ///
    /// Fails on the first invalid entry, naming its position.
    pub fn requests(&self) -> Result<Vec<SectionRequest>> {
        self.sections
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                self.request_for(entry).map_err(|e| match e {
                    Error::InsufficientArguments { message } => {
                        Error::insufficient(format!("section #{}: {message}", index + 1))
                    }
                    other => other,
                })
            })
            .collect()
    }

    fn request_for(&self, entry: &SectionEntry) -> Result<SectionRequest> {
        if entry.file.is_empty() {
            return Err(Error::insufficient("target file must not be empty"));
        }

        let path = resolve_against(&self.base_dir, &expand_home(&entry.file)?);
        let markers = Markers::new(entry.start.as_str(), entry.end.as_str())?;
        let mode = if entry.remove {
            SectionMode::Remove
        } else {
            SectionMode::Upsert
        };

        SectionRequest::new(path, markers, mode, entry.lines.clone())
    }
}

/// Apply every edit in `manifest`, in order.
///
/// All entries are validated before any file is touched. Application stops
/// at the first failing edit; edits already applied stay applied.
pub fn apply_manifest(manifest: &SectionManifest) -> Result<Vec<(PathBuf, EditOutcome)>> {
    let requests = manifest.requests()?;

    requests
        .iter()
        .map(|request| {
            let outcome = update_section(request)?;
            Ok((request.path().to_path_buf(), outcome))
        })
        .collect()
}
