//! Scratch files with atomic promotion
//!
//! A [`ScratchFile`] is the write-ahead buffer for an in-place edit. It is
//! created in the same directory as its target so that promotion is a
//! same-filesystem rename, and it is deleted on drop unless promoted.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::{Error, Result};

/// A uniquely named temporary file that will replace `target` on promotion.
#[derive(Debug)]
pub struct ScratchFile {
    file: NamedTempFile,
    target: PathBuf,
}

impl ScratchFile {
    /// Create a scratch file next to `target`.
    ///
    /// The file is named `.{target-name}.XXXXXX.tmp` and is held under an
    /// exclusive advisory lock until it is promoted or dropped.
    pub fn create(target: &Path) -> Result<Self> {
        let dir = scratch_dir(target);
        let prefix = format!(
            ".{}.",
            target
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default()
        );

        let file = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| Error::io(dir, e))?;

        file.as_file()
            .lock_exclusive()
            .map_err(|_| Error::LockFailed {
                path: file.path().to_path_buf(),
            })?;

        tracing::trace!(scratch = %file.path().display(), target = %target.display(), "Created scratch file");

        Ok(Self {
            file,
            target: target.to_path_buf(),
        })
    }

    /// Path of the scratch file itself.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Path the scratch file will replace.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Atomically replace the target with the scratch file's content.
    ///
    /// The target's permissions, when it exists, are carried over to the
    /// scratch file before the rename.
    pub fn promote(self) -> Result<()> {
        let Self { file, target } = self;

        file.as_file()
            .sync_all()
            .map_err(|e| Error::io(file.path(), e))?;

        if let Ok(metadata) = fs::metadata(&target) {
            fs::set_permissions(file.path(), metadata.permissions())
                .map_err(|e| Error::io(file.path(), e))?;
        }

        file.as_file().unlock().map_err(|_| Error::LockFailed {
            path: file.path().to_path_buf(),
        })?;

        file.persist(&target)
            .map_err(|e| Error::io(&target, e.error))?;

        tracing::trace!(target = %target.display(), "Promoted scratch file");
        Ok(())
    }

    /// Delete the scratch file without touching the target.
    pub fn discard(self) {
        let path = self.file.path().to_path_buf();
        if let Err(e) = self.file.close() {
            tracing::warn!(scratch = %path.display(), error = %e, "Failed to delete scratch file");
        }
    }
}

impl Write for ScratchFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Directory a scratch file for `target` lives in.
fn scratch_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
