//! Directory creation and path expansion helpers

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Create `path` and any missing parents.
///
/// Succeeds without change when the directory already exists. Returns the
/// canonical form of the directory.
pub fn ensure_dir(path: &Path) -> Result<PathBuf> {
    if path.exists() && !path.is_dir() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    if !path.exists() {
        tracing::debug!(path = %path.display(), "Creating directory");
        fs::create_dir_all(path).map_err(|e| Error::io(path, e))?;
    }

    dunce::canonicalize(path).map_err(|e| Error::io(path, e))
}

/// Expand a leading `~` to the current user's home directory.
///
/// Only `~` and `~/...` are expanded; `~user` forms are returned unchanged.
pub fn expand_home(path: &str) -> Result<PathBuf> {
    let rest = if path == "~" {
        ""
    } else if let Some(rest) = path.strip_prefix("~/") {
        rest
    } else {
        return Ok(PathBuf::from(path));
    };

    let home = dirs::home_dir().ok_or(Error::HomeNotFound)?;
    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
