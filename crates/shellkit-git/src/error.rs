//! Error types for shellkit-git

use std::path::PathBuf;

/// Result type for shellkit-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in shellkit-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Not a git repository (or any parent): {path}")]
    NotARepository { path: PathBuf },
}
