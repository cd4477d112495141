//! Error types for shellkit-section

use std::path::PathBuf;

/// Result type for shellkit-section operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing a section.
///
/// Every variant other than `InsufficientArguments` guarantees that the
/// target file was left unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Insufficient arguments: {message}")]
    InsufficientArguments { message: String },

    #[error("Failed to create temporary file for {path}: {source}")]
    TempFileCreationFailed {
        path: PathBuf,
        #[source]
        source: shellkit_fs::Error,
    },

    #[error("Failed to process section in {path}: {source}")]
    SectionProcessingFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to append section to {path}: {source}")]
    AppendFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Filesystem error: {0}")]
    Fs(#[from] shellkit_fs::Error),

    #[error("Failed to load section manifest: {0}")]
    Config(#[source] shellkit_fs::Error),
}

impl Error {
    pub fn insufficient(message: impl Into<String>) -> Self {
        Self::InsufficientArguments {
            message: message.into(),
        }
    }
}
