//! Error types for shellkit-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from shellkit-section
    #[error(transparent)]
    Section(#[from] shellkit_section::Error),

    /// Error from shellkit-fs
    #[error(transparent)]
    Fs(#[from] shellkit_fs::Error),

    /// Error from shellkit-git
    #[error(transparent)]
    Git(#[from] shellkit_git::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
