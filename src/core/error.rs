//! Error types for permission synchronization

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while synchronizing permission settings
#[derive(Error, Debug)]
pub enum SyncError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A settings file could not be written
    #[error("Failed to write settings file {}: {}", path.display(), source)]
    WriteSettings {
        /// Destination that failed
        path: PathBuf,
        /// Underlying IO failure
        source: std::io::Error,
    },

    /// A project discovery pattern was not valid glob syntax
    #[error("Invalid project pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Result type alias for synchronization operations
pub type SyncResult<T> = Result<T, SyncError>;
