//! Storage-specific error types.

use std::path::PathBuf;

/// Errors that can occur while reading or writing storage slots.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Key contains characters that cannot name a slot
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Failed to create the storage directory
    #[error("Failed to create storage directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read a slot
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a slot
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to remove a slot
    #[error("Failed to remove {path}: {source}")]
    RemoveFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}
