//! Favorites-specific error types.

use crate::storage::StorageError;

/// Errors that can occur while loading or persisting favorites.
#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    /// Underlying storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Stored favorites could not be parsed
    #[error("Stored favorites are corrupt: {source}")]
    Corrupt { source: serde_json::Error },

    /// Favorites could not be serialized
    #[error("Failed to serialize favorites: {0}")]
    Serialize(#[source] serde_json::Error),
}
