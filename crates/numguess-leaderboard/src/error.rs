//! Error types for the storage layer.
//!
//! [`StoreError`] is returned by [`KeyValueStore`] implementations. The
//! [`Leaderboard`] logs and absorbs it; only direct users of a store see it.
//!
//! [`KeyValueStore`]: crate::store::KeyValueStore
//! [`Leaderboard`]: crate::leaderboard::Leaderboard

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A filesystem operation failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        /// The file or directory involved.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The key cannot be mapped to a storage location.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}
