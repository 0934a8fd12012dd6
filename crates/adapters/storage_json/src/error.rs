//! Storage-specific error type wrapping file IO and JSON errors.

use tuckshop_domain::error::TuckshopError;

/// Errors originating from the flat-file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("file IO error")]
    Io(#[from] std::io::Error),

    /// The stored document is not valid JSON of the expected shape.
    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for TuckshopError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
