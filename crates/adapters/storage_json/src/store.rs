//! File-backed [`DocumentStore`] implementation.

use std::future::Future;
use std::path::{Path, PathBuf};

use tuckshop_app::ports::DocumentStore;
use tuckshop_domain::document::Document;
use tuckshop_domain::error::TuckshopError;

use crate::error::StorageError;

/// Whole-file JSON store.
///
/// `load` reads and parses the entire file; `save` overwrites it in full
/// with pretty-printed JSON. There is no temp-file rename, no fsync, and no
/// lock: a crash mid-write can truncate the store, and overlapping
/// load-modify-save cycles race with last-write-wins semantics.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Borrow the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Seed the backing file with an empty document when it does not exist.
    ///
    /// Called once at startup. Per-request `load` stays strict: a file that
    /// goes missing afterwards fails the request that loaded it.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the existence check or the seed write
    /// fails.
    pub async fn initialize(&self) -> Result<(), TuckshopError> {
        if tokio::fs::try_exists(&self.path)
            .await
            .map_err(StorageError::from)?
        {
            return Ok(());
        }
        self.save(&Document::default()).await
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> impl Future<Output = Result<Document, TuckshopError>> + Send {
        let path = self.path.clone();
        async move {
            let bytes = tokio::fs::read(&path).await.map_err(StorageError::from)?;
            let document = serde_json::from_slice(&bytes).map_err(StorageError::from)?;
            Ok(document)
        }
    }

    fn save(&self, document: &Document) -> impl Future<Output = Result<(), TuckshopError>> + Send {
        let path = self.path.clone();
        let payload = serde_json::to_vec_pretty(document).map_err(StorageError::from);
        async move {
            let payload = payload?;
            tokio::fs::write(&path, payload)
                .await
                .map_err(StorageError::from)?;
            Ok(())
        }
    }
}
