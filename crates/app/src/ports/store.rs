//! Document store port — whole-document persistence.

use std::future::Future;

use tuckshop_domain::document::Document;
use tuckshop_domain::error::TuckshopError;

/// Whole-document persistence boundary.
///
/// Every data-bearing request performs a full load-modify-save cycle through
/// this port: no partial reads or writes, no caching between requests, and
/// no locking. Two overlapping cycles each load their own snapshot, so the
/// second `save` silently discards the first writer's change (last write
/// wins, whole-document granularity).
pub trait DocumentStore {
    /// Load and parse the entire persisted document.
    fn load(&self) -> impl Future<Output = Result<Document, TuckshopError>> + Send;

    /// Serialize the whole document and overwrite the persisted copy in full.
    fn save(&self, document: &Document) -> impl Future<Output = Result<(), TuckshopError>> + Send;
}
