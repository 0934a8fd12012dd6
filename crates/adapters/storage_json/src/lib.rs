//! # tuckshop-adapter-storage-json
//!
//! Flat-file JSON persistence adapter.
//!
//! ## Responsibilities
//! - Implement the [`DocumentStore`](tuckshop_app::ports::DocumentStore)
//!   port over a single JSON file
//! - Read and parse the whole file on `load`; overwrite it in full with
//!   pretty-printed JSON on `save`
//! - Seed an empty document at startup when the file does not exist
//!
//! There is deliberately no atomicity, no fsync, and no locking; the file
//! is a shared mutable resource with last-write-wins semantics.
//!
//! ## Dependency rule
//! Depends on `tuckshop-app` (for the port trait) and `tuckshop-domain`
//! (for the document type). The `app` and `domain` crates must never
//! reference this adapter.

pub mod error;
pub mod store;

pub use error::StorageError;
pub use store::JsonFileStore;
