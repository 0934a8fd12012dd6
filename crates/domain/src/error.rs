//! Common error types used across the workspace.

use std::fmt;

/// Top-level error for tuckshop operations.
#[derive(Debug, thiserror::Error)]
pub enum TuckshopError {
    /// A resource id was absent from its collection.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The backing store failed to read, parse, or write.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A lookup by id failed.
///
/// The [`Display`](fmt::Display) output is the exact message surfaced in the
/// HTTP error body, so the two constructors differ only in whether the
/// offending id is named.
#[derive(Debug)]
pub struct NotFoundError {
    /// Resource kind, e.g. `"Order"`.
    pub resource: &'static str,
    /// Raw id from the request path, when the message should name it.
    pub id: Option<String>,
}

impl NotFoundError {
    /// Not-found error whose message names the missing id.
    #[must_use]
    pub fn with_id(resource: &'static str, id: impl Into<String>) -> Self {
        Self {
            resource,
            id: Some(id.into()),
        }
    }

    /// Not-found error without an id in the message.
    #[must_use]
    pub fn bare(resource: &'static str) -> Self {
        Self { resource, id: None }
    }
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{} #{} not found", self.resource, id),
            None => write!(f, "{} not found", self.resource),
        }
    }
}

impl std::error::Error for NotFoundError {}
