//! Menu item — one entry on the menu.
//!
//! Beyond the system-assigned `id`, the shape is whatever the caller
//! submitted; every extra field is persisted verbatim and round-trips in
//! submission order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::ItemId;

/// A menu entry: a system-assigned id plus arbitrary caller fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl MenuItem {
    /// Build a menu item from a request body.
    ///
    /// The id is system-assigned; a caller-supplied `id` field is discarded
    /// so it cannot shadow the real one.
    #[must_use]
    pub fn new(id: ItemId, mut fields: Map<String, Value>) -> Self {
        fields.remove("id");
        Self { id, fields }
    }
}
