//! Order — a placed order with a `status` lifecycle field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::ItemId;

/// Status assigned to every freshly created order.
pub const STATUS_PENDING: &str = "pending";

/// A placed order: system-assigned id, a status string, and arbitrary
/// caller fields persisted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: ItemId,
    pub status: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Order {
    /// Build an order from a request body.
    ///
    /// The id is system-assigned and `status` is forced to
    /// [`STATUS_PENDING`]; caller-supplied values for either are discarded.
    #[must_use]
    pub fn new(id: ItemId, mut fields: Map<String, Value>) -> Self {
        fields.remove("id");
        fields.remove("status");
        Self {
            id,
            status: STATUS_PENDING.to_owned(),
            fields,
        }
    }

    /// Shallow-merge a partial update onto this order.
    ///
    /// Caller fields override existing ones, including `status`. The id is
    /// preserved. A non-string `status` value is dropped rather than stored
    /// under a duplicate key.
    pub fn merge(&mut self, mut patch: Map<String, Value>) {
        patch.remove("id");
        if let Some(Value::String(status)) = patch.remove("status") {
            self.status = status;
        }
        for (key, value) in patch {
            self.fields.insert(key, value);
        }
    }
}
