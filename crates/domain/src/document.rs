//! The persisted document — the single object written to disk.

use serde::{Deserialize, Serialize};

use crate::menu_item::MenuItem;
use crate::order::Order;

/// The whole persisted state: two collections inside one JSON object.
///
/// Both fields are required when parsing; a stored document missing either
/// array is invalid content and fails the request that loaded it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub menu: Vec<MenuItem>,
    pub orders: Vec<Order>,
}
