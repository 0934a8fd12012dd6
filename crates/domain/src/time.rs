//! Time helpers for id assignment.

use chrono::Utc;

use crate::id::ItemId;

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// This is the value assigned as a fresh [`ItemId`] at creation time.
#[must_use]
pub fn now_millis() -> ItemId {
    Utc::now().timestamp_millis()
}
