//! Item identifiers and the route-parameter parsing rules.
//!
//! Ids are millisecond timestamps assigned at creation time. The endpoints
//! match a path segment against stored ids with three different strictness
//! levels, and each rule is kept per endpoint rather than unified:
//!
//! - [`leading_int`] — menu deletion: any leading integer counts, trailing
//!   junk is ignored (`"12abc"` matches id `12`).
//! - [`coerced`] — order lookup and update: the whole (trimmed) segment must
//!   coerce to a number equal to the stored id; an empty segment coerces
//!   to `0`.
//! - [`exact`] — order deletion: the whole segment must parse as an integer,
//!   nothing more.

/// Identifier for a menu item or an order.
///
/// Milliseconds since the Unix epoch at the moment of creation. Uniqueness
/// within a collection relies on timestamp granularity and is not guarded
/// under rapid concurrent creation.
pub type ItemId = i64;

/// Parse the leading integer of a path segment.
///
/// Skips leading whitespace, accepts an optional sign, then consumes digits
/// until the first non-digit. Returns `None` when no digits are present.
#[must_use]
pub fn leading_int(raw: &str) -> Option<ItemId> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, rest.strip_prefix('+').unwrap_or(rest)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let value: ItemId = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Coerce a whole path segment to a number, loosely.
///
/// Trims whitespace; an empty segment coerces to `0`; otherwise the entire
/// segment must be an integer or an integral float. Returns `None` when the
/// segment cannot coerce, in which case it matches no stored id.
#[must_use]
pub fn coerced(raw: &str) -> Option<ItemId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    if let Ok(value) = trimmed.parse::<ItemId>() {
        return Some(value);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.fract() == 0.0)
        .map(|v| v as ItemId)
}

/// Parse a whole path segment as an integer, exactly.
#[must_use]
pub fn exact(raw: &str) -> Option<ItemId> {
    raw.parse().ok()
}
