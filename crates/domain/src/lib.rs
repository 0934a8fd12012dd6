//! # tuckshop-domain
//!
//! Pure domain model for the tuckshop food-stand API.
//!
//! ## Responsibilities
//! - Foundational types: item identifiers, error conventions, timestamps
//! - Define **`MenuItem`** (a menu entry with arbitrary caller-supplied fields)
//! - Define **`Order`** (a placed order with a `status` lifecycle field)
//! - Define the **`Document`** (the single persisted object holding both
//!   collections)
//! - Define the per-endpoint route-id parsing rules
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod document;
pub mod menu_item;
pub mod order;
