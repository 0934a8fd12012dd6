//! # tuckshop-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`DocumentStore`** port that storage adapters implement:
//!   whole-document `load()` / `save(&Document)`
//! - Provide the use-case services:
//!   - `MenuService` — list, create, delete menu items
//!   - `OrderService` — get, create, update, delete orders
//! - Every mutating use-case is a full load-modify-save cycle over the
//!   shared document; there is no locking, so overlapping cycles race and
//!   the last save wins
//!
//! ## Dependency rule
//! Depends on `tuckshop-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
