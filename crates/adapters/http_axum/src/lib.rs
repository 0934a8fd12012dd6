//! # tuckshop-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API (`/api/menu`, `/api/order/{id}`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses, wrapping success payloads
//!   in the `{"status":"success", …}` envelope
//! - Permit cross-origin requests from any origin and trace each request
//!
//! ## Dependency rule
//! Depends on `tuckshop-app` (for the port trait and services) and
//! `tuckshop-domain` (for domain types used in response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
