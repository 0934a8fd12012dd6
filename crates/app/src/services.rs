//! Use-case services, one per managed collection.

pub mod menu_service;
pub mod order_service;
