//! Shared application state for axum handlers.

use std::sync::Arc;

use tuckshop_app::ports::DocumentStore;
use tuckshop_app::services::menu_service::MenuService;
use tuckshop_app::services::order_service::OrderService;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying services do not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<S> {
    /// Menu CRUD service.
    pub menu_service: Arc<MenuService<S>>,
    /// Order CRUD service.
    pub order_service: Arc<OrderService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            menu_service: Arc::clone(&self.menu_service),
            order_service: Arc::clone(&self.order_service),
        }
    }
}

impl<S> AppState<S>
where
    S: DocumentStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(menu_service: MenuService<S>, order_service: OrderService<S>) -> Self {
        Self {
            menu_service: Arc::new(menu_service),
            order_service: Arc::new(order_service),
        }
    }
}
