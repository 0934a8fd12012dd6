//! JSON REST API handler modules and the success response envelopes.

#[allow(clippy::missing_errors_doc)]
pub mod menu;
#[allow(clippy::missing_errors_doc)]
pub mod orders;

use axum::Router;
use axum::routing::{delete, get, post};
use serde::Serialize;

use tuckshop_app::ports::DocumentStore;

use crate::state::AppState;

/// Success envelope wrapping a data payload.
#[derive(Serialize)]
pub struct DataBody<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> DataBody<T> {
    /// Wrap `data` in a `{"status":"success","data":…}` envelope.
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// Success envelope carrying a message instead of data.
#[derive(Serialize)]
pub struct MessageBody {
    pub status: &'static str,
    pub message: &'static str,
}

impl MessageBody {
    /// Wrap `message` in a `{"status":"success","message":…}` envelope.
    #[must_use]
    pub fn success(message: &'static str) -> Self {
        Self {
            status: "success",
            message,
        }
    }
}

/// Build the `/api` sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: DocumentStore + Send + Sync + 'static,
{
    Router::new()
        // Menu
        .route("/menu", get(menu::list::<S>).post(menu::create::<S>))
        .route("/menu/{id}", delete(menu::delete::<S>))
        // Orders
        .route("/order", post(orders::create::<S>))
        .route(
            "/order/{id}",
            get(orders::get::<S>)
                .patch(orders::update::<S>)
                .delete(orders::delete::<S>),
        )
}
