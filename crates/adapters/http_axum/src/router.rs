//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tuckshop_app::ports::DocumentStore;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API under `/api`, allows cross-origin requests from any origin,
/// and includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: DocumentStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
