//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use tuckshop_domain::error::TuckshopError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`TuckshopError`] to an HTTP response with appropriate status code.
pub struct ApiError(TuckshopError);

impl From<TuckshopError> for ApiError {
    fn from(err: TuckshopError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            TuckshopError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            TuckshopError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
