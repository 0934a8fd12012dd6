//! JSON REST handlers for the menu.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

use tuckshop_app::ports::DocumentStore;
use tuckshop_domain::menu_item::MenuItem;

use crate::api::{DataBody, MessageBody};
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<DataBody<Vec<MenuItem>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<DataBody<MenuItem>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/menu`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let items = state.menu_service.list().await?;
    Ok(ListResponse::Ok(Json(DataBody::success(items))))
}

/// `POST /api/menu`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Json(body): Json<Map<String, Value>>,
) -> Result<CreateResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let item = state.menu_service.create(body).await?;
    Ok(CreateResponse::Created(Json(DataBody::success(item))))
}

/// `DELETE /api/menu/{id}`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    state.menu_service.remove(&id).await?;
    Ok(DeleteResponse::Ok(Json(MessageBody::success(
        "Menu item deleted",
    ))))
}
