//! JSON REST handlers for orders.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

use tuckshop_app::ports::DocumentStore;
use tuckshop_domain::order::Order;

use crate::api::{DataBody, MessageBody};
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<DataBody<Order>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<DataBody<Order>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
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

/// `GET /api/order/{id}`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let order = state.order_service.get(&id).await?;
    Ok(GetResponse::Ok(Json(DataBody::success(order))))
}

/// `POST /api/order`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Json(body): Json<Map<String, Value>>,
) -> Result<CreateResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let order = state.order_service.create(body).await?;
    Ok(CreateResponse::Created(Json(DataBody::success(order))))
}

/// `PATCH /api/order/{id}`
pub async fn update<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(body): Json<Map<String, Value>>,
) -> Result<UpdateResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    state.order_service.update(&id, body).await?;
    Ok(UpdateResponse::Ok(Json(MessageBody::success(
        "Order updated successfully",
    ))))
}

/// `DELETE /api/order/{id}`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    state.order_service.remove(&id).await?;
    Ok(DeleteResponse::Ok(Json(MessageBody::success(
        "Order deleted successfully",
    ))))
}
