//! End-to-end smoke tests for the full tuckshopd stack.
//!
//! Each test spins up the complete application (temp-file store, real
//! services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use tuckshop_adapter_http_axum::router;
use tuckshop_adapter_http_axum::state::AppState;
use tuckshop_adapter_storage_json::JsonFileStore;
use tuckshop_app::services::menu_service::MenuService;
use tuckshop_app::services::order_service::OrderService;

/// Build a fully-wired router backed by the JSON file at `path`, seeding the
/// file when it is missing — the same wiring `main` performs.
async fn app(path: &Path) -> Router {
    let store = JsonFileStore::new(path);
    store.initialize().await.expect("store should initialise");

    let state = AppState::new(MenuService::new(store.clone()), OrderService::new(store));
    router::build(state)
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let dir = tempfile::tempdir().unwrap();
    let resp = app(&dir.path().join("tuckshop.json"))
        .await
        .oneshot(get_request("/health"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_and_list_menu_item() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir.path().join("tuckshop.json")).await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/menu",
            r#"{"name":"Tea","price":2}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["name"], "Tea");
    assert_eq!(body["data"]["price"], 2);
    let id = body["data"]["id"].as_i64().unwrap();
    assert!(id > 0);

    let resp = app.oneshot(get_request("/api/menu")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "success");
    let listed = body["data"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"].as_i64().unwrap(), id);
    assert_eq!(listed[0]["name"], "Tea");
}

#[tokio::test]
async fn should_still_succeed_when_deleting_absent_menu_item() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir.path().join("tuckshop.json")).await;

    app.clone()
        .oneshot(json_request("POST", "/api/menu", r#"{"name":"Tea"}"#))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/menu/424242")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Menu item deleted");

    // The collection is unchanged.
    let resp = app.oneshot(get_request("/api/menu")).await.unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_delete_menu_item_by_leading_integer_id() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir.path().join("tuckshop.json")).await;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/menu", r#"{"name":"Bun"}"#))
        .await
        .unwrap();
    let id = body_json(resp).await["data"]["id"].as_i64().unwrap();

    // Trailing junk after the digits is ignored for menu deletion.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/menu/{id}abc"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get_request("/api/menu")).await.unwrap();
    let body = body_json(resp).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_force_pending_status_when_creating_order() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir.path().join("tuckshop.json")).await;

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/order",
            r#"{"item":"Tea","status":"done"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["item"], "Tea");
    assert!(body["data"]["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn should_return_not_found_naming_id_for_missing_order() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir.path().join("tuckshop.json")).await;

    let resp = app.oneshot(get_request("/api/order/987654")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Order #987654 not found");
}

#[tokio::test]
async fn should_merge_patch_and_keep_other_fields() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir.path().join("tuckshop.json")).await;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/order", r#"{"item":"Tea"}"#))
        .await
        .unwrap();
    let id = body_json(resp).await["data"]["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/order/{id}"),
            r#"{"status":"done"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Order updated successfully");

    let resp = app
        .oneshot(get_request(&format!("/api/order/{id}")))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["data"]["status"], "done");
    assert_eq!(body["data"]["item"], "Tea");
}

#[tokio::test]
async fn should_write_nothing_when_patching_missing_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tuckshop.json");
    let app = app(&path).await;

    let before = std::fs::read(&path).unwrap();

    let resp = app
        .oneshot(json_request(
            "PATCH",
            "/api/order/987654",
            r#"{"status":"done"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Order not found");

    // The backing file was not rewritten.
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[tokio::test]
async fn should_require_exact_id_for_order_deletion() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir.path().join("tuckshop.json")).await;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/order", r#"{"item":"Tea"}"#))
        .await
        .unwrap();
    let id = body_json(resp).await["data"]["id"].as_i64().unwrap();

    // Trailing junk fails the exact rule: 200, but nothing is removed.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/order/{id}abc"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(get_request(&format!("/api/order/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // An exact id removes the order.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/order/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Order deleted successfully");

    let resp = app
        .oneshot(get_request(&format!("/api/order/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Persistence across restarts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reproduce_items_after_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tuckshop.json");

    let first = app(&path).await;
    for body in [
        r#"{"name":"Tea","price":2}"#,
        r#"{"name":"Bun","price":3}"#,
        r#"{"name":"Pie","price":5}"#,
    ] {
        let resp = first
            .clone()
            .oneshot(json_request("POST", "/api/menu", body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = first.oneshot(get_request("/api/menu")).await.unwrap();
    let before = body_json(resp).await["data"].clone();
    assert_eq!(before.as_array().unwrap().len(), 3);

    // A fresh process incarnation re-reads the same file.
    let second = app(&path).await;
    let resp = second.oneshot(get_request("/api/menu")).await.unwrap();
    let after = body_json(resp).await["data"].clone();

    assert_eq!(after, before);
}
