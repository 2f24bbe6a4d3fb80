//! End-to-end smoke tests for the full devicesd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`: no TCP port is bound.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use devices_adapter_http_axum::router;
use devices_adapter_http_axum::state::AppState;
use devices_adapter_storage_sqlite_sqlx::{Config, SqliteDeviceRepository};
use devices_app::services::device_service::DeviceService;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let device_repo = SqliteDeviceRepository::new(db.pool().clone());
    router::build(AppState::new(DeviceService::new(device_repo)))
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> Response {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn send_empty(app: &Router, method: &str, uri: &str) -> Response {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create(app: &Router, name: &str, brand: &str, state: &str) -> Value {
    let response = send_json(
        app,
        "POST",
        "/api/devices",
        json!({ "name": name, "brand": brand, "state": state }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = app().await;
    let resp = send_empty(&app, "GET", "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Devices
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_created_device_unchanged_on_get() {
    let app = app().await;
    let created = create(&app, "Laptop", "Acme", "AVAILABLE").await;
    let id = created["id"].as_i64().unwrap();

    let resp = send_empty(&app, "GET", &format!("/api/devices/{id}")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, created);
}

#[tokio::test]
async fn should_walk_through_in_use_lifecycle() {
    let app = app().await;
    let created = create(&app, "Laptop", "Acme", "AVAILABLE").await;
    let uri = format!("/api/devices/{}", created["id"]);

    let resp = send_json(&app, "PATCH", &uri, json!({ "state": "IN_USE" })).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send_json(&app, "PATCH", &uri, json!({ "name": "Tablet" })).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = send_json(&app, "PATCH", &uri, json!({ "name": "Laptop" })).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send_json(&app, "PATCH", &uri, json!({ "state": "AVAILABLE" })).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send_json(&app, "PATCH", &uri, json!({ "name": "Tablet" })).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["name"], "Tablet");
    assert_eq!(updated["brand"], "Acme");
    assert_eq!(updated["state"], "AVAILABLE");
    assert_eq!(updated["creationTime"], created["creationTime"]);
}

#[tokio::test]
async fn should_reject_delete_while_in_use_then_allow_after_release() {
    let app = app().await;
    let created = create(&app, "Phone", "Acme", "IN_USE").await;
    let uri = format!("/api/devices/{}", created["id"]);

    let resp = send_empty(&app, "DELETE", &uri).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(resp).await["message"],
        "cannot delete a device that is in use"
    );

    let resp = send_json(&app, "PATCH", &uri, json!({ "state": "INACTIVE" })).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send_empty(&app, "DELETE", &uri).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send_empty(&app, "GET", &uri).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_when_deleting_missing_device() {
    let app = app().await;
    let resp = send_empty(&app, "DELETE", "/api/devices/12345").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_filter_by_exact_brand() {
    let app = app().await;
    let acme = create(&app, "Laptop", "Acme", "AVAILABLE").await;
    create(&app, "Phone", "acme", "AVAILABLE").await;
    create(&app, "Tablet", "Acme Inc", "AVAILABLE").await;

    let resp = send_empty(&app, "GET", "/api/devices?brand=Acme").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([acme]));
}

#[tokio::test]
async fn should_filter_by_state_and_list_all() {
    let app = app().await;
    create(&app, "Laptop", "Acme", "AVAILABLE").await;
    let busy = create(&app, "Phone", "Acme", "IN_USE").await;
    create(&app, "Tablet", "Acme", "INACTIVE").await;

    let resp = send_empty(&app, "GET", "/api/devices?state=IN_USE").await;
    assert_eq!(body_json(resp).await, json!([busy]));

    let resp = send_empty(&app, "GET", "/api/devices").await;
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn should_return_bad_request_when_create_missing_fields() {
    let app = app().await;
    let resp = send_json(&app, "POST", "/api/devices", json!({ "name": "Laptop" })).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["code"], "BAD_REQUEST");

    let resp = send_empty(&app, "GET", "/api/devices").await;
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn should_return_bad_request_when_body_is_not_json() {
    let app = app().await;
    let resp = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/api/devices")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
