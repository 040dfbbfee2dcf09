// Each integration test binary compiles this module separately, so not
// every helper is used by every binary.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pitchside_api::config::ServerConfig;
use pitchside_api::router::build_app_router;
use pitchside_api::state::AppState;
use pitchside_core::device_store::DeviceStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(device_store_dir: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        device_store_dir: device_store_dir.to_string(),
    }
}

/// Build the full application router with all middleware layers.
///
/// Uses a lazily-connecting pool so no PostgreSQL server is needed: these
/// tests only exercise routes that never reach the database. The returned
/// `TempDir` keeps the device-store directory alive for the test's duration.
pub fn build_test_app() -> (Router, tempfile::TempDir) {
    let store_dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(store_dir.path().to_str().expect("utf-8 path"));

    let pool = pitchside_db::create_lazy_pool("postgres://localhost:1/pitchside_test")
        .expect("lazy pool");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        device_store: Arc::new(DeviceStore::new(store_dir.path())),
    };

    (build_app_router(state, &config), store_dir)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a request with a JSON body against the app.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a response is a `{error, code}` rejection with the given status.
pub async fn assert_error(response: Response<Body>, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code, "unexpected error body: {json}");
    assert!(json["error"].is_string());
}
