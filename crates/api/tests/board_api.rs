//! Integration tests for the device-store board endpoints.
//!
//! The opponent-marker and annotation-line saves never touch the database,
//! so these run against a lazily-connecting pool with no server behind it.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{assert_error, build_test_app, send_json};
use pitchside_core::board::StoredOpponent;
use pitchside_core::device_store::{DeviceStore, OPPONENTS_KEY, SAVED_LINES_KEY};
use pitchside_core::drawing::AnnotationLine;

// ---------------------------------------------------------------------------
// Test: PUT /api/v1/board/opponents persists valid markers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn save_opponents_writes_device_store() {
    let (app, store_dir) = build_test_app();

    let body = json!([
        { "id": 1, "pos_top": "25%", "pos_left": "20%" },
        { "id": 2, "pos_top": "25%", "pos_left": "40%" }
    ]);
    let response = send_json(app, Method::PUT, "/api/v1/board/opponents", body).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let store = DeviceStore::new(store_dir.path());
    let saved: Vec<StoredOpponent> = store
        .get(OPPONENTS_KEY)
        .expect("store readable")
        .expect("key written");
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].pos_left, "20%");
}

// ---------------------------------------------------------------------------
// Test: PUT /api/v1/board/opponents rejects malformed coordinates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn save_opponents_rejects_bad_percentage() {
    let (app, store_dir) = build_test_app();

    let body = json!([{ "id": 1, "pos_top": "up a bit", "pos_left": "20%" }]);
    let response = send_json(app, Method::PUT, "/api/v1/board/opponents", body).await;

    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;

    // Nothing was written.
    let store = DeviceStore::new(store_dir.path());
    let saved: Option<Vec<StoredOpponent>> = store.get(OPPONENTS_KEY).expect("store readable");
    assert!(saved.is_none());
}

// ---------------------------------------------------------------------------
// Test: PUT /api/v1/board/opponents rejects non-finite coordinates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn save_opponents_rejects_non_finite_percentage() {
    let (app, store_dir) = build_test_app();

    let body = json!([{ "id": 1, "pos_top": "NaN", "pos_left": "20%" }]);
    let response = send_json(app, Method::PUT, "/api/v1/board/opponents", body).await;

    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;

    let store = DeviceStore::new(store_dir.path());
    let saved: Option<Vec<StoredOpponent>> = store.get(OPPONENTS_KEY).expect("store readable");
    assert!(saved.is_none());
}

// ---------------------------------------------------------------------------
// Test: PUT /api/v1/board/lines persists valid lines
// ---------------------------------------------------------------------------

#[tokio::test]
async fn save_lines_writes_device_store() {
    let (app, store_dir) = build_test_app();

    let body = json!([{
        "id": 1,
        "points": [ { "x": 10.0, "y": 10.0 }, { "x": 40.0, "y": 55.0 } ],
        "color": "#ff4444",
        "width": 3.0
    }]);
    let response = send_json(app, Method::PUT, "/api/v1/board/lines", body).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let store = DeviceStore::new(store_dir.path());
    let saved: Vec<AnnotationLine> = store
        .get(SAVED_LINES_KEY)
        .expect("store readable")
        .expect("key written");
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].points.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: PUT /api/v1/board/lines rejects a single-point line
// ---------------------------------------------------------------------------

#[tokio::test]
async fn save_lines_rejects_single_point_line() {
    let (app, _store_dir) = build_test_app();

    let body = json!([{
        "id": 1,
        "points": [ { "x": 10.0, "y": 10.0 } ],
        "color": "#ff4444",
        "width": 3.0
    }]);
    let response = send_json(app, Method::PUT, "/api/v1/board/lines", body).await;

    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

// ---------------------------------------------------------------------------
// Test: PUT /api/v1/board/lines rejects out-of-range stroke width
// ---------------------------------------------------------------------------

#[tokio::test]
async fn save_lines_rejects_bad_stroke_width() {
    let (app, _store_dir) = build_test_app();

    let body = json!([{
        "id": 1,
        "points": [ { "x": 0.0, "y": 0.0 }, { "x": 5.0, "y": 5.0 } ],
        "color": "#ff4444",
        "width": 50.0
    }]);
    let response = send_json(app, Method::PUT, "/api/v1/board/lines", body).await;

    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}
