//! Router-level tests for the `/artists` endpoints.
//!
//! These drive the full axum router against in-memory repositories, so no
//! Postgres instance is required.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use api::{router, AppState};
use db::repository::memory::{InMemoryArtistRepository, InMemoryReviewRepository};

fn app() -> Router {
    let state = AppState::with_repositories(
        Arc::new(InMemoryArtistRepository::new()),
        Arc::new(InMemoryReviewRepository::new()),
    );
    router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn create_get_delete_scenario() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/artists",
        Some(json!({"name": "Miles", "genre": "Jazz"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created,
        json!({"id": 1, "name": "Miles", "genre": "Jazz", "biography": null})
    );

    let (status, fetched) = send(&app, Method::GET, "/artists/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, body) = send(&app, Method::DELETE, "/artists/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, "/artists/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting again succeeds identically.
    let (status, _) = send(&app, Method::DELETE, "/artists/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn get_unknown_id_names_the_resource() {
    let (status, body) = send(&app(), Method::GET, "/artists/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "artist with id 99 not found"}));
}

#[tokio::test]
async fn list_returns_every_artist() {
    let app = app();
    send(&app, Method::POST, "/artists", Some(json!({"name": "Miles"}))).await;
    send(
        &app,
        Method::POST,
        "/artists",
        Some(json!({"name": "Coltrane"})),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/artists", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn blank_name_is_rejected_before_the_service() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/artists",
        Some(json!({"name": "   "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"errors": ["name must not be blank"]}));

    // Nothing was created.
    let (_, all) = send(&app, Method::GET, "/artists", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn missing_name_field_is_a_400() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/artists",
        Some(json!({"genre": "Jazz"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("errors").is_some());
}

#[tokio::test]
async fn update_overwrites_fields_and_preserves_the_id() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/artists",
        Some(json!({"name": "Miles", "genre": "Jazz", "biography": "Trumpeter."})),
    )
    .await;

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/artists/1",
        Some(json!({"name": "Miles Davis", "genre": "Fusion"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({"id": 1, "name": "Miles Davis", "genre": "Fusion", "biography": null})
    );
}

#[tokio::test]
async fn update_unknown_id_is_a_404() {
    let (status, _) = send(
        &app(),
        Method::PUT,
        "/artists/5",
        Some(json!({"name": "Miles"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_with_invalid_input_is_a_400() {
    let app = app();
    send(&app, Method::POST, "/artists", Some(json!({"name": "Miles"}))).await;

    let (status, _) = send(&app, Method::PUT, "/artists/1", Some(json!({"name": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
