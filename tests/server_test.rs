use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use httpmock::prelude::*;
use queue_counter::domain::ports::ShopifyApi;
use queue_counter::{app, AppState, ShopifyClient};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn state_without_credentials() -> AppState {
    AppState::new(None)
}

fn state_backed_by(server: &MockServer) -> AppState {
    let client = ShopifyClient::with_base_url(server.base_url(), "shpat_test_token");
    AppState::new(Some(Arc::new(client) as Arc<dyn ShopifyApi>))
}

async fn body_json(body: Body) -> Value {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_non_get_method_is_rejected() {
    // Method check comes before any configuration check.
    let response = app(state_without_credentials())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/queue")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Method Not Allowed");
}

#[tokio::test]
async fn test_missing_credentials_yield_config_error() {
    let response = app(state_without_credentials())
        .oneshot(
            Request::builder()
                .uri("/api/queue")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response.into_body()).await;
    assert_eq!(body, json!({"error": "missing store credentials"}));
}

#[tokio::test]
async fn test_queue_length_is_reported() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/orders.json");
        then.status(200).json_body(json!({
            "orders": [
                {"id": 1, "line_items": [{"product_id": 10}]},
                {"id": 2, "line_items": [{"product_id": 11}]}
            ]
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/products/10.json");
        then.status(200).json_body(json!({"product": {"tags": "live"}}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/products/11.json");
        then.status(200).json_body(json!({"product": {"tags": "sale"}}));
    });

    let response = app(state_backed_by(&server))
        .oneshot(
            Request::builder()
                .uri("/api/queue")
                .header(header::ORIGIN, "https://dashboard.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
    let body = body_json(response.into_body()).await;
    assert_eq!(body, json!({"queueLength": 1}));
}

#[tokio::test]
async fn test_upstream_failure_yields_generic_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/orders.json");
        then.status(500).body("upstream exploded");
    });

    let response = app(state_backed_by(&server))
        .oneshot(
            Request::builder()
                .uri("/api/queue")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response.into_body()).await;
    assert_eq!(body, json!({"error": "failed to fetch orders or products"}));
}
