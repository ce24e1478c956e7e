// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! CORS preflight and bare-OPTIONS tests
//!
//! Both paths must answer OPTIONS with an empty 200: a browser preflight
//! is handled by the CORS layer, a bare OPTIONS by the no-op route handler.
//! Neither touches business logic (no model is loaded in these tests).

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use charactercut_backend::{api::http_server::{create_app, AppState}, config::ServerConfig};
use tower::util::ServiceExt;

fn test_state() -> AppState {
    AppState::new(ServerConfig {
        port: 0,
        environment: "test".to_string(),
        ..ServerConfig::default()
    })
}

async fn send_options(uri: &str, preflight: bool) -> axum::response::Response {
    let app = create_app(test_state());
    let mut builder = Request::builder().method(Method::OPTIONS).uri(uri);
    if preflight {
        builder = builder
            .header("origin", "https://example.com")
            .header("access-control-request-method", "POST");
    }
    let request = builder.body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

#[tokio::test]
async fn test_bare_options_health() {
    let response = send_options("/health", false).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_bare_options_process() {
    let response = send_options("/process", false).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_preflight_process() {
    let response = send_options("/process", true).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let allow_methods = response
        .headers()
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(allow_methods.contains("POST"), "got {:?}", allow_methods);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_preflight_max_age() {
    let response = send_options("/health", true).await;
    assert_eq!(
        response
            .headers()
            .get("access-control-max-age")
            .and_then(|v| v.to_str().ok()),
        Some("86400")
    );
}
