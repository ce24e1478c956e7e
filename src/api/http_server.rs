// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server wiring: application state, router, CORS, and startup

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::health::health_handler;
use super::process::{process_handler, MAX_UPLOAD_BYTES};
use crate::config::ServerConfig;
use crate::matting::SessionCache;

/// Headroom over the upload ceiling for multipart boundary/header overhead.
/// The 10 MiB policy itself is enforced in the process handler.
const BODY_LIMIT_BYTES: usize = MAX_UPLOAD_BYTES + 1024 * 1024;

/// Shared application state (cheap to clone, Arc fields)
#[derive(Clone)]
pub struct AppState {
    pub session_cache: Arc<SessionCache>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let session_cache = SessionCache::new(&config.model_path, &config.model_name);
        Self {
            session_cache: Arc::new(session_cache),
            config: Arc::new(config),
        }
    }
}

/// Build the application router
///
/// Browser preflights are answered by the CORS layer; a bare OPTIONS
/// without preflight headers falls through to the explicit no-op handler,
/// so both paths always answer OPTIONS with an empty 200.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(86400));

    Router::new()
        .route("/health", get(health_handler).options(options_handler))
        .route("/process", post(process_handler).options(options_handler))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn options_handler() -> StatusCode {
    StatusCode::OK
}

/// Bind and serve until the process exits
pub async fn start_server(state: AppState) -> Result<()> {
    let port = state.config.port;
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
