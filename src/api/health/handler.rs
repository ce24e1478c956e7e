// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Health endpoint handler

use axum::extract::State;
use axum::Json;

use super::response::HealthResponse;
use crate::api::http_server::AppState;

/// GET /health - static status report
///
/// Never touches the matting model; a cold process answers just as fast as
/// a warm one. No failure modes.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::now(&state.config.environment))
}
