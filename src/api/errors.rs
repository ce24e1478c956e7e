// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// JSON body returned for every error status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub detail: String,
    pub timestamp: String,
    pub status: String,
}

/// API error taxonomy
///
/// Client input problems map to 400, model/inference failures to 503, and
/// anything uncategorized to 500. None of these are retried internally.
#[derive(Debug, Clone)]
pub enum ApiError {
    InvalidRequest(String),
    InferenceFailed(String),
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_) => 400,
            ApiError::InferenceFailed(_) => 503,
            ApiError::Internal(_) => 500,
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        let detail = match self {
            ApiError::InvalidRequest(msg) => msg.clone(),
            ApiError::InferenceFailed(msg) => msg.clone(),
            ApiError::Internal(msg) => msg.clone(),
        };

        ErrorBody {
            detail,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            status: "error".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::InferenceFailed(msg) => write!(f, "Inference failed: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.to_body())).into_response()
    }
}
