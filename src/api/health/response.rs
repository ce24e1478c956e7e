// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::version::{SERVICE_NAME, VERSION};

/// Response body for GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy" (the process answering at all is the check)
    pub status: String,
    /// Wall clock, epoch seconds
    pub timestamp: f64,
    /// Crate version
    pub version: String,
    /// Deployment environment from configuration
    pub environment: String,
    /// Service name constant
    pub service: String,
}

impl HealthResponse {
    pub fn now(environment: &str) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().timestamp_micros() as f64 / 1_000_000.0,
            version: VERSION.to_string(),
            environment: environment.to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}
