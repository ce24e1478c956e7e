// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use chrono::{Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response body for a successful POST /process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Correlation id for this request (also used in logs)
    pub processing_id: Uuid,
    /// Fresh id unrelated to the cached inference session
    pub session_id: Uuid,
    /// `data:image/png;base64,...` URL embedding the result inline
    pub download_url: String,
    /// Elapsed processing time in seconds
    pub processing_time: f64,
    /// Advisory expiry one hour out. Nothing stores the result, so nothing
    /// enforces this; clients treat it as a hint only.
    pub expires_at: String,
    /// Model that produced the result
    pub model: String,
    /// Always "completed"
    pub status: String,
}

impl ProcessResponse {
    pub fn new(
        processing_id: Uuid,
        download_url: String,
        processing_time: f64,
        model: &str,
    ) -> Self {
        Self {
            processing_id,
            session_id: Uuid::new_v4(),
            download_url,
            processing_time,
            expires_at: (Utc::now() + Duration::hours(1))
                .to_rfc3339_opts(SecondsFormat::Micros, true),
            model: model.to_string(),
            status: "completed".to_string(),
        }
    }
}
