// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Process endpoint handler

use std::time::Instant;

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;
use axum_extra::extract::multipart::{Multipart, MultipartRejection};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::response::ProcessResponse;
use super::MAX_UPLOAD_BYTES;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /process - remove the background from an uploaded image
///
/// Expects a `multipart/form-data` body with a non-empty `file` field.
/// Returns the processed image inline as a `data:image/png;base64,...` URL.
///
/// # Errors
/// - 400: wrong content type, payload over 10 MiB, missing or empty file
/// - 503: model load or inference failure
/// - 500: anything uncategorized
pub async fn process_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let start_time = Instant::now();
    let processing_id = Uuid::new_v4();

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !content_type.starts_with("multipart/form-data") {
        warn!("[{}] Rejected content type: {:?}", processing_id, content_type);
        return Err(ApiError::InvalidRequest(
            "Content-Type must be multipart/form-data".to_string(),
        ));
    }

    // Declared-length check first; the read bytes are re-validated below
    // since clients control this header
    let content_length = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);
    if content_length > MAX_UPLOAD_BYTES as u64 {
        warn!(
            "[{}] Rejected oversized upload: {} declared bytes",
            processing_id, content_length
        );
        return Err(ApiError::InvalidRequest(
            "File too large. Maximum size is 10MB.".to_string(),
        ));
    }

    let mut multipart = multipart.map_err(|e| {
        warn!("[{}] Unreadable multipart body: {}", processing_id, e);
        ApiError::InvalidRequest(format!("Invalid form data: {}", e))
    })?;

    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidRequest(format!("Invalid form data: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("unknown").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::InvalidRequest(format!("Invalid form data: {}", e)))?;
        upload = Some((filename, data.to_vec()));
        break;
    }

    let (filename, image_data) =
        upload.ok_or_else(|| ApiError::InvalidRequest("No file provided".to_string()))?;

    if image_data.is_empty() {
        return Err(ApiError::InvalidRequest("Invalid file".to_string()));
    }
    if image_data.len() > MAX_UPLOAD_BYTES {
        warn!(
            "[{}] Rejected oversized upload: {} actual bytes",
            processing_id,
            image_data.len()
        );
        return Err(ApiError::InvalidRequest(
            "File too large. Maximum size is 10MB.".to_string(),
        ));
    }

    info!(
        "[{}] Processing image: {}, size: {} bytes",
        processing_id,
        filename,
        image_data.len()
    );

    let session = state.session_cache.get_session().await.map_err(|e| {
        error!("[{}] Matting session unavailable: {}", processing_id, e);
        ApiError::InferenceFailed(format!("Background removal failed: {}", e))
    })?;

    let processed_bytes = session.remove_background(&image_data).map_err(|e| {
        let elapsed = start_time.elapsed().as_secs_f64();
        error!(
            "[{}] Background removal failed after {:.2}s: {}",
            processing_id, elapsed, e
        );
        ApiError::InferenceFailed(format!("Background removal failed: {}", e))
    })?;

    let processing_time = start_time.elapsed().as_secs_f64();
    let download_url = format!(
        "data:image/png;base64,{}",
        STANDARD.encode(&processed_bytes)
    );

    info!(
        "[{}] Successfully processed in {:.2}s",
        processing_id, processing_time
    );

    Ok(Json(ProcessResponse::new(
        processing_id,
        download_url,
        processing_time,
        &state.config.model_name,
    )))
}
