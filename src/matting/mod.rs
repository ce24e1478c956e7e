// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Background removal (matting) via a pretrained u2net ONNX model.
//!
//! The model itself is an opaque capability: bytes in, PNG-with-transparency
//! out. This module supplies the plumbing around it — image decode, tensor
//! layout, mask-to-alpha application, PNG encode — plus the process-wide
//! session cache that keeps the loaded model alive across requests.

pub mod model;
pub mod postprocessing;
pub mod preprocessing;
pub mod session_cache;

pub use model::MattingModel;
pub use session_cache::SessionCache;

use thiserror::Error;

/// Errors from model loading and background removal
#[derive(Debug, Error)]
pub enum MattingError {
    #[error("Model file not found: {0}")]
    ModelNotFound(String),

    #[error("Model initialization failed: {0}")]
    LoadFailed(String),

    #[error("Failed to decode image: {0}")]
    DecodeFailed(String),

    #[error("Inference failed: {0}")]
    InferenceFailed(String),

    #[error("Failed to encode result: {0}")]
    EncodeFailed(String),
}
