// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! u2net matting model wrapper
//!
//! Wraps an ONNX Runtime session executing the pretrained u2net salient
//! object detection model. Runs on CPU only. The session is not assumed
//! re-entrant, so each run takes the session mutex.

use std::path::Path;
use std::sync::{Arc, Mutex};

use ndarray::Array4;
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use tracing::{debug, info};

use super::preprocessing::{self, MATTING_INPUT_SIZE};
use super::{postprocessing, MattingError};

/// Loaded background-removal model
///
/// One instance per process, held by [`super::SessionCache`] and shared
/// across requests behind an `Arc`.
pub struct MattingModel {
    /// ONNX Runtime session (locked per run)
    session: Arc<Mutex<Session>>,
    /// Model input name (u2net uses "input.1")
    input_name: String,
    /// Reported model name
    model_name: String,
}

impl std::fmt::Debug for MattingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MattingModel")
            .field("input_name", &self.input_name)
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl MattingModel {
    /// Load the model from an ONNX file
    pub fn load(model_path: &Path, model_name: &str) -> Result<Self, MattingError> {
        if !model_path.exists() {
            return Err(MattingError::ModelNotFound(
                model_path.display().to_string(),
            ));
        }

        let session = Session::builder()
            .map_err(|e| MattingError::LoadFailed(e.to_string()))?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .map_err(|e| MattingError::LoadFailed(e.to_string()))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| MattingError::LoadFailed(e.to_string()))?
            .with_intra_threads(4)
            .map_err(|e| MattingError::LoadFailed(e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| {
                MattingError::LoadFailed(format!("{}: {}", model_path.display(), e))
            })?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .unwrap_or_else(|| "input.1".to_string());

        debug!("Matting model input: {}", input_name);
        info!("✅ Matting model '{}' loaded (CPU-only)", model_name);

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            input_name,
            model_name: model_name.to_string(),
        })
    }

    /// Reported model name
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Remove the background from raw image bytes
    ///
    /// Decodes the bytes (PNG, JPEG, WebP, GIF, ...), runs the model,
    /// applies the predicted mask as the alpha channel, and returns
    /// PNG-encoded RGBA bytes at the original dimensions.
    pub fn remove_background(&self, bytes: &[u8]) -> Result<Vec<u8>, MattingError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| MattingError::DecodeFailed(e.to_string()))?;

        let input = preprocessing::preprocess(&image);
        let raw_mask = self.run_mask(input)?;
        let mask = postprocessing::normalize_mask(&raw_mask);

        postprocessing::apply_mask(&image, &mask, MATTING_INPUT_SIZE, MATTING_INPUT_SIZE)
    }

    /// Run the model on a preprocessed [1, 3, 320, 320] tensor and return
    /// the fused prediction (first output, d0) as a flat f32 buffer
    fn run_mask(&self, input: Array4<f32>) -> Result<Vec<f32>, MattingError> {
        let mut session = self.session.lock().unwrap();

        let input_value = Value::from_array(input)
            .map_err(|e| MattingError::InferenceFailed(e.to_string()))?;

        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => input_value])
            .map_err(|e| MattingError::InferenceFailed(e.to_string()))?;

        // u2net emits seven side outputs; the first is the refined prediction
        let output_tensor = outputs[0]
            .try_extract_array::<f32>()
            .map_err(|e| MattingError::InferenceFailed(e.to_string()))?;

        Ok(output_tensor.iter().copied().collect())
    }
}
