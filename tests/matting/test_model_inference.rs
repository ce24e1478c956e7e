// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Model inference tests (require the downloaded u2net model)

use base64::{engine::general_purpose::STANDARD, Engine as _};
use charactercut_backend::matting::{MattingError, MattingModel};
use std::path::Path;

const MODEL_PATH: &str = "./models/u2net.onnx";

/// 1x1 red PNG image (base64)
const TINY_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8DwHwAFBQIAX8jx0gAAAABJRU5ErkJggg==";

#[test]
fn test_load_missing_model() {
    let result = MattingModel::load(Path::new("/nonexistent/u2net.onnx"), "u2net");
    assert!(matches!(result, Err(MattingError::ModelNotFound(_))));
}

#[test]
#[ignore] // Only run if the u2net model file is downloaded
fn test_remove_background_emits_png() {
    let model = MattingModel::load(Path::new(MODEL_PATH), "u2net").unwrap();
    assert_eq!(model.model_name(), "u2net");

    let png = STANDARD.decode(TINY_PNG_BASE64).unwrap();
    let output = model.remove_background(&png).unwrap();

    assert_eq!(&output[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);

    // Output keeps the original dimensions and carries an alpha channel
    let decoded = image::load_from_memory(&output).unwrap();
    assert_eq!(decoded.width(), 1);
    assert_eq!(decoded.height(), 1);
    assert_eq!(decoded.color(), image::ColorType::Rgba8);
}

#[test]
#[ignore] // Only run if the u2net model file is downloaded
fn test_remove_background_rejects_non_image_bytes() {
    let model = MattingModel::load(Path::new(MODEL_PATH), "u2net").unwrap();
    let result = model.remove_background(b"definitely not an image");
    assert!(matches!(result, Err(MattingError::DecodeFailed(_))));
}
