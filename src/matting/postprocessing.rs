// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Mask postprocessing: probability normalization and alpha application

use std::io::Cursor;

use image::{imageops, DynamicImage, GrayImage, ImageFormat};

use super::MattingError;

/// Min-max normalize raw model output into [0, 1] probabilities
///
/// u2net emits unbounded activations; they are rescaled over the observed
/// range before use as a mask. A flat output maps to all zeros.
pub fn normalize_mask(values: &[f32]) -> Vec<f32> {
    let (min_val, max_val) = values
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    let range = max_val - min_val;
    if values.is_empty() || range <= f32::EPSILON {
        return vec![0.0; values.len()];
    }

    values.iter().map(|&v| (v - min_val) / range).collect()
}

/// Apply a foreground-probability mask as the alpha channel of the original
/// image and encode the result as PNG bytes
///
/// The mask is resized from model resolution to the original dimensions.
/// Existing alpha is preserved: output alpha = original alpha * mask.
pub fn apply_mask(
    original: &DynamicImage,
    mask: &[f32],
    mask_w: u32,
    mask_h: u32,
) -> Result<Vec<u8>, MattingError> {
    if mask.len() != (mask_w * mask_h) as usize {
        return Err(MattingError::InferenceFailed(format!(
            "mask has {} values, expected {}x{}",
            mask.len(),
            mask_w,
            mask_h
        )));
    }

    let mask_pixels: Vec<u8> = mask
        .iter()
        .map(|&p| (p.clamp(0.0, 1.0) * 255.0) as u8)
        .collect();
    let mask_img = GrayImage::from_raw(mask_w, mask_h, mask_pixels)
        .unwrap_or_else(|| GrayImage::new(mask_w, mask_h));

    let (orig_w, orig_h) = (original.width(), original.height());
    let resized_mask = if mask_w != orig_w || mask_h != orig_h {
        imageops::resize(&mask_img, orig_w, orig_h, imageops::FilterType::Lanczos3)
    } else {
        mask_img
    };

    let mut output = original.to_rgba8();
    for (x, y, pixel) in output.enumerate_pixels_mut() {
        let mask_alpha = resized_mask.get_pixel(x, y)[0] as f32 / 255.0;
        let orig_alpha = pixel[3] as f32 / 255.0;
        pixel[3] = (orig_alpha * mask_alpha * 255.0).clamp(0.0, 255.0) as u8;
    }

    let mut buffer = Vec::new();
    DynamicImage::ImageRgba8(output)
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|e| MattingError::EncodeFailed(e.to_string()))?;

    Ok(buffer)
}
