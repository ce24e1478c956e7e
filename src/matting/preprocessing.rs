// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image preprocessing for the u2net matting model

use image::DynamicImage;
use ndarray::Array4;

/// Input size for the u2net model (square)
pub const MATTING_INPUT_SIZE: u32 = 320;

/// Mean values for normalization (ImageNet)
pub const MEAN: [f32; 3] = [0.485, 0.456, 0.406];

/// Std values for normalization (ImageNet)
pub const STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Preprocess an image for matting inference
///
/// Steps:
/// 1. Resize to MATTING_INPUT_SIZE x MATTING_INPUT_SIZE (u2net takes a fixed
///    square input; the mask is resized back to the original dimensions in
///    postprocessing)
/// 2. Convert to RGB
/// 3. Normalize with ImageNet mean/std: (pixel/255 - mean) / std
/// 4. Convert to NCHW tensor format [1, 3, H, W]
pub fn preprocess(image: &DynamicImage) -> Array4<f32> {
    let resized = image.resize_exact(
        MATTING_INPUT_SIZE,
        MATTING_INPUT_SIZE,
        image::imageops::FilterType::Lanczos3,
    );
    let rgb = resized.to_rgb8();

    let size = MATTING_INPUT_SIZE as usize;
    let mut tensor = Array4::zeros((1, 3, size, size));

    for y in 0..size {
        for x in 0..size {
            let pixel = rgb.get_pixel(x as u32, y as u32);
            for c in 0..3 {
                let normalized = (pixel[c] as f32 / 255.0 - MEAN[c]) / STD[c];
                tensor[[0, c, y, x]] = normalized;
            }
        }
    }

    tensor
}
