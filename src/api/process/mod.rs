// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Image processing endpoint (POST /process)
//!
//! Accepts a multipart upload, runs background removal through the cached
//! matting session, and returns the result as a base64 data URL.

pub mod handler;
pub mod response;

pub use handler::process_handler;
pub use response::ProcessResponse;

/// Upload ceiling (10 MiB), checked against both the declared
/// Content-Length header and the bytes actually read
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
