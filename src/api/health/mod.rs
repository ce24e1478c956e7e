// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Health check endpoint (GET /health)

pub mod handler;
pub mod response;

pub use handler::health_handler;
pub use response::HealthResponse;
