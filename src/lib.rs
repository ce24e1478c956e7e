// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod matting;
pub mod version;

// Re-export main types
pub use api::{ApiError, AppState, ErrorBody, HealthResponse, ProcessResponse};
pub use config::ServerConfig;
pub use matting::{MattingError, MattingModel, SessionCache};
