// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod health;
pub mod http_server;
pub mod process;

pub use errors::{ApiError, ErrorBody};
pub use health::{health_handler, HealthResponse};
pub use http_server::{create_app, start_server, AppState};
pub use process::{process_handler, ProcessResponse};
