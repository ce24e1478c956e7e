// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::env;

use anyhow::Result;
use charactercut_backend::{
    api::http_server::{start_server, AppState},
    config::ServerConfig,
    version,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    tracing::info!("🚀 Starting {}", version::get_version_string());

    let config = ServerConfig::from_env();
    tracing::info!(
        "Model: {} ({}), environment: {}",
        config.model_name,
        config.model_path,
        config.environment
    );

    // The model itself loads lazily on the first /process request
    let state = AppState::new(config);

    start_server(state).await
}
