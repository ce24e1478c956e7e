// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Server configuration from environment variables

use std::env;

/// Runtime configuration for the backend
///
/// Read once at startup; `.env` files are honored via `dotenv` in `main`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port (`API_PORT`)
    pub port: u16,
    /// Path to the ONNX model file (`MODEL_PATH`)
    pub model_path: String,
    /// Model name reported in responses (`MODEL_NAME`)
    pub model_name: String,
    /// Deployment environment reported by /health (`ENVIRONMENT`)
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            model_path: "./models/u2net.onnx".to_string(),
            model_name: "u2net".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl ServerConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            model_path: env::var("MODEL_PATH").unwrap_or(defaults.model_path),
            model_name: env::var("MODEL_NAME").unwrap_or(defaults.model_name),
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }
}
