// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Process-wide matting session cache
//!
//! The model takes noticeable time to load, so it is loaded once on first
//! use and the handle is reused for the lifetime of the process. Concurrent
//! first calls coalesce into a single load through the once-cell.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{error, info};

use super::{MattingError, MattingModel};

/// Lazily-initialized, process-lifetime holder for the matting model
///
/// A failed load leaves the cell empty, so the next request attempts the
/// load again. If the failure cause is environmental (missing model file)
/// every request fails until the process is restarted with it fixed; there
/// is no retry or backoff within a request.
pub struct SessionCache {
    cell: OnceCell<Arc<MattingModel>>,
    load_attempts: AtomicUsize,
    model_path: PathBuf,
    model_name: String,
}

impl SessionCache {
    pub fn new(model_path: impl Into<PathBuf>, model_name: impl Into<String>) -> Self {
        Self {
            cell: OnceCell::new(),
            load_attempts: AtomicUsize::new(0),
            model_path: model_path.into(),
            model_name: model_name.into(),
        }
    }

    /// Get the cached session, loading the model on first use
    ///
    /// Every call after a successful load returns the same `Arc` without
    /// touching the filesystem.
    pub async fn get_session(&self) -> Result<Arc<MattingModel>, MattingError> {
        self.cell
            .get_or_try_init(|| async {
                self.load_attempts.fetch_add(1, Ordering::SeqCst);
                info!(
                    "Initializing matting session with {} model from {}",
                    self.model_name,
                    self.model_path.display()
                );

                match MattingModel::load(&self.model_path, &self.model_name) {
                    Ok(model) => Ok(Arc::new(model)),
                    Err(e) => {
                        error!("Failed to initialize matting session: {}", e);
                        Err(e)
                    }
                }
            })
            .await
            .cloned()
    }

    /// Number of load attempts so far (successful or not)
    pub fn load_attempts(&self) -> usize {
        self.load_attempts.load(Ordering::SeqCst)
    }

    /// Whether a model is currently loaded
    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }
}

impl std::fmt::Debug for SessionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCache")
            .field("model_path", &self.model_path)
            .field("model_name", &self.model_name)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
