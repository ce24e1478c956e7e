// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Session cache behavior tests
//!
//! A failed load must leave the cache empty so the next request tries
//! again; a successful load must pin one handle for the process lifetime.

use std::io::Write;
use std::sync::Arc;

use charactercut_backend::matting::{MattingError, SessionCache};

const MODEL_PATH: &str = "./models/u2net.onnx";

#[tokio::test]
async fn test_failed_load_leaves_cache_empty_and_retries() {
    let cache = SessionCache::new("/nonexistent/path/u2net.onnx", "u2net");

    let first = cache.get_session().await;
    assert!(matches!(first, Err(MattingError::ModelNotFound(_))));
    assert!(!cache.is_initialized());
    assert_eq!(cache.load_attempts(), 1);

    // A later call attempts the load again rather than caching the failure
    let second = cache.get_session().await;
    assert!(second.is_err());
    assert_eq!(cache.load_attempts(), 2);
}

#[tokio::test]
async fn test_corrupt_model_file_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("u2net.onnx");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"this is not an onnx model").unwrap();

    let cache = SessionCache::new(&path, "u2net");
    let result = cache.get_session().await;
    assert!(matches!(result, Err(MattingError::LoadFailed(_))));
    assert!(!cache.is_initialized());
}

#[tokio::test]
async fn test_concurrent_failing_calls_are_serialized() {
    // The once-cell serializes initialization, so attempts never exceed
    // the number of calls even when they arrive together
    let cache = Arc::new(SessionCache::new("/nonexistent/u2net.onnx", "u2net"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = cache.clone();
            tokio::spawn(async move { cache.get_session().await.is_err() })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap());
    }
    assert!(cache.load_attempts() <= 4);
    assert!(cache.load_attempts() >= 1);
}

#[tokio::test]
#[ignore] // Only run if the u2net model file is downloaded
async fn test_successful_load_is_cached() {
    let cache = SessionCache::new(MODEL_PATH, "u2net");

    let first = cache.get_session().await.expect("model should load");
    let second = cache.get_session().await.expect("cached handle");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.load_attempts(), 1);
    assert!(cache.is_initialized());
}
