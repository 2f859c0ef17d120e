// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::{Arc, RwLock};
use std::time::Instant;

use icd_tagger_core::{BatchClassifier, Dataset};

use crate::classify_state::ClassifyState;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// Batch classifier; its provider handle is stateless across calls.
    pub classifier: BatchClassifier,
    /// Progress of the current classification run.
    pub classify: Arc<ClassifyState>,
    /// Enriched dataset from the last completed run, serialized on download.
    /// `None` until a run completes; replaced by the next run.
    pub result: RwLock<Option<Dataset>>,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(classifier: BatchClassifier) -> Arc<Self> {
        Arc::new(Self {
            start_time: Instant::now(),
            classifier,
            classify: Arc::new(ClassifyState::new()),
            result: RwLock::new(None),
        })
    }

    /// Get the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Store the enriched dataset of a completed run.
    pub fn store_result(&self, dataset: Dataset) {
        if let Ok(mut guard) = self.result.write() {
            *guard = Some(dataset);
        }
    }

    /// Get a copy of the last completed run's dataset, if any.
    pub fn last_result(&self) -> Option<Dataset> {
        self.result.read().ok().and_then(|g| g.clone())
    }
}
