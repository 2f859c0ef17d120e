// crates/server/src/classify_state.rs
//! Lock-free atomic state for classification progress tracking.
//!
//! Read by the status endpoint while an upload is being processed, so the
//! page can narrate progress without blocking the running batch.

use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::RwLock;

/// Status of the current classification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ClassifyStatus {
    Idle = 0,
    Running = 1,
    Completed = 2,
    Failed = 3,
}

impl ClassifyStatus {
    pub fn from_u8(v: u8) -> Self {
        match v {
            1 => Self::Running,
            2 => Self::Completed,
            3 => Self::Failed,
            _ => Self::Idle,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

/// Progress of the current run.
///
/// Numeric fields use atomics for wait-free reads from the status handler;
/// only the error message sits behind a lock.
pub struct ClassifyState {
    status: AtomicU8,
    total: AtomicU64,
    classified: AtomicU64,
    error_message: RwLock<Option<String>>,
}

impl ClassifyState {
    /// Create a new idle state.
    pub fn new() -> Self {
        Self {
            status: AtomicU8::new(ClassifyStatus::Idle as u8),
            total: AtomicU64::new(0),
            classified: AtomicU64::new(0),
            error_message: RwLock::new(None),
        }
    }

    /// Get the current status.
    pub fn status(&self) -> ClassifyStatus {
        ClassifyStatus::from_u8(self.status.load(Ordering::Relaxed))
    }

    /// Get the total number of rows in the current run.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// Get the number of rows classified so far.
    pub fn classified(&self) -> u64 {
        self.classified.load(Ordering::Relaxed)
    }

    /// Get the error message of a failed run.
    pub fn error_message(&self) -> Option<String> {
        self.error_message.read().ok().and_then(|g| g.clone())
    }

    /// Transition to running state for a batch of `total` rows.
    pub fn set_running(&self, total: u64) {
        self.status
            .store(ClassifyStatus::Running as u8, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
        self.classified.store(0, Ordering::Relaxed);
        if let Ok(mut guard) = self.error_message.write() {
            *guard = None;
        }
    }

    /// Record that `count` rows are done.
    pub fn set_classified(&self, count: u64) {
        self.classified.store(count, Ordering::Relaxed);
    }

    /// Mark the run as completed.
    pub fn set_completed(&self) {
        self.status
            .store(ClassifyStatus::Completed as u8, Ordering::Relaxed);
    }

    /// Mark the run as failed.
    pub fn set_failed(&self, message: String) {
        self.status
            .store(ClassifyStatus::Failed as u8, Ordering::Relaxed);
        if let Ok(mut guard) = self.error_message.write() {
            *guard = Some(message);
        }
    }
}

impl Default for ClassifyState {
    fn default() -> Self {
        Self::new()
    }
}
