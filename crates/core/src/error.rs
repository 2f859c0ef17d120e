// crates/core/src/error.rs
use thiserror::Error;

use crate::llm::LlmError;

/// Errors that can occur when reading or writing tabular data
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV input has no header row")]
    MissingHeader,
}

/// Errors that can occur during a classification batch
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("Input is missing required column '{name}'")]
    MissingColumn { name: String },

    #[error("Completion failed for row {row}: {source}")]
    Completion {
        row: usize,
        #[source]
        source: LlmError,
    },
}
