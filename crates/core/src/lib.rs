// crates/core/src/lib.rs
//! Core library for icd-tagger: the tabular dataset model, the ICD-10
//! classification prompt, the sequential batch classifier, and the
//! completion-provider abstraction it calls through.

pub mod classifier;
pub mod dataset;
pub mod error;
pub mod llm;
pub mod prompt;

pub use classifier::{BatchClassifier, CONDITION_COLUMN, RESULT_COLUMN};
pub use dataset::Dataset;
pub use error::{ClassifyError, DatasetError};
pub use prompt::build_classification_prompt;
