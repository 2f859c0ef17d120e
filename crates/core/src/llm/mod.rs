// crates/core/src/llm/mod.rs
//! LLM integration for condition classification.
//!
//! Provides the `CompletionProvider` trait, the configuration handed to the
//! batch classifier, and the Together chat-completions client.

pub mod config;
pub mod provider;
pub mod together;
pub mod types;

pub use config::ClassifierConfig;
pub use provider::CompletionProvider;
pub use together::TogetherProvider;
pub use types::{CompletionRequest, CompletionResponse, LlmError};
