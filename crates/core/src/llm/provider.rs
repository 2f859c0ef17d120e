// crates/core/src/llm/provider.rs
//! CompletionProvider trait defining the interface for completion backends.

use async_trait::async_trait;

use super::types::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for text-completion backends.
///
/// Implementations include:
/// - `TogetherProvider` — hosted chat-completions HTTP API
/// - Test stubs returning canned responses
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run a single-turn completion for the given prompt.
    ///
    /// One outbound call per invocation: no retries, no streaming, no
    /// multi-turn history.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// Provider name for logging/display (e.g. "together").
    fn name(&self) -> &str;

    /// Model identifier sent with every request.
    fn model(&self) -> &str;
}
