// crates/core/src/llm/types.rs
//! Request/response/error types for the completion client.

use thiserror::Error;

/// Request for a single-turn completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens: u32,
}

/// Response from a completion call.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Raw text of the first completion choice.
    pub content: String,
    pub latency_ms: u64,
}

/// Errors that can occur during completion calls.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("API credential not set (API_KEY)")]
    MissingApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Api {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "API returned status 429: rate limited");

        let err = LlmError::MalformedResponse("no choices".to_string());
        assert_eq!(err.to_string(), "Malformed response: no choices");

        let err = LlmError::MissingApiKey;
        assert!(err.to_string().contains("API_KEY"));
    }
}
