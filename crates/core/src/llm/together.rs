// crates/core/src/llm/together.rs
//! Together chat-completions provider.
//!
//! Submits `{model, messages, max_tokens}` to `POST {endpoint}/chat/completions`
//! with bearer auth and extracts the first choice's message content.

use async_trait::async_trait;
use serde_json::json;

use super::config::ClassifierConfig;
use super::provider::CompletionProvider;
use super::types::{CompletionRequest, CompletionResponse, LlmError};

/// Completion provider backed by the Together chat-completions API.
///
/// One user-role message per request. The client handle is stateless across
/// calls; reqwest's default timeout policy applies.
pub struct TogetherProvider {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl TogetherProvider {
    /// Create a provider from the given configuration.
    ///
    /// A missing credential is not an error here; the first `complete`
    /// call reports it.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }
}

#[async_trait]
impl CompletionProvider for TogetherProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;
        let start = std::time::Instant::now();

        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": request.prompt }],
            "max_tokens": request.max_tokens,
        });

        tracing::debug!(
            model = %self.model,
            max_tokens = request.max_tokens,
            prompt_len = request.prompt.len(),
            "chat completion: sending"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "chat completion: API error");
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        let content = parsed["choices"]
            .get(0)
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| {
                LlmError::MalformedResponse("no message content in first choice".to_string())
            })?;

        let latency_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(latency_ms, content_len = content.len(), "chat completion: response received");

        Ok(CompletionResponse {
            content: content.to_string(),
            latency_ms,
        })
    }

    fn name(&self) -> &str {
        "together"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn test_config(endpoint: String) -> ClassifierConfig {
        ClassifierConfig {
            api_key: Some("test-key".to_string()),
            endpoint,
            model: "test-model".to_string(),
            ..ClassifierConfig::default()
        }
    }

    fn request(prompt: &str) -> CompletionRequest {
        CompletionRequest {
            prompt: prompt.to_string(),
            max_tokens: 4000,
        }
    }

    #[tokio::test]
    async fn test_complete_extracts_first_choice() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::PartialJson(json!({
                "model": "test-model",
                "messages": [{ "role": "user", "content": "classify Asthma" }],
                "max_tokens": 4000,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"  ICD-10 Code(s): [J45.9]\n"}}]}"#)
            .create_async()
            .await;

        let provider = TogetherProvider::from_config(&test_config(server.url()));
        let response = provider.complete(request("classify Asthma")).await.unwrap();

        // Raw content: the classifier trims, the provider does not.
        assert_eq!(response.content, "  ICD-10 Code(s): [J45.9]\n");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_api_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body("invalid api key")
            .create_async()
            .await;

        let provider = TogetherProvider::from_config(&test_config(server.url()));
        let err = provider.complete(request("x")).await.unwrap_err();

        match err {
            LlmError::Api { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("expected Api error, got: {other}"),
        }
    }

    #[tokio::test]
    async fn test_complete_non_json_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let provider = TogetherProvider::from_config(&test_config(server.url()));
        let err = provider.complete(request("x")).await.unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_complete_missing_choices() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let provider = TogetherProvider::from_config(&test_config(server.url()));
        let err = provider.complete(request("x")).await.unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_complete_without_api_key() {
        let config = ClassifierConfig {
            api_key: None,
            ..ClassifierConfig::default()
        };
        let provider = TogetherProvider::from_config(&config);

        let err = provider.complete(request("x")).await.unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }

    #[test]
    fn test_provider_identity() {
        let provider = TogetherProvider::from_config(&test_config("http://localhost".to_string()));
        assert_eq!(provider.name(), "together");
        assert_eq!(provider.model(), "test-model");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let provider =
            TogetherProvider::from_config(&test_config("http://localhost:9/v1/".to_string()));
        assert_eq!(provider.base_url, "http://localhost:9/v1");
    }
}
