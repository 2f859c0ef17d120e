// crates/core/src/llm/config.rs
//! Classifier configuration.
//!
//! Passed explicitly into the batch classifier at construction; there are
//! no module-level client or model globals.

/// Model used for classification requests.
pub const DEFAULT_MODEL: &str = "meta-llama/Meta-Llama-3.1-8B-Instruct-Turbo-128K";

/// Guard model identifier, configured alongside the primary model.
/// No request consumes it.
pub const DEFAULT_SAFETY_MODEL: &str = "meta-llama/Meta-Llama-Guard-3-8B";

/// Per-request output token cap.
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Chat-completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.together.xyz/v1";

/// Configuration for the batch classifier and its completion client.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Credential for the completion service. `None` fails at first call,
    /// not at startup.
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub safety_model: String,
    pub max_tokens: u32,
}

impl ClassifierConfig {
    /// Build a config from the process environment.
    ///
    /// Reads the credential from `API_KEY`; everything else keeps its
    /// default.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("API_KEY").ok(),
            ..Self::default()
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            safety_model: DEFAULT_SAFETY_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}
