use std::time::Duration;

const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/google/gemma-7b-it";
const DEFAULT_TOKEN_ENV: &str = "HF_TOKEN";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_MAX_NEW_TOKENS: u32 = 2048;
const DEFAULT_TEMPERATURE: f32 = 0.3;
const DEFAULT_QUERY_PREVIEW: usize = 3;

/// Settings for the hosted text-generation backend.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Full URL of the text-generation route.
    pub endpoint: String,
    /// Name of the environment variable holding the bearer token.
    ///
    /// The token is read per call, not at startup, so a missing credential
    /// fails the task that needed it instead of the whole process.
    pub token_env: String,
    /// Upstream request timeout.
    pub timeout: Duration,
    /// Generation length cap passed to the model.
    pub max_new_tokens: u32,
    pub temperature: f32,
    /// How many of the input queries are embedded in the prompt.
    ///
    /// Caps prompt size: the DDL is always sent in full, the workload is
    /// previewed.
    pub query_preview: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            query_preview: DEFAULT_QUERY_PREVIEW,
        }
    }
}

impl InferenceConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_token_env(mut self, token_env: impl Into<String>) -> Self {
        self.token_env = token_env.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_query_preview(mut self, query_preview: usize) -> Self {
        self.query_preview = query_preview;
        self
    }
}
