use async_trait::async_trait;
use lakeopt_model::{OptimizationRequest, OptimizationResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{InferenceConfig, OptimizeError, Optimizer, prompt};

/// Client for a Hugging Face text-generation inference route.
pub struct HfOptimizer {
    http: reqwest::Client,
    config: InferenceConfig,
}

impl HfOptimizer {
    /// Build a client with the configured request timeout baked in.
    pub fn new(config: InferenceConfig) -> Result<Self, OptimizeError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }
}

// ============================================================================
// Upstream wire types
// ============================================================================

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerateParameters,
}

#[derive(Serialize)]
struct GenerateParameters {
    max_new_tokens: u32,
    temperature: f32,
    return_full_text: bool,
}

#[derive(Deserialize)]
struct Generation {
    generated_text: String,
}

#[async_trait]
impl Optimizer for HfOptimizer {
    async fn optimize(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResult, OptimizeError> {
        // Read per call so a missing token fails this task, not the process.
        let token = std::env::var(&self.config.token_env)
            .map_err(|_| OptimizeError::MissingToken(self.config.token_env.clone()))?;

        let prompt = prompt::build_prompt(request, self.config.query_preview);
        let body = GenerateRequest {
            inputs: &prompt,
            parameters: GenerateParameters {
                max_new_tokens: self.config.max_new_tokens,
                temperature: self.config.temperature,
                return_full_text: false,
            },
        };

        debug!(endpoint = %self.config.endpoint, "sending optimization prompt upstream");
        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OptimizeError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.text().await?;
        let generations: Vec<Generation> = serde_json::from_str(&raw)
            .map_err(|e| OptimizeError::Envelope(format!("{e}, body: {raw}")))?;
        let text = generations
            .first()
            .map(|g| g.generated_text.trim().to_string())
            .ok_or_else(|| OptimizeError::Envelope("empty generation list".to_string()))?;

        debug!(chars = text.len(), "decoding generated optimization");
        decode_result(&text)
    }
}

/// Decode the model's generated text into an [`OptimizationResult`].
pub(crate) fn decode_result(text: &str) -> Result<OptimizationResult, OptimizeError> {
    let json = strip_code_fence(text);

    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| OptimizeError::MalformedJson {
            reason: e.to_string(),
            text: text.to_string(),
        })?;

    for field in ["ddl", "migrations", "queries"] {
        if !value.get(field).is_some_and(|v| v.is_array()) {
            return Err(OptimizeError::Schema(format!(
                "'{field}' is missing or not a list"
            )));
        }
    }

    serde_json::from_value(value).map_err(|e| OptimizeError::Schema(e.to_string()))
}

/// Strip an optional Markdown code fence around the generated JSON.
///
/// Generative output is not guaranteed to be bare JSON. Text after the
/// closing fence is discarded; an unterminated fence keeps everything after
/// the opening marker.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let inner = if let Some(rest) = trimmed.strip_prefix("```json") {
        rest
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest
    } else {
        return trimmed;
    };

    match inner.find("```") {
        Some(end) => inner[..end].trim(),
        None => inner.trim(),
    }
}
