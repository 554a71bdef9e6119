use thiserror::Error;

/// Everything the optimization pipeline can fail with, configuration
/// through output validation. One variant per stage; the task runner folds
/// any of them into a single stored diagnostic.
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// The credential variable is not set in the process environment.
    #[error("{0} is not set")]
    MissingToken(String),

    /// The request never produced a response (connect failure, timeout).
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The response body is not the expected generation envelope.
    #[error("unexpected upstream envelope: {0}")]
    Envelope(String),

    /// The generated text is not parseable as JSON.
    #[error("model output is not valid JSON: {reason}")]
    MalformedJson { reason: String, text: String },

    /// The parsed structure is missing a required list or has the wrong
    /// entry shape.
    #[error("model output has an invalid shape: {0}")]
    Schema(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_names_the_variable() {
        let err = OptimizeError::MissingToken("HF_TOKEN".to_string());
        assert_eq!(err.to_string(), "HF_TOKEN is not set");
    }

    #[test]
    fn upstream_status_carries_the_code() {
        let err = OptimizeError::UpstreamStatus {
            status: 503,
            body: "model loading".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("503"));
        assert!(text.contains("model loading"));
    }

    #[test]
    fn malformed_json_mentions_json() {
        let err = OptimizeError::MalformedJson {
            reason: "expected value at line 1".to_string(),
            text: "not json".to_string(),
        };
        assert!(err.to_string().contains("JSON"));
    }
}
