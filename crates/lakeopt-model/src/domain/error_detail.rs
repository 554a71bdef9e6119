use serde::{Deserialize, Serialize};

/// Failure payload stored on a FAILED task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-oriented diagnostic (carries e.g. the upstream status code).
    pub error: String,
    /// Human-readable hint.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_serde_roundtrip() {
        let detail = ErrorDetail {
            error: "upstream returned 503: busy".to_string(),
            message: "try again later".to_string(),
        };

        let json = serde_json::to_string(&detail).unwrap();
        assert!(json.contains("503"));

        let back: ErrorDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(back, detail);
    }
}
