use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lakeopt_model::ErrorDetail;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("task not ready: {0}")]
    NotReady(String),

    #[error("task failed: {}", .0.error)]
    TaskFailed(ErrorDetail),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidRequest(m) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": m }))).into_response()
            }
            ApiError::TaskNotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("task not found: {id}") })),
            )
                .into_response(),
            ApiError::NotReady(id) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("task not ready: {id}") })),
            )
                .into_response(),
            // The stored diagnostic is the client's only window into a
            // failed background unit; return it verbatim.
            ApiError::TaskFailed(detail) => {
                error!(error = %detail.error, "returning failed task diagnostic");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(detail)).into_response()
            }
            ApiError::Internal(m) => {
                error!(message = %m, "internal api error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
