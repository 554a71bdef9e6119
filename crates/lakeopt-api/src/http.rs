use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::{get, post},
};
use lakeopt_model::{OptimizationRequest, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::ApiError, handler::ApiHandler};

/// HTTP API service builder.
pub struct HttpApi<H> {
    handler: Arc<H>,
}

impl<H> HttpApi<H>
where
    H: ApiHandler,
{
    /// Create new HTTP API with the given handler.
    pub fn new(handler: Arc<H>) -> Self {
        Self { handler }
    }

    /// Build axum router with mounted endpoints.
    ///
    /// Routes:
    /// - POST /new - Submit an optimization task
    /// - GET /status?task_id=<id> - Poll task status
    /// - GET /getresult?task_id=<id> - Fetch the stored result
    pub fn router(self) -> Router {
        Router::new()
            .route("/new", post(create_task::<H>))
            .route("/status", get(get_status::<H>))
            .route("/getresult", get(get_result::<H>))
            .with_state(self.handler)
    }
}

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct TaskIdResponse {
    taskid: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct StatusResponse {
    status: TaskStatus,
}

#[derive(Debug, Deserialize)]
struct TaskIdParams {
    task_id: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /new
async fn create_task<H>(
    State(handler): State<Arc<H>>,
    Json(request): Json<OptimizationRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    H: ApiHandler,
{
    debug!(
        ddl = request.ddl.len(),
        queries = request.queries.len(),
        "submitting optimization task"
    );
    let id = handler.submit(request).await?;

    Ok(Json(TaskIdResponse {
        taskid: id.to_string(),
    }))
}

/// GET /status?task_id=<id>
async fn get_status<H>(
    State(handler): State<Arc<H>>,
    Query(params): Query<TaskIdParams>,
) -> Result<impl IntoResponse, ApiError>
where
    H: ApiHandler,
{
    let id = TaskId::from(params.task_id);
    let status = handler.status(&id).await?;

    Ok(Json(StatusResponse { status }))
}

/// GET /getresult?task_id=<id>
async fn get_result<H>(
    State(handler): State<Arc<H>>,
    Query(params): Query<TaskIdParams>,
) -> Result<impl IntoResponse, ApiError>
where
    H: ApiHandler,
{
    let id = TaskId::from(params.task_id);
    debug!(%id, "fetching task result");
    let result = handler.result(&id).await?;

    Ok(Json(result))
}
