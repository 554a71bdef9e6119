use async_trait::async_trait;
use lakeopt_model::{OptimizationRequest, OptimizationResult, TaskId, TaskStatus};

use crate::error::ApiError;

/// Task API backend.
///
/// This trait abstracts the store-backed implementation, allowing users to:
/// - Use the provided `OptimizationService`
/// - Wrap custom handlers with additional logic (auth, admission control)
#[async_trait]
pub trait ApiHandler: Send + Sync + 'static {
    /// Register a new optimization task and start its background work.
    ///
    /// Returns before the work completes; clients poll with [`status`].
    ///
    /// [`status`]: ApiHandler::status
    async fn submit(&self, request: OptimizationRequest) -> Result<TaskId, ApiError>;

    /// Current status of a task by id.
    async fn status(&self, id: &TaskId) -> Result<TaskStatus, ApiError>;

    /// Stored result of a DONE task.
    async fn result(&self, id: &TaskId) -> Result<OptimizationResult, ApiError>;
}
