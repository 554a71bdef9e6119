use std::sync::Arc;

use async_trait::async_trait;
use lakeopt_core::{TaskStore, runner};
use lakeopt_infer::Optimizer;
use lakeopt_model::{
    OptimizationRequest, OptimizationResult, TaskId, TaskOutcome, TaskStatus,
};
use tracing::info;

use crate::{error::ApiError, handler::ApiHandler};

/// Store-backed [`ApiHandler`] implementation.
///
/// Owns the wiring between the three API operations, the task store and the
/// inference backend.
pub struct OptimizationService {
    store: TaskStore,
    optimizer: Arc<dyn Optimizer>,
}

impl OptimizationService {
    pub fn new(store: TaskStore, optimizer: Arc<dyn Optimizer>) -> Self {
        Self { store, optimizer }
    }
}

#[async_trait]
impl ApiHandler for OptimizationService {
    async fn submit(&self, request: OptimizationRequest) -> Result<TaskId, ApiError> {
        let id = TaskId::generate();
        self.store.create(id.clone());

        // The response returns before the work does; the client polls while
        // the upstream call runs.
        runner::spawn(
            self.store.clone(),
            id.clone(),
            request,
            Arc::clone(&self.optimizer),
        );

        info!(task_id = %id, "task submitted");
        Ok(id)
    }

    async fn status(&self, id: &TaskId) -> Result<TaskStatus, ApiError> {
        let record = self
            .store
            .get(id)
            .ok_or_else(|| ApiError::TaskNotFound(id.to_string()))?;
        Ok(record.status())
    }

    async fn result(&self, id: &TaskId) -> Result<OptimizationResult, ApiError> {
        let record = self
            .store
            .get(id)
            .ok_or_else(|| ApiError::TaskNotFound(id.to_string()))?;

        match record.outcome {
            None => Err(ApiError::NotReady(id.to_string())),
            Some(TaskOutcome::Failed(detail)) => Err(ApiError::TaskFailed(detail)),
            Some(TaskOutcome::Completed(result)) => Ok(result),
        }
    }
}
