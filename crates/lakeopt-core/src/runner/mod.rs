use std::sync::Arc;

use lakeopt_infer::Optimizer;
use lakeopt_model::{ErrorDetail, OptimizationRequest, TaskId, TaskOutcome};
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::TaskStore;

/// Human-readable hint stored alongside every failure diagnostic.
const FAILURE_HINT: &str =
    "optimization did not complete; check the request payload and the upstream token";

/// Run one task's optimization in the background.
///
/// Returns immediately; the spawned unit always leaves the task in a
/// terminal state. Every failure class the backend can produce arrives here
/// as an `OptimizeError` and becomes a stored FAILED outcome; a task is
/// never left RUNNING with no writer remaining.
///
/// The handle is returned so callers can observe the unit; the server path
/// drops it (fire-and-forget), tests await it.
pub fn spawn(
    store: TaskStore,
    id: TaskId,
    request: OptimizationRequest,
    optimizer: Arc<dyn Optimizer>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(task_id = %id, "optimization started");

        let outcome = match optimizer.optimize(&request).await {
            Ok(result) => {
                info!(task_id = %id, "optimization finished");
                TaskOutcome::Completed(result)
            }
            Err(err) => {
                error!(task_id = %id, error = %err, "optimization failed");
                TaskOutcome::Failed(ErrorDetail {
                    error: err.to_string(),
                    message: FAILURE_HINT.to_string(),
                })
            }
        };

        store.complete(&id, outcome);
    })
}

#[cfg(test)]
mod tests {
    use lakeopt_infer::{MockOptimizer, OptimizeError};
    use lakeopt_model::{DdlStatement, OptimizationResult, QueryPattern, TaskStatus};
    use tokio::sync::Semaphore;

    use super::*;

    fn request() -> OptimizationRequest {
        OptimizationRequest {
            url: "s3://x".to_string(),
            ddl: vec![DdlStatement {
                statement: "CREATE TABLE t(a int)".to_string(),
            }],
            queries: vec![QueryPattern {
                queryid: "q1".to_string(),
                query: "SELECT * FROM t".to_string(),
                runquantity: 100,
            }],
        }
    }

    fn empty_result() -> OptimizationResult {
        OptimizationResult {
            ddl: vec![],
            migrations: vec![],
            queries: vec![],
        }
    }

    #[tokio::test]
    async fn success_is_stored_as_done() {
        let store = TaskStore::new();
        let id = TaskId::generate();
        store.create(id.clone());

        let optimizer = Arc::new(MockOptimizer::completing(empty_result()));
        spawn(store.clone(), id.clone(), request(), optimizer)
            .await
            .unwrap();

        let record = store.get(&id).unwrap();
        assert_eq!(record.status(), TaskStatus::Done);
        assert_eq!(
            record.outcome,
            Some(TaskOutcome::Completed(empty_result()))
        );
    }

    #[tokio::test]
    async fn failure_is_stored_with_diagnostic() {
        let store = TaskStore::new();
        let id = TaskId::generate();
        store.create(id.clone());

        let optimizer = Arc::new(MockOptimizer::failing(OptimizeError::UpstreamStatus {
            status: 503,
            body: "model loading".to_string(),
        }));
        spawn(store.clone(), id.clone(), request(), optimizer)
            .await
            .unwrap();

        let record = store.get(&id).unwrap();
        assert_eq!(record.status(), TaskStatus::Failed);
        match record.outcome {
            Some(TaskOutcome::Failed(detail)) => {
                assert!(detail.error.contains("503"));
                assert!(!detail.message.is_empty());
            }
            other => panic!("expected failed outcome, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn task_stays_running_until_backend_returns() {
        let store = TaskStore::new();
        let id = TaskId::generate();
        store.create(id.clone());

        let gate = Arc::new(Semaphore::new(0));
        let optimizer =
            Arc::new(MockOptimizer::completing(empty_result()).gated(Arc::clone(&gate)));
        let handle = spawn(store.clone(), id.clone(), request(), optimizer);

        // The unit is parked on the gate; creation already returned.
        assert_eq!(store.get(&id).unwrap().status(), TaskStatus::Running);

        gate.add_permits(1);
        handle.await.unwrap();
        assert_eq!(store.get(&id).unwrap().status(), TaskStatus::Done);
    }

    #[tokio::test]
    async fn missing_token_becomes_failed_task() {
        let store = TaskStore::new();
        let id = TaskId::generate();
        store.create(id.clone());

        let optimizer = Arc::new(MockOptimizer::failing(OptimizeError::MissingToken(
            "HF_TOKEN".to_string(),
        )));
        spawn(store.clone(), id.clone(), request(), optimizer)
            .await
            .unwrap();

        match store.get(&id).unwrap().outcome {
            Some(TaskOutcome::Failed(detail)) => assert!(detail.error.contains("HF_TOKEN")),
            other => panic!("expected failed outcome, got {other:?}"),
        }
    }
}
