use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lakeopt_model::{OptimizationRequest, OptimizationResult};
use tokio::sync::Semaphore;

use crate::{OptimizeError, Optimizer};

/// A scripted backend for tests. Returns pre-defined outcomes in order.
///
/// An optional gate parks `optimize` until the test adds a permit, which
/// makes "still RUNNING" assertions deterministic instead of racing the
/// spawned task.
pub struct MockOptimizer {
    outcomes: Mutex<VecDeque<Result<OptimizationResult, OptimizeError>>>,
    gate: Option<Arc<Semaphore>>,
}

impl MockOptimizer {
    pub fn new(outcomes: Vec<Result<OptimizationResult, OptimizeError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            gate: None,
        }
    }

    /// Single successful outcome.
    pub fn completing(result: OptimizationResult) -> Self {
        Self::new(vec![Ok(result)])
    }

    /// Single failed outcome.
    pub fn failing(err: OptimizeError) -> Self {
        Self::new(vec![Err(err)])
    }

    /// Park each `optimize` call until a permit is added to `gate`.
    pub fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }
}

#[async_trait]
impl Optimizer for MockOptimizer {
    async fn optimize(
        &self,
        _request: &OptimizationRequest,
    ) -> Result<OptimizationResult, OptimizeError> {
        if let Some(gate) = &self.gate {
            let permit = gate
                .acquire()
                .await
                .map_err(|_| OptimizeError::Envelope("mock gate closed".to_string()))?;
            permit.forget();
        }

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(OptimizeError::Envelope("no scripted outcome left".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_result() -> OptimizationResult {
        OptimizationResult {
            ddl: vec![],
            migrations: vec![],
            queries: vec![],
        }
    }

    fn request() -> OptimizationRequest {
        OptimizationRequest {
            url: "s3://x".to_string(),
            ddl: vec![],
            queries: vec![],
        }
    }

    #[tokio::test]
    async fn outcomes_are_returned_in_order() {
        let mock = MockOptimizer::new(vec![
            Ok(empty_result()),
            Err(OptimizeError::UpstreamStatus {
                status: 503,
                body: "busy".to_string(),
            }),
        ]);

        assert!(mock.optimize(&request()).await.is_ok());
        assert!(mock.optimize(&request()).await.is_err());
    }

    #[tokio::test]
    async fn exhausted_script_errors() {
        let mock = MockOptimizer::new(vec![]);
        assert!(mock.optimize(&request()).await.is_err());
    }

    #[tokio::test]
    async fn gate_parks_until_released() {
        let gate = Arc::new(Semaphore::new(0));
        let mock = Arc::new(MockOptimizer::completing(empty_result()).gated(Arc::clone(&gate)));

        let call = {
            let mock = Arc::clone(&mock);
            tokio::spawn(async move { mock.optimize(&request()).await })
        };
        assert!(!call.is_finished());

        gate.add_permits(1);
        assert!(call.await.unwrap().is_ok());
    }
}
