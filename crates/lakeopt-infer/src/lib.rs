mod config;
pub use config::InferenceConfig;

mod error;
pub use error::OptimizeError;

mod prompt;

mod client;
pub use client::HfOptimizer;

mod mock;
pub use mock::MockOptimizer;

use async_trait::async_trait;
use lakeopt_model::{OptimizationRequest, OptimizationResult};

/// A backend that turns an optimization request into an optimized schema.
///
/// The production implementation ([`HfOptimizer`]) delegates the reasoning
/// to a hosted text-generation model; tests script outcomes with
/// [`MockOptimizer`].
#[async_trait]
pub trait Optimizer: Send + Sync + 'static {
    /// One attempt, no retries. Every failure class is a distinct
    /// [`OptimizeError`] variant so the caller can store one diagnostic.
    async fn optimize(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResult, OptimizeError>;
}
