use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::info;

use lakeopt_api::{HttpApi, OptimizationService};
use lakeopt_core::TaskStore;
use lakeopt_infer::{HfOptimizer, InferenceConfig};
use lakeopt_observe::LogSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1) Logger
    let settings = LogSettings {
        filter: env_or("LAKEOPT_LOG", "info"),
        format: env_or("LAKEOPT_LOG_FORMAT", "text").parse()?,
        ..Default::default()
    };
    lakeopt_observe::init(&settings)?;
    info!("logger initialized");

    // 2) Inference backend
    let config = inference_config_from_env()?;
    info!(endpoint = %config.endpoint, "inference backend configured");
    let optimizer = Arc::new(HfOptimizer::new(config)?);

    // 3) Store + API
    let store = TaskStore::new();
    let service = Arc::new(OptimizationService::new(store, optimizer));
    let app = HttpApi::new(service).router();

    // 4) Serve until ctrl-c
    let addr = env_or("LAKEOPT_LISTEN", "0.0.0.0:8000");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown())
        .await?;
    info!("shut down");

    Ok(())
}

fn inference_config_from_env() -> anyhow::Result<InferenceConfig> {
    let mut config = InferenceConfig::default();

    if let Ok(url) = std::env::var("LAKEOPT_UPSTREAM_URL") {
        config = config.with_endpoint(url);
    }
    if let Ok(secs) = std::env::var("LAKEOPT_UPSTREAM_TIMEOUT_SECS") {
        let secs: u64 = secs
            .parse()
            .context("LAKEOPT_UPSTREAM_TIMEOUT_SECS must be an integer")?;
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if let Ok(preview) = std::env::var("LAKEOPT_QUERY_PREVIEW") {
        let preview: usize = preview
            .parse()
            .context("LAKEOPT_QUERY_PREVIEW must be an integer")?;
        config = config.with_query_preview(preview);
    }

    Ok(config)
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

async fn shutdown() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
