// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::assistant_service::AssistantService;
use crate::application::detail_loader::DetailLoader;
use crate::application::refresh_scheduler::{IntervalTimer, RefreshScheduler};
use crate::domain::view_model::EquipmentNormalizer;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::http_source::HttpEquipmentSource;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;
use crate::presentation::server::serve;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config().context("Failed to load config/dashboard")?;

    // Create upstream client (infrastructure layer)
    let upstream = Arc::new(HttpEquipmentSource::new(
        &config.upstream.base_url,
        config.upstream.timeout(),
    )?);

    // Create services (application layer)
    let normalizer = Arc::new(EquipmentNormalizer::from_entropy());
    let scheduler = Arc::new(RefreshScheduler::new(upstream.clone()));
    let detail_loader = DetailLoader::new(upstream.clone(), normalizer);
    let assistant_service = AssistantService::new(upstream.clone());

    let refresh = Arc::clone(&scheduler).start(IntervalTimer::new(config.refresh.period()));

    let state = Arc::new(AppState {
        scheduler,
        detail_loader,
        assistant_service,
    });
    let router = build_router(state);

    let addr = config.server.bind;
    tracing::info!(
        "Starting equipment-ops-dashboard on {} (upstream {}, refresh every {:?})",
        addr,
        config.upstream.base_url,
        config.refresh.period()
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    serve(listener, router, refresh, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
        }
    })
    .await?;

    Ok(())
}
