// ABOUTME: HTTP server binary for the FitAI weekly workout plan service
// ABOUTME: Loads configuration, attaches Gemini enhancement when available, and serves the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `FitAI` Plan Server Binary

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use fitai_intelligence::WorkoutPlanGenerator;
use fitai_planner::{
    config::ServerConfig,
    llm::{GeminiProvider, LlmProvider},
    logging,
    routes::build_router,
    services::{LlmPlanEnhancer, PlanService},
};
use tokio::net::TcpListener;
use tokio::signal;
use tokio::time::timeout;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "fitai-server")]
#[command(about = "FitAI weekly workout plan generator service")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Serve rule-based plans only
    #[arg(long)]
    no_enhance: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting FitAI plan service");
    info!("{}", config.summary());

    let mut service = PlanService::new(WorkoutPlanGenerator::new());
    if args.no_enhance {
        info!("Narrative enhancement disabled by flag");
    } else if let Some(provider) = GeminiProvider::from_config(&config.enhancement) {
        let provider: Arc<dyn LlmProvider> = Arc::new(provider);
        probe_provider(provider.as_ref(), config.enhancement.timeout).await;
        service = service.with_enhancer(Arc::new(LlmPlanEnhancer::from_config(
            provider,
            &config.enhancement,
        )));
    } else {
        warn!("Gemini enhancement unavailable (disabled or no API key); serving rule-based plans only");
    }

    let router = build_router(Arc::new(service), &config);
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("FitAI plan service stopped");
    Ok(())
}

/// Log whether the enhancement provider answers; enhancement stays attached either way
async fn probe_provider(provider: &dyn LlmProvider, limit: Duration) {
    match timeout(limit, provider.health_check()).await {
        Ok(Ok(true)) => info!(
            provider = provider.display_name(),
            model = provider.default_model(),
            "Narrative enhancement enabled"
        ),
        Ok(Ok(false)) => warn!(
            provider = provider.display_name(),
            "Enhancement provider rejected the health check; plans fall back to rule-based text on failure"
        ),
        Ok(Err(e)) => warn!(provider = provider.display_name(), error = %e, "Enhancement provider unreachable"),
        Err(_) => warn!(provider = provider.display_name(), "Enhancement provider health check timed out"),
    }
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutdown signal received");
}
