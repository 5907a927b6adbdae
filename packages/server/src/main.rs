//! CV extraction HTTP server.

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::app::{build_app, build_extractor, AppState};
use server_core::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,extraction=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting CV extraction server");

    // Loads .env before reading required keys; fails fast on a missing API key
    let config = Config::from_env()?;

    let state = AppState {
        extractor: Arc::new(build_extractor(&config)),
    };
    let app = build_app(state, &config);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
