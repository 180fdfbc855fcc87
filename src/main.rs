use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use marquee_api::api::{create_router, AppState};
use marquee_api::config::Config;
use marquee_api::dataset::{bootstrap, Dataset};
use marquee_api::services::providers::TmdbProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    // One-time provisioning: the similarity matrix is a required static
    // dependency, so any failure past this point aborts startup.
    bootstrap::ensure_similarity_file(&config)
        .await
        .context("failed to provision similarity matrix")?;

    let dataset = Dataset::load(
        Path::new(&config.movies_path),
        Path::new(&config.similarity_path),
    )
    .context("failed to load dataset")?;

    tracing::info!(movies = dataset.len(), "Dataset loaded");

    let metadata = TmdbProvider::from_config(&config).context("failed to build TMDB client")?;

    let state = AppState::new(Arc::new(dataset), Arc::new(metadata));
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
