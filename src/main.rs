use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use reelrank::api::{create_router, AppState};
use reelrank::config::Config;
use reelrank::store::Snapshot;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Load the catalog and similarity matrix once. Without a valid snapshot
    // the process cannot serve queries, so any load failure is fatal here.
    let snapshot = Snapshot::load(&config.catalog_path, &config.matrix_path)?;
    tracing::info!(movies = snapshot.len(), "snapshot loaded");

    let state = AppState::new(Arc::new(snapshot), config.default_top_n);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
