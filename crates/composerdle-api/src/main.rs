//! Composerdle API server entry point.

use std::sync::Arc;

use composerdle_api::catalog_store::JsonCatalog;
use composerdle_api::config::Config;
use composerdle_api::error::AppError;
use composerdle_api::state::{AppState, LoggingGuessSink};
use composerdle_core::event::SystemClock;
use composerdle_selection::application::driver::RoundDriver;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Composerdle API server");

    let config = Config::from_env()?;

    let raw = tokio::fs::read_to_string(&config.catalog_path).await?;
    let catalog = Arc::new(JsonCatalog::from_json(&raw)?);
    tracing::info!(path = %config.catalog_path.display(), "catalog loaded");

    let driver = RoundDriver::start(
        catalog.clone(),
        catalog.prefixes().clone(),
        catalog,
        Arc::new(LoggingGuessSink),
        Arc::new(SystemClock),
    )
    .await;
    tracing::info!(round_id = %driver.engine().id(), "round started");

    let app = composerdle_api::build_router(AppState::new(driver));

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
