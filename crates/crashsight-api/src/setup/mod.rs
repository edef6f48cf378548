//! Application setup and initialization

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use crashsight_core::Config;
use crashsight_vision::VisionClient;

use crate::state::AppState;

/// Initialize the application: vision client, spool directory, routes.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let vision = VisionClient::new(&config)?;

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| format!("Failed to create upload directory '{}'", config.upload_dir))?;

    tracing::info!(
        model = %config.openai_model,
        upload_dir = %config.upload_dir,
        "Configuration loaded"
    );

    let state = Arc::new(AppState { config, vision });
    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}
