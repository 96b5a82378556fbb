//! HTTP server initialization and runtime setup.
//!
//! Builds the mapping store and shortening service, then runs the Axum server
//! until a shutdown signal arrives.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::domain::id_generator::RandomIdGenerator;
use crate::infrastructure::memory::InMemoryMappingStore;
use crate::routes::{app_router, static_segment_ids};
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds application state from configuration.
///
/// Every call yields a fresh, empty store. Names of static routes are
/// excluded from allocation.
pub fn build_state(config: &Config) -> AppState {
    let store = Arc::new(InMemoryMappingStore::new());
    let shortener = ShortenerService::new(
        store,
        RandomIdGenerator::new(config.id_length),
        config.base_url.clone(),
        config.id_max_attempts,
    )
    .with_excluded_ids(static_segment_ids());

    AppState::new(Arc::new(shortener))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    tracing::info!("In-memory mapping store initialized");

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
