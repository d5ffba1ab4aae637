//! Amigo Secreto Gateway - Main entry point
//!
//! Serves the access-code lookup handler over HTTP. In production the hosting
//! platform plays this role; the gateway lets the same handler run locally
//! or on a plain server.

mod config;
mod router;

use anyhow::Result;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use handler_buscar::Datastore;

use crate::config::AppConfig;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub store: Datastore,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let store = Datastore::new(config.datastore_path.clone());
        Self { config, store }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,amigo_secreto_gateway=debug,handler_buscar=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Amigo Secreto Gateway");

    // Load configuration
    let config = AppConfig::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    if !config.datastore_path.is_file() {
        tracing::warn!(
            path = %config.datastore_path.display(),
            "Datastore not found; lookups will fail until it exists"
        );
    }

    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(config));

    let app = router::create_gateway_router(state.clone())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Gateway listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
