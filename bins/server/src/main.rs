//! Curio API Server
//!
//! Main entry point for the content provisioning service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use curio_api::{AppState, create_router};
use curio_core::content::UrlSigner;
use curio_core::storage::StorageService;
use curio_db::connect;
use curio_shared::AppConfig;

const DEFAULT_LOG_FILTER: &str =
    "curio_server=debug,curio_api=debug,curio_core=debug,curio_db=debug,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to database
    let db = connect(&config.database).await?;
    info!("Connected to database");

    // Create storage service for size probing
    let storage = StorageService::from_provider(config.storage.clone())?;
    info!(provider = storage.provider_name(), "Storage configured");

    let signer = UrlSigner::from_config(&config.provisioning);
    info!(
        ttl_secs = signer.ttl_secs(),
        "Signed URL lifetime configured"
    );

    // Create application state
    let state = AppState {
        db: Arc::new(db),
        storage: Arc::new(storage),
        signer,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
