//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Error responses

pub mod error;
pub mod routes;

use axum::Router;
use curio_core::content::UrlSigner;
use curio_core::storage::StorageService;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Storage service used to probe content sizes.
    pub storage: Arc<StorageService>,
    /// Signer for access URLs.
    pub signer: UrlSigner,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
