//! Hildebrandt Management site server
//!
//! Serves the statically rendered marketing pages, the provider-backed
//! post index, and the theme stylesheet registered by the theme
//! configuration.

use axum::{Router, response::Json, routing::get};
use hm_site::{PostProvider, Theme};
use serde_json::{Value, json};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod provider;
mod routes;

use config::ServerConfig;
use error::Result;
use provider::ConfigPosts;

/// Main application state
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostProvider>,
    pub theme: Theme,
    pub config: ServerConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "hm_site_server=debug,tower_http=debug".to_string()),
        )
        .init();

    // Load configuration
    let config = ServerConfig::from_env()?;
    info!("Starting site server on {}:{}", config.host, config.port);

    // Create application state
    let state = AppState {
        posts: Arc::new(ConfigPosts::from_config(&config)),
        theme: Theme::default(),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the main application router
fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Site routes
        .merge(routes::pages::router())
        .merge(routes::posts::router())
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> Result<Json<Value>> {
    Ok(Json(json!({
        "status": "healthy",
        "service": "hm-site-server",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": time::OffsetDateTime::now_utc()
    })))
}
