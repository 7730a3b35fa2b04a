use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use axum::http::{HeaderValue, header};
use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::server::api::metadata_handler;
use crate::server::state::AppState;

/// Freshness hint on preprocessed images: one day. The preprocessing step
/// only ever adds files under new study directories, so stale reads are not
/// a concern.
const IMAGE_CACHE_CONTROL: &str = "public, max-age=86400";

#[derive(Clone)]
pub struct ServerConfig {
    /// TCP address to bind (e.g., "0.0.0.0:8080")
    pub bind_address: String,
    /// Directory containing index.html and the logo asset
    pub viewer_root: PathBuf,
    /// Directory populated by preprocess.py
    pub processed_root: PathBuf,
}

/// Build the application router with metadata read from the processed root.
pub fn build_router(config: &ServerConfig) -> Router {
    router_with_state(config, AppState::new(&config.processed_root))
}

/// Build the four-route application router with an explicit state, so tests
/// can inject a metadata source.
pub fn router_with_state(config: &ServerConfig, state: AppState) -> Router {
    let images = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static(IMAGE_CACHE_CONTROL),
        ))
        .service(ServeDir::new(&config.processed_root));

    Router::new()
        .route_service("/", ServeFile::new(config.viewer_root.join("index.html")))
        .route_service(
            "/utsw-logo.svg",
            ServeFile::new(config.viewer_root.join("utsw-logo.svg")),
        )
        .route("/api/metadata", get(metadata_handler))
        .nest_service("/images", images)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// Start the viewer HTTP server and serve requests until shutdown.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    info!("Starting viewer server on {}", config.bind_address);

    // Parse bind address
    let addr: SocketAddr = config.bind_address.parse().map_err(|e| {
        anyhow::anyhow!(
            "Failed to parse bind address '{}': {}",
            config.bind_address,
            e
        )
    })?;

    let app = build_router(&config);

    // Create TCP listener
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to address '{}': {}", addr, e))?;

    info!(
        viewer_root = %config.viewer_root.display(),
        processed_root = %config.processed_root.display(),
        "Viewer server listening on {}",
        addr
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
