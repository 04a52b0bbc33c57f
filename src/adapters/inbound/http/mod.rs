//! HTTP API of the topology dashboard
//!
//! Routes:
//! - `POST /api/apps` upserts a manifest
//! - `GET /api/apps[?host=H]`, `GET /api/hosts`, `GET /api/dependency` list records
//! - `GET /api/tree?host=H[&collapsed=p1,p2][&depth=N]` builds a host's tree
//! - `GET /api/views/dependencies`, `GET /api/views/modules` shape the force views
//! - `GET /healthz`

mod error;
mod handlers;

pub use error::ApiError;

use crate::ports::inbound::TopologyPort;
use crate::shared::Result;
use anyhow::Context;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    topology: Arc<dyn TopologyPort>,
}

/// Builds the API router around an inbound port
pub fn router(topology: Arc<dyn TopologyPort>) -> Router {
    Router::new()
        .route("/api/apps", get(handlers::list_apps).post(handlers::save_app))
        .route("/api/hosts", get(handlers::list_hosts))
        .route("/api/dependency", get(handlers::list_dependencies))
        .route("/api/tree", get(handlers::app_tree))
        .route("/api/views/dependencies", get(handlers::dependency_view))
        .route("/api/views/modules", get(handlers::module_view))
        .route("/healthz", get(handlers::healthz))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(AppState { topology })
}

/// HTTP server for the dashboard API
pub struct AtlasServer {
    addr: String,
    topology: Arc<dyn TopologyPort>,
}

impl AtlasServer {
    pub fn new(host: &str, port: u16, topology: Arc<dyn TopologyPort>) -> Self {
        Self {
            addr: format!("{}:{}", host, port),
            topology,
        }
    }

    /// Binds the listener and serves until Ctrl-C
    pub async fn serve(self) -> Result<()> {
        let listener = TcpListener::bind(&self.addr)
            .await
            .with_context(|| format!("Failed to bind {}", self.addr))?;
        serve_on(listener, self.topology).await
    }
}

/// Serves the API on an already bound listener until Ctrl-C
pub async fn serve_on(listener: TcpListener, topology: Arc<dyn TopologyPort>) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(
        target: "atlas::http",
        url = %format!("http://{}", addr),
        "Atlas server ready"
    );

    axum::serve(listener, router(topology))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server stopped unexpectedly")?;

    tracing::info!(target: "atlas::http", "Atlas server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(target: "atlas::http", error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
