//! HTTP boundary
//!
//! Serves the query endpoint and static assets over one shared, read-only
//! [`Searcher`]. All request state is per-request; the only shared mutable
//! state is a pair of atomic counters.
//!
//! Routes:
//! - `GET /search?q=` - document text as a JSON string
//! - `GET /status` - uptime and counters
//! - `GET /titles` - catalog titles in document order
//! - anything else - files from the static directory

mod handlers;
pub mod protocol;

use crate::config::ServerConfig;
use crate::query::Searcher;
use anyhow::{Context, Result};
use axum::{Router, routing::get};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::time::Instant;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Statistics for the server
pub struct ServerStats {
    pub start_time: Instant,
    pub queries_served: AtomicU64,
    pub not_found: AtomicU64,
}

impl ServerStats {
    fn new() -> Self {
        Self {
            start_time: Instant::now(),
            queries_served: AtomicU64::new(0),
            not_found: AtomicU64::new(0),
        }
    }
}

/// Application state shared across all handlers
pub struct AppState {
    pub searcher: Arc<Searcher>,
    pub stats: ServerStats,
}

impl AppState {
    pub fn new(searcher: Arc<Searcher>) -> Arc<Self> {
        Arc::new(Self {
            searcher,
            stats: ServerStats::new(),
        })
    }
}

/// Create the HTTP router with all endpoints
pub fn router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/search", get(handlers::search))
        .route("/status", get(handlers::status))
        .route("/titles", get(handlers::titles))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until Ctrl+C
pub async fn serve(config: &ServerConfig, searcher: Arc<Searcher>) -> Result<()> {
    let app = router(AppState::new(searcher), &config.static_dir);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!(%addr, static_dir = %config.static_dir.display(), "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
