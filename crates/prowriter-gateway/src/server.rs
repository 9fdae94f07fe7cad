// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::time::Instant;

use axum::{
    Router,
    routing::{get, post},
};
use prowriter_core::ProwriterError;
use prowriter_pipeline::Generator;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Pipeline shared by every feature endpoint.
    pub generator: Generator,
    /// Process start time for uptime calculation.
    pub start_time: Instant,
    /// Cancelled on shutdown; in-flight generations observe it.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(generator: Generator, shutdown: CancellationToken) -> Self {
        Self {
            generator,
            start_time: Instant::now(),
            shutdown,
        }
    }
}

/// Gateway server configuration (mirrors `[server]` from prowriter-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Builds the application router.
///
/// - POST /api/correct
/// - POST /api/daily
/// - POST /api/practice
/// - GET /api/scenarios
/// - GET /health
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route("/api/scenarios", get(handlers::get_scenarios))
        .route("/api/correct", post(handlers::post_correct))
        .route("/api/daily", post(handlers::post_daily))
        .route("/api/practice", post(handlers::post_practice))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds to `host:port` and serves until the state's shutdown token fires.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), ProwriterError> {
    let shutdown = state.shutdown.clone();
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ProwriterError::Internal(format!("failed to bind server to {addr}: {e}")))?;

    tracing::info!("Prowriter server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| ProwriterError::Internal(format!("server error: {e}")))?;

    tracing::info!("Prowriter server stopped");
    Ok(())
}
