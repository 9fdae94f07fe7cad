// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `prowriter serve` command implementation.
//!
//! Builds the Gemini provider and generation pipeline from config, then runs
//! the HTTP gateway until SIGINT/SIGTERM.

use std::sync::Arc;

use prowriter_config::ProwriterConfig;
use prowriter_core::error::ProwriterError;
use prowriter_gateway::{AppState, ServerConfig};
use prowriter_gemini::GeminiProvider;
use prowriter_pipeline::Generator;
use tracing::{error, info};

use crate::shutdown;

/// Runs the `prowriter serve` command.
///
/// A missing API key is reported here, before the listener is bound.
pub async fn run_serve(config: ProwriterConfig) -> Result<(), ProwriterError> {
    info!("starting prowriter serve");

    let generator = build_generator(&config)?;
    info!(
        model = %config.gemini.model,
        max_retries = config.generation.max_retries,
        retry_delay_ms = config.generation.retry_delay_ms,
        "generation pipeline ready"
    );

    let shutdown = shutdown::install_signal_handler();
    let state = AppState::new(generator, shutdown);
    let server = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };

    prowriter_gateway::start_server(&server, state).await
}

/// Builds the provider and pipeline shared by the server and client commands.
pub fn build_generator(config: &ProwriterConfig) -> Result<Generator, ProwriterError> {
    let provider = GeminiProvider::new(&config.gemini).inspect_err(|e| {
        error!(error = %e, "failed to initialize Gemini provider");
    })?;
    Ok(Generator::from_config(Arc::new(provider), &config.generation))
}

/// Installs the global tracing subscriber, logging to stderr.
///
/// `RUST_LOG` overrides the configured level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("prowriter={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
