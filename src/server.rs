//! HTTP server initialization and runtime setup.
//!
//! Builds the store and resolver, wires them into [`AppState`], and runs the
//! Axum server until a shutdown signal arrives.

use crate::application::services::{LinkService, UrlValidator};
use crate::config::Config;
use crate::infrastructure::dns::{HostResolver, NoopResolver, TokioResolver};
use crate::infrastructure::persistence::InMemoryLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Builds the application state described by `config`.
///
/// The link store is created here, once; every handler reaches it through
/// the returned state.
pub fn build_state(config: &Config) -> AppState {
    let resolver: Arc<dyn HostResolver> = if config.dns_check {
        tracing::info!("Resolvability check enabled");
        Arc::new(TokioResolver::new(config.dns_timeout(), config.dns_retries))
    } else {
        tracing::info!("Resolvability check disabled (NoopResolver)");
        Arc::new(NoopResolver::new())
    };

    let link_repository = Arc::new(InMemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::with_code_policy(
        link_repository,
        config.code_length,
        config.code_max_attempts,
    ));
    let url_validator = Arc::new(UrlValidator::new(resolver));

    AppState::new(link_service, url_validator)
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
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when Ctrl+C is received.
///
/// If the signal handler cannot be installed the server keeps running and
/// has to be stopped externally.
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
