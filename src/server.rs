//! HTTP server initialization and runtime setup.
//!
//! Builds the shared HTTP client, the provider clients and the services, then
//! runs the Axum server until Ctrl-C.

use crate::application::services::{JokeService, PairedJokesService};
use crate::config::Config;
use crate::domain::sources::JokeSource;
use crate::infrastructure::sources::{ChuckNorrisClient, DadJokeClient, build_http_client};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Provider clients built from configuration.
pub struct Sources {
    pub chuck: Arc<dyn JokeSource>,
    pub dad: Arc<dyn JokeSource>,
}

/// Builds both provider clients on one shared `reqwest::Client`.
///
/// # Errors
///
/// Returns an error if an endpoint URL is invalid or the HTTP client cannot
/// be initialized.
pub fn build_sources(config: &Config) -> Result<Sources> {
    let client =
        build_http_client(config.upstream_timeout()).context("Failed to build HTTP client")?;

    let chuck = ChuckNorrisClient::new(client.clone(), config.chuck_norris_endpoint()?);
    let dad = DadJokeClient::new(client, config.dad_joke_endpoint()?);

    Ok(Sources {
        chuck: Arc::new(chuck),
        dad: Arc::new(dad),
    })
}

/// Wires services into the handler state.
pub fn build_state(config: &Config, sources: Sources) -> AppState {
    let paired_jokes_service = Arc::new(PairedJokesService::new(
        sources.chuck.clone(),
        sources.dad.clone(),
    ));
    let joke_service = Arc::new(JokeService::new(vec![sources.chuck, sources.dad]));

    AppState::new(paired_jokes_service, joke_service)
        .with_paired_limits(config.paired_jokes_count, config.max_paired_jokes_count)
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The provider clients cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let sources = build_sources(&config)?;
    let state = build_state(&config, sources);

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
