//! HTTP server initialization and runtime setup.
//!
//! Wires the provider client, the contact service and the Axum server lifecycle.

use crate::application::services::ContactService;
use crate::config::Config;
use crate::infrastructure::email::ResendProvider;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Resend provider client
/// - Contact service
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// A missing `RESEND_API_KEY` does not prevent startup: the provider is
/// built with an empty credential that the service never uses, because
/// every submission is rejected before delivery.
///
/// # Errors
///
/// Returns an error if:
/// - The provider URL or listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let relay = config.relay();

    let provider = ResendProvider::new(
        config.provider_url()?,
        relay.api_key.clone().unwrap_or_default(),
    );
    if relay.is_configured() {
        tracing::info!("Email provider ready ({})", provider.endpoint());
    } else {
        tracing::warn!("Email provider disabled: RESEND_API_KEY is not set");
    }

    let contact_service = Arc::new(ContactService::new(relay, Arc::new(provider)));
    let state = AppState::new(contact_service, config.body_limit_bytes);

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
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
