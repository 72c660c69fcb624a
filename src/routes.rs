//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`       - Liveness and configuration check
//! - `/api/contact`       - Contact relay (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Origin gate and JSON response headers on `/api/contact`
//! - **Body limit** - Request bodies capped at [`AppState::body_limit`]

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// Trailing-slash normalization is applied by the caller in
/// [`crate::server::run`], since it has to wrap the router from outside.
pub fn app_router(state: AppState) -> Router {
    let api_router = api::routes::contact_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), cors::layer))
        .layer(DefaultBodyLimit::max(state.body_limit));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer())
}
