//! API route configuration.

use crate::api::handlers::{contact_handler, method_not_allowed_handler, preflight_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Contact relay routes.
///
/// # Endpoints
///
/// - `POST    /contact` - Validate and relay a submission
/// - `OPTIONS /contact` - CORS pre-flight
/// - any other method   - `405 Method Not Allowed`
pub fn contact_routes() -> Router<AppState> {
    Router::new().route(
        "/contact",
        post(contact_handler)
            .options(preflight_handler)
            .fallback(method_not_allowed_handler),
    )
}
