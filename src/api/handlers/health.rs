//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthResponse, ProviderCheck, RelayHealth};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: The relay can deliver
/// - **503 Service Unavailable**: The provider credential is missing
///
/// The provider itself is not contacted; the check only reports whether
/// submissions would be attempted.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "email_provider": {
///       "status": "ok",
///       "message": "Credential configured"
///     }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let check = ProviderCheck::for_credential(state.contact_service.config().is_configured());
    let response = HealthResponse::from_check(check);

    let status = match response.status {
        RelayHealth::Healthy => StatusCode::OK,
        RelayHealth::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status, Json(response))
}
