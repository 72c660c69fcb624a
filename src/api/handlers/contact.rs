//! Handlers for the contact endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::warn;

use crate::api::dto::contact::ContactResponse;
use crate::domain::submission::ContactRequest;
use crate::error::{ALLOWED_METHODS, AppError};
use crate::state::AppState;
use crate::utils::client_context::ClientContext;

/// Relays a contact form submission.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ana",
///   "email": "ana@example.com",
///   "phone": "",
///   "message": "Quiero una demo",
///   "company": ""
/// }
/// ```
///
/// The body is read as raw bytes whatever the `Content-Type`. A body that
/// cannot be read or parsed counts as empty and fails field validation.
///
/// # Response
///
/// ```json
/// { "ok": true, "id": "4ef9a417-02e9-4d39-ad75-9611e0fcc33c" }
/// ```
///
/// # Errors
///
/// - `500` if the provider credential is missing
/// - `400` with the first failing field's message
/// - `502` if the provider rejects the message
/// - `500` if the provider is unreachable
pub async fn contact_handler(
    State(state): State<AppState>,
    ClientContext(context): ClientContext,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let request = match body {
        Ok(bytes) => ContactRequest::from_body(&bytes),
        Err(e) => {
            warn!("Unreadable request body: {}", e);
            ContactRequest::default()
        }
    };

    let outcome = state.contact_service.submit(request, context).await?;

    Ok(Json(outcome.into()))
}

/// Answers CORS pre-flight requests.
///
/// # Endpoint
///
/// `OPTIONS /api/contact`
///
/// Always `204 No Content`, whatever the body or headers.
pub async fn preflight_handler() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, Accept"),
        ],
    )
}

/// Rejects every method other than `POST` and `OPTIONS` with `405`.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
