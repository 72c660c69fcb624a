//! Cross-origin policy for the contact endpoint.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::error::AppError;
use crate::state::AppState;

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// How a request's `Origin` header relates to the configured allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// No `Origin` header (or an empty one).
    Absent,
    /// Permitted; carries the `Access-Control-Allow-Origin` value to send.
    Allowed(HeaderValue),
    /// Present but not in the allow-list.
    Denied,
}

/// Evaluates `origin` against `allowed`.
///
/// Without an allow-list every origin is permitted and answered with `*`.
/// With one, permitted origins are reflected back verbatim.
pub fn evaluate(allowed: Option<&[String]>, origin: Option<&HeaderValue>) -> OriginDecision {
    let Some(origin) = origin.filter(|v| !v.is_empty()) else {
        return OriginDecision::Absent;
    };

    let Some(allowed) = allowed else {
        return OriginDecision::Allowed(HeaderValue::from_static("*"));
    };

    match origin.to_str() {
        Ok(value) if allowed.iter().any(|a| a == value) => OriginDecision::Allowed(origin.clone()),
        _ => OriginDecision::Denied,
    }
}

/// Applies the origin gate and the common response headers.
///
/// # Behavior
///
/// - `POST` from a denied origin is answered `403` without reaching the handler
/// - Other methods pass through regardless of origin
/// - Every response gets `Content-Type: application/json; charset=utf-8` and
///   `Vary: Origin`, plus `Access-Control-Allow-Origin` when the origin is permitted
///
/// # Example
///
/// ```rust,ignore
/// let contact = Router::new()
///     .route("/contact", post(contact_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), cors::layer));
/// ```
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let decision = evaluate(
        state.contact_service.config().allowed_origins.as_deref(),
        req.headers().get(header::ORIGIN),
    );

    let mut response = if req.method() == Method::POST && decision == OriginDecision::Denied {
        warn!(
            origin = ?req.headers().get(header::ORIGIN),
            "Rejected submission from disallowed origin"
        );
        AppError::Forbidden.into_response()
    } else {
        next.run(req).await
    };

    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
    headers.insert(header::VARY, HeaderValue::from_static("Origin"));
    if let OriginDecision::Allowed(value) = decision {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
    }

    response
}
