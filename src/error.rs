//! Client-facing error envelope.
//!
//! Every failure leaves the relay as `{"ok": false, "error": "..."}` with a
//! status code chosen by the variant. Provider internals never appear here;
//! they are logged where they occur and mapped to [`AppError::DeliveryFailed`]
//! or [`AppError::Internal`].

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Methods advertised on the contact endpoint.
pub const ALLOWED_METHODS: &str = "POST, OPTIONS";

#[derive(Serialize)]
struct ErrorBody {
    ok: bool,
    error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Forbidden")]
    Forbidden,

    #[error("Server not configured (missing RESEND_API_KEY)")]
    NotConfigured,

    /// Field-level rejection; the message is shown to the user verbatim.
    #[error("{0}")]
    Validation(String),

    #[error("No se pudo enviar el mensaje. Inténtalo de nuevo.")]
    DeliveryFailed,

    #[error("Error del servidor. Inténtalo de nuevo.")]
    Internal,
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotConfigured | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::DeliveryFailed => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            ok: false,
            error: self.to_string(),
        };

        let mut response = (status, Json(body)).into_response();

        if self == AppError::MethodNotAllowed {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
        }

        response
    }
}
