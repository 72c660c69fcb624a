//! Delivery seam between the relay and the email provider.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::email::OutboundEmail;

/// Provider acknowledgement for an accepted message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendReceipt {
    /// Provider message identifier, when the response carried one.
    pub id: Option<String>,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered with a non-success status.
    #[error("provider rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: Value },

    /// The request never produced a response.
    #[error("provider request failed: {0}")]
    Transport(String),
}

/// Sends one composed email.
///
/// # Implementations
///
/// - [`crate::infrastructure::email::ResendProvider`] - Resend HTTP API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Delivers `email`, awaiting the provider's answer.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Rejected`] on a non-2xx answer and
    /// [`ProviderError::Transport`] when the request fails outright.
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt, ProviderError>;
}
