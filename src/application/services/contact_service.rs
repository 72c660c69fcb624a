//! Contact submission pipeline.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::RelayConfig;
use crate::domain::email::compose;
use crate::domain::provider::{EmailProvider, ProviderError};
use crate::domain::submission::{ContactRequest, RequestContext, Submission};
use crate::error::AppError;

/// Terminal state of an accepted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Honeypot was filled. Reported as success, nothing sent.
    Discarded,
    /// The provider accepted the message.
    Delivered { id: Option<String> },
}

/// Relays contact requests to the configured [`EmailProvider`].
///
/// Stateless between calls: each [`submit`](Self::submit) runs the gates in
/// order (credential, honeypot, fields), composes the email and awaits one
/// provider call. There are no retries.
pub struct ContactService {
    config: RelayConfig,
    provider: Arc<dyn EmailProvider>,
}

impl ContactService {
    pub fn new(config: RelayConfig, provider: Arc<dyn EmailProvider>) -> Self {
        Self { config, provider }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Validates, composes and delivers one request.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotConfigured`] when no credential is set, before any other check
    /// - [`AppError::Validation`] for the first failing field (name, email, message)
    /// - [`AppError::DeliveryFailed`] when the provider rejects the message
    /// - [`AppError::Internal`] when the provider cannot be reached or rendering fails
    pub async fn submit(
        &self,
        request: ContactRequest,
        context: RequestContext,
    ) -> Result<SubmitOutcome, AppError> {
        if !self.config.is_configured() {
            error!("RESEND_API_KEY is not set, rejecting submission");
            return Err(AppError::NotConfigured);
        }

        if request.is_honeypot_filled() {
            info!(ip = %context.client_ip, "Honeypot filled, discarding submission");
            return Ok(SubmitOutcome::Discarded);
        }

        let submission = Submission::parse(&request).map_err(|e| {
            warn!(field = e.field, "Submission rejected");
            AppError::validation(e.message)
        })?;

        let email = compose(
            &submission,
            &context,
            &self.config.sender,
            &self.config.recipient,
        )
        .map_err(|e| {
            error!("Failed to render contact email: {}", e);
            AppError::Internal
        })?;

        match self.provider.send(&email).await {
            Ok(receipt) => {
                info!(id = ?receipt.id, "Contact message delivered");
                Ok(SubmitOutcome::Delivered { id: receipt.id })
            }
            Err(ProviderError::Rejected { status, body }) => {
                error!(status, %body, "Resend error");
                Err(AppError::DeliveryFailed)
            }
            Err(e) => {
                error!("Contact endpoint error: {}", e);
                Err(AppError::Internal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::provider::{MockEmailProvider, SendReceipt};
    use serde_json::json;

    fn configured() -> RelayConfig {
        RelayConfig {
            api_key: Some("re_test".to_string()),
            ..Default::default()
        }
    }

    fn valid_request() -> ContactRequest {
        ContactRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            message: "Quiero una demo".to_string(),
            ..Default::default()
        }
    }

    fn service(config: RelayConfig, provider: MockEmailProvider) -> ContactService {
        ContactService::new(config, Arc::new(provider))
    }

    #[tokio::test]
    async fn test_submit_delivers() {
        let mut mock = MockEmailProvider::new();
        mock.expect_send()
            .withf(|email| {
                email.to == vec!["diego@automatech.cx".to_string()]
                    && email.reply_to == "ana@example.com"
                    && email.subject == "Nueva solicitud — Ana"
            })
            .times(1)
            .returning(|_| {
                Ok(SendReceipt {
                    id: Some("msg_123".to_string()),
                })
            });

        let outcome = service(configured(), mock)
            .submit(valid_request(), RequestContext::default())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Delivered {
                id: Some("msg_123".to_string())
            }
        );
    }

    #[tokio::test]
    async fn test_submit_honeypot_sends_nothing() {
        let mut mock = MockEmailProvider::new();
        mock.expect_send().never();

        let mut request = valid_request();
        request.company = "ACME Bots".to_string();

        let outcome = service(configured(), mock)
            .submit(request, RequestContext::default())
            .await
            .unwrap();

        assert_eq!(outcome, SubmitOutcome::Discarded);
    }

    #[tokio::test]
    async fn test_submit_missing_key_precedes_validation() {
        let mut mock = MockEmailProvider::new();
        mock.expect_send().never();

        let result = service(RelayConfig::default(), mock)
            .submit(ContactRequest::default(), RequestContext::default())
            .await;

        assert_eq!(result.unwrap_err(), AppError::NotConfigured);
    }

    #[tokio::test]
    async fn test_submit_missing_key_precedes_honeypot() {
        let mut mock = MockEmailProvider::new();
        mock.expect_send().never();

        let mut request = valid_request();
        request.company = "filled".to_string();

        let result = service(RelayConfig::default(), mock)
            .submit(request, RequestContext::default())
            .await;

        assert_eq!(result.unwrap_err(), AppError::NotConfigured);
    }

    #[tokio::test]
    async fn test_submit_invalid_email() {
        let mut mock = MockEmailProvider::new();
        mock.expect_send().never();

        let mut request = valid_request();
        request.email = "a@b".to_string();

        let result = service(configured(), mock)
            .submit(request, RequestContext::default())
            .await;

        assert_eq!(result.unwrap_err(), AppError::validation("Email inválido"));
    }

    #[tokio::test]
    async fn test_submit_provider_rejection_is_opaque() {
        let mut mock = MockEmailProvider::new();
        mock.expect_send().times(1).returning(|_| {
            Err(ProviderError::Rejected {
                status: 422,
                body: json!({"name": "validation_error", "message": "Invalid `from` field"}),
            })
        });

        let result = service(configured(), mock)
            .submit(valid_request(), RequestContext::default())
            .await;

        let err = result.unwrap_err();
        assert_eq!(err, AppError::DeliveryFailed);
        assert!(!err.to_string().contains("from"));
    }

    #[tokio::test]
    async fn test_submit_transport_failure() {
        let mut mock = MockEmailProvider::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Err(ProviderError::Transport("connection refused".to_string())));

        let result = service(configured(), mock)
            .submit(valid_request(), RequestContext::default())
            .await;

        assert_eq!(result.unwrap_err(), AppError::Internal);
    }

    #[tokio::test]
    async fn test_submit_uses_configured_addresses() {
        let config = RelayConfig {
            api_key: Some("re_test".to_string()),
            sender: "Web <web@automatech.cx>".to_string(),
            recipient: "sales@automatech.cx".to_string(),
            allowed_origins: None,
        };

        let mut mock = MockEmailProvider::new();
        mock.expect_send()
            .withf(|email| {
                email.from == "Web <web@automatech.cx>"
                    && email.to == vec!["sales@automatech.cx".to_string()]
            })
            .times(1)
            .returning(|_| Ok(SendReceipt::default()));

        let outcome = service(config, mock)
            .submit(valid_request(), RequestContext::default())
            .await
            .unwrap();

        assert_eq!(outcome, SubmitOutcome::Delivered { id: None });
    }

    #[tokio::test]
    async fn test_submit_escapes_html_payload() {
        let mut mock = MockEmailProvider::new();
        mock.expect_send()
            .withf(|email| {
                email
                    .html
                    .contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;")
                    && !email.html.contains("<script>")
                    && email.text.contains("<script>alert('x')</script>")
            })
            .times(1)
            .returning(|_| Ok(SendReceipt::default()));

        let mut request = valid_request();
        request.message = "<script>alert('x')</script>".to_string();

        let result = service(configured(), mock)
            .submit(request, RequestContext::default())
            .await;

        assert!(result.is_ok());
    }
}
