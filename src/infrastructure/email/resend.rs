//! Resend-backed [`EmailProvider`].

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::domain::email::OutboundEmail;
use crate::domain::provider::{EmailProvider, ProviderError, SendReceipt};

/// Resend send endpoint.
pub const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Sends mail through `POST {endpoint}` with a bearer credential.
///
/// No timeout or retry is layered on top of the `reqwest` defaults: a call
/// runs until the provider answers or the connection fails.
#[derive(Debug, Clone)]
pub struct ResendProvider {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl ResendProvider {
    pub fn new(endpoint: Url, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            api_key: api_key.into(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Decodes a response body as JSON, keeping raw text when it is not.
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Object(Default::default());
    }

    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt, ProviderError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response.bytes().await.unwrap_or_default();
        let body = parse_body(&bytes);

        if !status.is_success() {
            return Err(ProviderError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let id = body.get("id").and_then(Value::as_str).map(str::to_string);

        Ok(SendReceipt { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body_json() {
        assert_eq!(parse_body(br#"{"id":"abc"}"#), json!({"id": "abc"}));
    }

    #[test]
    fn test_parse_body_text() {
        assert_eq!(parse_body(b"Bad Gateway"), json!("Bad Gateway"));
    }

    #[test]
    fn test_parse_body_empty() {
        assert_eq!(parse_body(b""), json!({}));
    }

    #[test]
    fn test_default_endpoint_parses() {
        let provider = ResendProvider::new(RESEND_API_URL.parse().unwrap(), "re_test");

        assert_eq!(provider.endpoint().host_str(), Some("api.resend.com"));
    }
}
