//! Transport from the form to the relay endpoint.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::client::form::ContactPayload;

/// Default relay path, relative to the site root.
pub const CONTACT_PATH: &str = "/api/contact";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("relay answered {status}: {message}")]
    Status { status: u16, message: String },

    /// 2xx without `"ok": true`, including bodies that are not JSON.
    #[error("relay did not confirm the submission: {0}")]
    NotConfirmed(String),
}

/// Relay acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayReply {
    pub id: Option<String>,
}

#[async_trait]
pub trait ContactTransport: Send + Sync {
    /// Posts the payload once. No retries.
    ///
    /// # Errors
    ///
    /// Any outcome other than a 2xx JSON body with `"ok": true`.
    async fn submit(&self, payload: &ContactPayload) -> Result<RelayReply, SubmitError>;
}

/// JSON-over-HTTP transport using `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Transport for `{site}/api/contact`.
    ///
    /// # Errors
    ///
    /// Returns an error if `site` cannot be joined with the contact path.
    pub fn for_site(site: &Url) -> Result<Self, url::ParseError> {
        Ok(Self::new(site.join(CONTACT_PATH)?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn error_message(body: &Value) -> String {
    body.get("error")
        .and_then(Value::as_str)
        .unwrap_or("Request failed")
        .to_string()
}

#[async_trait]
impl ContactTransport for HttpTransport {
    async fn submit(&self, payload: &ContactPayload) -> Result<RelayReply, SubmitError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        if body.get("ok") != Some(&Value::Bool(true)) {
            return Err(SubmitError::NotConfirmed(error_message(&body)));
        }

        Ok(RelayReply {
            id: body.get("id").and_then(Value::as_str).map(str::to_string),
        })
    }
}
