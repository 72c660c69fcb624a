#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use contact_relay::application::services::ContactService;
use contact_relay::config::RelayConfig;
use contact_relay::domain::{EmailProvider, OutboundEmail, ProviderError, SendReceipt};
use contact_relay::routes::app_router;
use contact_relay::state::AppState;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use url::Url;

/// How a [`RecordingProvider`] answers.
pub enum Reply {
    Accept(Option<String>),
    Reject(u16, Value),
    Fail,
}

/// Provider double that records every email it is asked to send.
pub struct RecordingProvider {
    reply: Reply,
    sent: Mutex<Vec<OutboundEmail>>,
}

impl RecordingProvider {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn accepting(id: &str) -> Arc<Self> {
        Self::new(Reply::Accept(Some(id.to_string())))
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailProvider for RecordingProvider {
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt, ProviderError> {
        self.sent.lock().unwrap().push(email.clone());

        match &self.reply {
            Reply::Accept(id) => Ok(SendReceipt { id: id.clone() }),
            Reply::Reject(status, body) => Err(ProviderError::Rejected {
                status: *status,
                body: body.clone(),
            }),
            Reply::Fail => Err(ProviderError::Transport("connection refused".to_string())),
        }
    }
}

pub fn configured() -> RelayConfig {
    RelayConfig {
        api_key: Some("re_test".to_string()),
        ..Default::default()
    }
}

pub fn with_origins(origins: &[&str]) -> RelayConfig {
    RelayConfig {
        allowed_origins: Some(origins.iter().map(|o| o.to_string()).collect()),
        ..configured()
    }
}

pub fn create_test_state(config: RelayConfig, provider: Arc<dyn EmailProvider>) -> AppState {
    let service = Arc::new(ContactService::new(config, provider));
    AppState::new(service, 64 * 1024)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

pub fn valid_body() -> Value {
    json!({
        "name": "Ana García",
        "email": "ana@example.com",
        "phone": "+34 600 123 456",
        "message": "Quiero automatizar la facturación.",
        "company": ""
    })
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn_http(app: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/").parse().unwrap()
}

/// A local URL on which nothing is listening.
pub async fn closed_port_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}/").parse().unwrap()
}
