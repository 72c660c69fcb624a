//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Relay Variables
//!
//! - `RESEND_API_KEY` - Provider credential. The service starts without it, but
//!   every submission is then answered with `500` (see [`RelayConfig::api_key`]).
//! - `RESEND_FROM` - Sender identity (default: `Automatech <onboarding@resend.dev>`)
//! - `CONTACT_TO` - Recipient address (default: `diego@automatech.cx`)
//! - `ALLOWED_ORIGINS` - Comma-separated origin allow-list (default: any origin)
//! - `RESEND_API_URL` - Provider send endpoint (default: Resend production API)
//!
//! ## Server Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BODY_LIMIT_BYTES` - Maximum request body size (default: 65536)
//!
//! Empty values are treated as unset.

use anyhow::{Context, Result};
use std::env;
use url::Url;

use crate::infrastructure::email::RESEND_API_URL;

pub const DEFAULT_SENDER: &str = "Automatech <onboarding@resend.dev>";
pub const DEFAULT_RECIPIENT: &str = "diego@automatech.cx";

/// Settings the contact handler consults on every request.
///
/// Built once from [`Config`] and shared through application state, so tests
/// can construct it directly instead of touching the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Provider credential. `None` makes every submission fail closed.
    pub api_key: Option<String>,
    pub sender: String,
    pub recipient: String,
    /// `None` accepts any origin and answers with `Access-Control-Allow-Origin: *`.
    pub allowed_origins: Option<Vec<String>>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            sender: DEFAULT_SENDER.to_string(),
            recipient: DEFAULT_RECIPIENT.to_string(),
            allowed_origins: None,
        }
    }
}

impl RelayConfig {
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub sender: String,
    pub recipient: String,
    pub allowed_origins: Option<Vec<String>>,
    pub provider_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Request bodies above this size are read as empty.
    pub body_limit_bytes: usize,
}

/// Reads a variable, treating an empty value as absent.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

/// Splits a comma-separated origin list, dropping blanks.
///
/// Returns `None` when nothing is left, which disables origin enforcement.
pub fn parse_allowed_origins(raw: &str) -> Option<Vec<String>> {
    let list: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if list.is_empty() { None } else { Some(list) }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BODY_LIMIT_BYTES` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let api_key = non_empty_var("RESEND_API_KEY");
        let sender = non_empty_var("RESEND_FROM").unwrap_or_else(|| DEFAULT_SENDER.to_string());
        let recipient =
            non_empty_var("CONTACT_TO").unwrap_or_else(|| DEFAULT_RECIPIENT.to_string());
        let allowed_origins = non_empty_var("ALLOWED_ORIGINS")
            .as_deref()
            .and_then(parse_allowed_origins);
        let provider_url =
            non_empty_var("RESEND_API_URL").unwrap_or_else(|| RESEND_API_URL.to_string());

        let listen_addr = non_empty_var("LISTEN").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let log_level = non_empty_var("RUST_LOG").unwrap_or_else(|| "info".to_string());
        let log_format = non_empty_var("LOG_FORMAT").unwrap_or_else(|| "text".to_string());

        let body_limit_bytes = match non_empty_var("BODY_LIMIT_BYTES") {
            Some(v) => v
                .parse()
                .with_context(|| format!("BODY_LIMIT_BYTES must be a number, got '{v}'"))?,
            None => 64 * 1024,
        };

        Ok(Self {
            api_key,
            sender,
            recipient,
            allowed_origins,
            provider_url,
            listen_addr,
            log_level,
            log_format,
            body_limit_bytes,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` has no port
    /// - `provider_url` is not an http(s) URL
    /// - `body_limit_bytes` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let url = self.provider_url()?;
        if url.scheme() != "https" && url.scheme() != "http" {
            anyhow::bail!(
                "RESEND_API_URL must use http or https, got '{}'",
                self.provider_url
            );
        }

        if self.body_limit_bytes == 0 {
            anyhow::bail!("BODY_LIMIT_BYTES must be greater than 0");
        }

        Ok(())
    }

    /// Parsed provider endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if `RESEND_API_URL` is not a valid URL.
    pub fn provider_url(&self) -> Result<Url> {
        Url::parse(&self.provider_url)
            .with_context(|| format!("RESEND_API_URL is not a valid URL: '{}'", self.provider_url))
    }

    /// Per-request settings for the contact handler.
    pub fn relay(&self) -> RelayConfig {
        RelayConfig {
            api_key: self.api_key.clone(),
            sender: self.sender.clone(),
            recipient: self.recipient.clone(),
            allowed_origins: self.allowed_origins.clone(),
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match self.api_key.as_deref() {
            Some(key) => tracing::info!("  Resend API key: {}", mask_secret(key)),
            None => tracing::warn!("  Resend API key: missing, submissions will be rejected"),
        }
        tracing::info!("  Provider endpoint: {}", self.provider_url);
        tracing::info!("  Sender: {}", self.sender);
        tracing::info!("  Recipient: {}", self.recipient);
        match &self.allowed_origins {
            Some(list) => tracing::info!("  Allowed origins: {}", list.join(", ")),
            None => tracing::info!("  Allowed origins: any"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Body limit: {} bytes", self.body_limit_bytes);
    }
}

/// Keeps the first four characters of a secret.
///
/// `re_123456789` → `re_1***`
fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    format!("{visible}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
