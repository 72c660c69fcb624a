//! # Contact Relay
//!
//! Relays a landing page's contact form to the Resend transactional email API.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Submission model, field rules, email composition,
//!   and the [`domain::EmailProvider`] trait
//! - **Application Layer** ([`application`]) - The relay pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - Resend HTTP client
//! - **API Layer** ([`api`]) - Handlers, response DTOs, and middleware
//! - **Client** ([`client`]) - Form controller for the submitting side
//!
//! ## Request Lifecycle
//!
//! Each `POST /api/contact` is handled on its own, with no shared mutable state:
//!
//! 1. Origin gate (only when `ALLOWED_ORIGINS` is set)
//! 2. Credential gate (`RESEND_API_KEY`)
//! 3. Honeypot check, answering `{"ok": true}` without sending anything
//! 4. Field validation, name → email → message
//! 5. One awaited call to the provider; no retries, no background delivery
//!
//! ## Quick Start
//!
//! ```bash
//! export RESEND_API_KEY="re_..."
//! export ALLOWED_ORIGINS="https://automatech.cx"   # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ContactService, SubmitOutcome};
    pub use crate::config::RelayConfig;
    pub use crate::domain::{
        ContactRequest, EmailProvider, OutboundEmail, ProviderError, RequestContext, SendReceipt,
        Submission,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
