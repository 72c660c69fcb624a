//! HTTP API layer.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to the relay's JSON contract.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Cross-origin policy and request tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
