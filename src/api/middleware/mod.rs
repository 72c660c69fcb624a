//! HTTP middleware for request processing and protection.
//!
//! Provides the cross-origin policy and observability middleware.

pub mod cors;
pub mod tracing;
