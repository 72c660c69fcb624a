//! Application layer orchestrating domain rules and infrastructure.
//!
//! # Modules
//!
//! - [`services`] - Use-case services invoked by HTTP handlers

pub mod services;
