//! Application services.
//!
//! - [`ContactService`] - Validates, composes and relays contact submissions

pub mod contact_service;

pub use contact_service::{ContactService, SubmitOutcome};
