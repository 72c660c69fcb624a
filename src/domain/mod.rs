//! Domain layer: the submission model, its rules, and the delivery seam.
//!
//! # Modules
//!
//! - [`submission`] - Inbound request parsing and the validated [`submission::Submission`]
//! - [`validation`] - Field predicates shared with the form client
//! - [`email`] - Outbound email composition and HTML escaping
//! - [`provider`] - [`provider::EmailProvider`] trait implemented in the infrastructure layer

pub mod email;
pub mod provider;
pub mod submission;
pub mod validation;

pub use email::OutboundEmail;
pub use provider::{EmailProvider, ProviderError, SendReceipt};
pub use submission::{ContactRequest, RequestContext, Submission};

#[cfg(test)]
pub use provider::MockEmailProvider;
