//! Data Transfer Objects for API responses.
//!
//! Request bodies are parsed leniently in
//! [`crate::domain::submission::ContactRequest`], so only response shapes live here.

pub mod contact;
pub mod health;
