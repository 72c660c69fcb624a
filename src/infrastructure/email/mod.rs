//! Email provider implementations.
//!
//! - [`ResendProvider`] - Production provider over the Resend HTTP API

mod resend;

pub use resend::{RESEND_API_URL, ResendProvider};
