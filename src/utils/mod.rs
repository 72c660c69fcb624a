//! Request handling helpers.
//!
//! - [`client_context`] - Client address, user agent and referer extraction

pub mod client_context;
