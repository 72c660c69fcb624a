use std::sync::Arc;

use crate::application::services::ContactService;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<ContactService>,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

impl AppState {
    pub fn new(contact_service: Arc<ContactService>, body_limit: usize) -> Self {
        Self {
            contact_service,
            body_limit,
        }
    }
}
