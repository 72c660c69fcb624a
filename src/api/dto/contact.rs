//! DTOs for the contact endpoint.

use serde::Serialize;

use crate::application::services::SubmitOutcome;

/// Success body: `{"ok": true}` or `{"ok": true, "id": "..."}`.
///
/// Failures use the envelope produced by [`crate::error::AppError`].
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl From<SubmitOutcome> for ContactResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Discarded => Self { ok: true, id: None },
            SubmitOutcome::Delivered { id } => Self { ok: true, id },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_discarded_has_no_id() {
        let body = serde_json::to_value(ContactResponse::from(SubmitOutcome::Discarded)).unwrap();

        assert_eq!(body, json!({"ok": true}));
    }

    #[test]
    fn test_delivered_echoes_id() {
        let outcome = SubmitOutcome::Delivered {
            id: Some("4ef9a417-02e9-4d39-ad75-9611e0fcc33c".to_string()),
        };
        let body = serde_json::to_value(ContactResponse::from(outcome)).unwrap();

        assert_eq!(
            body,
            json!({"ok": true, "id": "4ef9a417-02e9-4d39-ad75-9611e0fcc33c"})
        );
    }
}
