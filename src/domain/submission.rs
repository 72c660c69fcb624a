//! Inbound contact request and its validated form.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::validation::{
    EMAIL_INVALID, MESSAGE_INVALID, NAME_INVALID, Rule, ValidationError, check_rules,
    is_valid_email, is_valid_message, is_valid_name,
};

/// Raw request body as posted by the form.
///
/// Deserialization never fails on field types: anything that is not a JSON
/// string becomes `""`, so a malformed field surfaces as a validation error
/// rather than a transport error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
    /// Honeypot. Hidden from humans, so anything here came from a bot.
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

impl ContactRequest {
    /// Parses a request body, falling back to an empty request.
    ///
    /// A body that is itself a JSON string is decoded a second time, which
    /// covers clients that double-encode the payload.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::String(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            Ok(value) => serde_json::from_value(value).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn is_honeypot_filled(&self) -> bool {
        !self.company.trim().is_empty()
    }
}

/// A request that passed every relay rule. Values are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn name_ok(s: &Submission) -> bool {
    is_valid_name(&s.name)
}

fn email_ok(s: &Submission) -> bool {
    is_valid_email(&s.email)
}

fn message_ok(s: &Submission) -> bool {
    is_valid_message(&s.message)
}

const RULES: [Rule<Submission>; 3] = [
    Rule {
        field: "name",
        check: name_ok,
        message: NAME_INVALID,
    },
    Rule {
        field: "email",
        check: email_ok,
        message: EMAIL_INVALID,
    },
    Rule {
        field: "message",
        check: message_ok,
        message: MESSAGE_INVALID,
    },
];

impl Submission {
    /// Trims the request fields and checks name, email, message in that order.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn parse(request: &ContactRequest) -> Result<Self, ValidationError> {
        let candidate = Self {
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            message: request.message.trim().to_string(),
        };

        check_rules(&RULES, &candidate)?;

        Ok(candidate)
    }
}

/// Request metadata appended to the outbound email for the recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub client_ip: String,
    pub user_agent: String,
    pub referer: String,
}
