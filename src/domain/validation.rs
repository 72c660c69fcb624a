//! Field rules shared by the relay and the form client.
//!
//! The patterns are intentionally loose: `a..b@c.d` passes and quoted local
//! parts fail. Tightening them would start rejecting real visitors.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use validator::ValidateLength;

pub const NAME_MAX_CHARS: u64 = 120;
pub const EMAIL_MAX_CHARS: u64 = 254;
pub const MESSAGE_MAX_CHARS: u64 = 5000;

pub const NAME_INVALID: &str = "Nombre inválido";
pub const EMAIL_INVALID: &str = "Email inválido";
pub const MESSAGE_INVALID: &str = "Mensaje inválido";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s+()-]{9,}$").unwrap());

/// A single named predicate with the message reported when it fails.
pub struct Rule<T: ?Sized> {
    pub field: &'static str,
    pub check: fn(&T) -> bool,
    pub message: &'static str,
}

/// First rule that rejects a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Evaluates `rules` in order and stops at the first failure.
pub fn check_rules<T: ?Sized>(rules: &[Rule<T>], value: &T) -> Result<(), ValidationError> {
    match rules.iter().find(|rule| !(rule.check)(value)) {
        Some(rule) => Err(ValidationError {
            field: rule.field,
            message: rule.message,
        }),
        None => Ok(()),
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_email_shape(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Digits, spaces and `+()-`, at least nine characters.
pub fn is_phone_shape(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Non-empty and at most `max` characters. Counts chars, not bytes.
pub fn is_within(value: &str, max: u64) -> bool {
    value.validate_length(Some(1), Some(max), None)
}

pub fn is_valid_name(value: &str) -> bool {
    is_within(value, NAME_MAX_CHARS)
}

pub fn is_valid_email(value: &str) -> bool {
    is_within(value, EMAIL_MAX_CHARS) && is_email_shape(value)
}

pub fn is_valid_message(value: &str) -> bool {
    is_within(value, MESSAGE_MAX_CHARS)
}
