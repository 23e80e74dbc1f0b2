//! Raw console input to typed values
//!
//! Blank input for an optional field means "not provided".

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{value}' is not a valid {expected}")]
    Invalid {
        value: String,
        expected: &'static str,
    },
}

/// Parse a value the user must provide
pub fn parse_required<T: FromStr>(raw: &str, expected: &'static str) -> Result<T, InputError> {
    let value = raw.trim();
    value.parse().map_err(|_| InputError::Invalid {
        value: value.to_string(),
        expected,
    })
}

/// Parse a value the user may skip by leaving the line blank
pub fn parse_optional<T: FromStr>(
    raw: &str,
    expected: &'static str,
) -> Result<Option<T>, InputError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_required(raw, expected).map(Some)
}

/// Free text the user may skip by leaving the line empty
pub fn optional_text(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}
