// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::alphabet::WILDCARD;
use crate::error::DomainError;
use crate::plate::PlateDraft;
use serde::{Deserialize, Serialize};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A price as submitted: clients send both numbers and numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PriceInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Validates that a draft resolved every letter and digit slot.
///
/// # Arguments
///
/// * `draft` - The parser output
///
/// # Returns
///
/// * `Ok(())` if no slot holds the wildcard
/// * `Err(DomainError::IncompleteSeries)` otherwise
///
/// # Errors
///
/// Returns an error naming the letters first when both triples are short.
pub fn validate_complete(draft: &PlateDraft) -> Result<(), DomainError> {
    // Rule: exactly three letters
    if draft.letters().contains(&WILDCARD) {
        return Err(DomainError::IncompleteSeries {
            reason: String::from("series must contain exactly three letters"),
        });
    }

    // Rule: exactly three digits
    if draft.digits().contains(&WILDCARD) {
        return Err(DomainError::IncompleteSeries {
            reason: String::from("series must contain exactly three digits"),
        });
    }

    Ok(())
}

/// Validates a price and coerces it to a number.
///
/// # Errors
///
/// Returns `DomainError::InvalidPrice` if the value does not parse, is not
/// finite, or is not strictly positive.
pub fn validate_price(price: &PriceInput) -> Result<f64, DomainError> {
    let (value, raw): (Option<f64>, String) = match price {
        PriceInput::Number(n) => (Some(*n), n.to_string()),
        PriceInput::Text(text) => (text.trim().parse::<f64>().ok(), text.clone()),
    };

    match value {
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(DomainError::InvalidPrice { value: raw }),
    }
}

/// Validates that a required text field is present after trimming.
///
/// # Errors
///
/// Returns `DomainError::MissingField` naming `field` when the value is
/// absent or blank.
pub fn validate_required(field: &'static str, value: Option<&str>) -> Result<String, DomainError> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(DomainError::MissingField { field }),
    }
}

/// Validates the registration password length.
///
/// Length is counted in characters, not bytes.
///
/// # Errors
///
/// Returns `DomainError::WeakPassword` if the password is shorter than
/// [`MIN_PASSWORD_LENGTH`].
pub fn validate_password(password: &str) -> Result<(), DomainError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::WeakPassword {
            min_length: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

/// Trims an optional text field, mapping blank values to `None`.
#[must_use]
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}
