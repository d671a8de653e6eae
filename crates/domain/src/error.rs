// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while canonicalizing or validating plate submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Fewer than three letters or three digits could be resolved.
    IncompleteSeries {
        /// A human-readable description of what is missing.
        reason: String,
    },
    /// The region token contained no digit characters.
    MissingRegion,
    /// The price is not a finite positive number.
    InvalidPrice {
        /// The raw value that was rejected.
        value: String,
    },
    /// A required contact field is absent or blank.
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },
    /// The password is shorter than the minimum length.
    WeakPassword {
        /// The minimum accepted length.
        min_length: usize,
    },
    /// A search pattern is malformed.
    InvalidPattern(String),
    /// An unknown category tag was supplied.
    InvalidCategory(String),
    /// An unknown lot status was supplied.
    InvalidStatus(String),
    /// An unknown sort specification was supplied.
    InvalidSort(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompleteSeries { reason } => write!(f, "Incomplete series: {reason}"),
            Self::MissingRegion => write!(f, "Region code must contain at least one digit"),
            Self::InvalidPrice { value } => {
                write!(f, "Invalid price '{value}': must be a positive number")
            }
            Self::MissingField { field } => write!(f, "Field '{field}' is required"),
            Self::WeakPassword { min_length } => {
                write!(f, "Password must be at least {min_length} characters long")
            }
            Self::InvalidPattern(msg) => write!(f, "Invalid search pattern: {msg}"),
            Self::InvalidCategory(value) => write!(f, "Unknown category '{value}'"),
            Self::InvalidStatus(value) => write!(f, "Unknown lot status '{value}'"),
            Self::InvalidSort(value) => write!(f, "Invalid sort specification '{value}'"),
        }
    }
}

impl std::error::Error for DomainError {}
