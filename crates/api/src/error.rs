// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use platemart::CoreError;
use platemart_domain::DomainError;
use platemart_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error. Never shown to clients.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// Every domain error is an input problem; the field is the request field
/// the client should fix.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let field: &str = match &err {
        DomainError::IncompleteSeries { .. } => "series",
        DomainError::MissingRegion => "regionCode",
        DomainError::InvalidPrice { .. } => "price",
        DomainError::MissingField { field } => *field,
        DomainError::WeakPassword { .. } => "password",
        DomainError::InvalidPattern(_) => "pattern",
        DomainError::InvalidCategory(_) => "category",
        DomainError::InvalidStatus(_) => "status",
        DomainError::InvalidSort(_) => "sort",
    };

    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Translates a core error into an API error.
///
/// Field failures keep their field name. An update against an unstored lot is
/// a caller bug, so it is internal.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::InvalidField(domain_err) => translate_domain_error(domain_err),
        CoreError::UnstoredLot { .. } => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Missing records become `ResourceNotFound`, a password mismatch on an
/// existing phone becomes `AuthenticationFailed`, and everything else is
/// internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::LotNotFound(lot_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Lot"),
            message: format!("Lot {lot_id} does not exist"),
        },
        PersistenceError::SellerNotFound(seller_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Seller"),
            message: format!("Seller {seller_id} does not exist"),
        },
        PersistenceError::CredentialMismatch { .. } => ApiError::AuthenticationFailed {
            reason: err.to_string(),
        },
        _ => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
