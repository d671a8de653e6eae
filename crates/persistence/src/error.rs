// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::credentials::CredentialError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested lot does not exist.
    LotNotFound(i64),
    /// The requested seller does not exist.
    SellerNotFound(i64),
    /// The requested resource was not found.
    NotFound(String),
    /// A stored row no longer passes domain validation.
    CorruptRecord(String),
    /// An update was attempted on a lot that was never stored.
    MissingIdentifier,
    /// A registration reused a phone number with a different password.
    CredentialMismatch { phone_number: String },
    /// Password hashing or verification failed.
    CredentialFailure(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::LotNotFound(id) => write!(f, "Lot {id} not found"),
            Self::SellerNotFound(id) => write!(f, "Seller {id} not found"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::CorruptRecord(msg) => write!(f, "Corrupt record: {msg}"),
            Self::MissingIdentifier => write!(f, "Lot has no identifier"),
            Self::CredentialMismatch { phone_number } => write!(
                f,
                "A seller with phone number {phone_number} already exists and the password does not match"
            ),
            Self::CredentialFailure(msg) => write!(f, "Credential error: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<CredentialError> for PersistenceError {
    fn from(err: CredentialError) -> Self {
        Self::CredentialFailure(err.to_string())
    }
}
