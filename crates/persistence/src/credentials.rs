// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password hashing for seller credentials.

use thiserror::Error;

/// Work factor for new password hashes.
pub const BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Credential errors.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The password could not be hashed.
    #[error("Failed to hash password: {0}")]
    Hash(#[source] bcrypt::BcryptError),

    /// The stored hash could not be checked.
    #[error("Failed to verify password: {0}")]
    Verify(#[source] bcrypt::BcryptError),
}

/// Hashes a clear-text password.
///
/// # Errors
///
/// Returns an error if bcrypt fails.
pub fn hash_password(password: &str) -> Result<String, CredentialError> {
    bcrypt::hash(password, BCRYPT_COST).map_err(CredentialError::Hash)
}

/// Verifies a password against a stored hash.
///
/// # Errors
///
/// Returns an error if the stored hash is malformed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, CredentialError> {
    bcrypt::verify(password, password_hash).map_err(CredentialError::Verify)
}
