// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seller registration with merge-by-phone.

use platemart::SellerRegistration;
use platemart_domain::Seller;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::credentials::{hash_password, verify_password};
use crate::error::PersistenceError;
use crate::repository::SellerRepository;

/// What a registration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// A new seller was stored.
    Created { seller_id: i64 },
    /// The phone number was already registered with the same password.
    Merged { seller_id: i64 },
}

impl RegistrationOutcome {
    #[must_use]
    pub const fn seller_id(&self) -> i64 {
        match self {
            Self::Created { seller_id } | Self::Merged { seller_id } => *seller_id,
        }
    }
}

/// Registers a seller, merging into an existing record with the same phone.
///
/// A merge never overwrites the stored name or password hash. It only fills
/// in an email address the existing record lacks.
///
/// # Errors
///
/// Returns `PersistenceError::CredentialMismatch` if the phone number is
/// registered and the password does not verify, or an error if the store or
/// bcrypt fails.
pub fn register_seller<R: SellerRepository + ?Sized>(
    repository: &mut R,
    registration: &SellerRegistration,
    now: OffsetDateTime,
) -> Result<RegistrationOutcome, PersistenceError> {
    if let Some(existing) = repository.find_seller_by_phone(&registration.phone_number)? {
        let seller_id: i64 = existing
            .seller_id
            .ok_or(PersistenceError::MissingIdentifier)?;

        if !verify_password(&registration.password, &existing.password_hash)? {
            warn!(seller_id, "Registration rejected: password mismatch");
            return Err(PersistenceError::CredentialMismatch {
                phone_number: registration.phone_number.clone(),
            });
        }

        if existing.email.is_none() {
            if let Some(email) = registration.email.as_deref() {
                repository.set_seller_email(seller_id, email)?;
            }
        }

        info!(seller_id, "Registration merged into existing seller");
        return Ok(RegistrationOutcome::Merged { seller_id });
    }

    let seller: Seller = Seller {
        seller_id: None,
        full_name: registration.full_name.clone(),
        phone_number: registration.phone_number.clone(),
        email: registration.email.clone(),
        password_hash: hash_password(&registration.password)?,
        created_at: now,
    };
    let seller_id: i64 = repository.insert_seller(&seller)?;

    Ok(RegistrationOutcome::Created { seller_id })
}
