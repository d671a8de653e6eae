// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use platemart_domain::Seller;
use tracing::info;

use crate::backend::sqlite::{format_timestamp, last_insert_rowid};
use crate::diesel_schema::sellers;
use crate::error::PersistenceError;

/// Inserts a seller. The password must already be hashed.
///
/// # Errors
///
/// Returns an error if the insert fails, including when the phone number is
/// already registered.
pub fn insert_seller(conn: &mut SqliteConnection, seller: &Seller) -> Result<i64, PersistenceError> {
    let created_at: String = format_timestamp(seller.created_at)?;

    diesel::insert_into(sellers::table)
        .values((
            sellers::full_name.eq(&seller.full_name),
            sellers::phone_number.eq(&seller.phone_number),
            sellers::email.eq(seller.email.as_deref()),
            sellers::password_hash.eq(&seller.password_hash),
            sellers::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    let seller_id: i64 = last_insert_rowid(conn)?;

    info!(seller_id, "Seller registered");
    Ok(seller_id)
}

/// Sets a seller's email address.
///
/// # Errors
///
/// Returns `PersistenceError::SellerNotFound` if no row was updated.
pub fn set_seller_email(
    conn: &mut SqliteConnection,
    seller_id: i64,
    email: &str,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(sellers::table.filter(sellers::seller_id.eq(seller_id)))
        .set(sellers::email.eq(email))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::SellerNotFound(seller_id));
    }

    info!(seller_id, "Seller email set");
    Ok(())
}
