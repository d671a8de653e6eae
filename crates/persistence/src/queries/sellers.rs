// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use platemart_domain::Seller;
use tracing::debug;

use crate::backend::sqlite::parse_timestamp;
use crate::diesel_schema::sellers;
use crate::error::PersistenceError;

/// Diesel Queryable struct for seller rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = sellers)]
struct SellerRow {
    seller_id: i64,
    full_name: String,
    phone_number: String,
    email: Option<String>,
    password_hash: String,
    created_at: String,
}

/// Retrieves a seller by normalized phone number.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no seller has this phone number.
pub fn find_seller_by_phone(
    conn: &mut SqliteConnection,
    phone_number: &str,
) -> Result<Option<Seller>, PersistenceError> {
    debug!(phone_number, "Looking up seller by phone");

    let result: Result<SellerRow, diesel::result::Error> = sellers::table
        .filter(sellers::phone_number.eq(phone_number))
        .select(SellerRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(Seller {
            seller_id: Some(row.seller_id),
            full_name: row.full_name,
            phone_number: row.phone_number,
            email: row.email,
            password_hash: row.password_hash,
            created_at: parse_timestamp(&row.created_at)?,
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
