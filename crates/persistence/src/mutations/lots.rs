// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use platemart_domain::Lot;
use tracing::info;

use crate::backend::sqlite::{format_timestamp, last_insert_rowid};
use crate::diesel_schema::lots;
use crate::error::PersistenceError;

/// Inserts a lot.
///
/// # Errors
///
/// Returns an error if the insert fails, including when `seller_id` names a
/// seller that does not exist.
pub fn insert_lot(conn: &mut SqliteConnection, lot: &Lot) -> Result<i64, PersistenceError> {
    let created_at: String = format_timestamp(lot.created_at)?;

    diesel::insert_into(lots::table)
        .values((
            lots::raw_series.eq(lot.plate.raw_series()),
            lots::region_code.eq(lot.plate.region_code()),
            lots::category.eq(lot.plate.category().as_str()),
            lots::price.eq(lot.price),
            lots::seller_name.eq(&lot.seller_name),
            lots::seller_id.eq(lot.seller_id),
            lots::phone.eq(lot.phone.as_deref()),
            lots::description.eq(lot.description.as_deref()),
            lots::comment.eq(lot.comment.as_deref()),
            lots::created_at.eq(&created_at),
            lots::status.eq(lot.status.as_str()),
        ))
        .execute(conn)?;

    let lot_id: i64 = last_insert_rowid(conn)?;

    info!(
        lot_id,
        series = lot.plate.raw_series(),
        region = lot.plate.region_code(),
        category = %lot.plate.category(),
        "Lot created"
    );

    Ok(lot_id)
}

/// Overwrites every mutable column of a stored lot.
///
/// # Errors
///
/// Returns `PersistenceError::MissingIdentifier` if the lot has no ID and
/// `PersistenceError::LotNotFound` if no row was updated.
pub fn update_lot(conn: &mut SqliteConnection, lot: &Lot) -> Result<(), PersistenceError> {
    let lot_id: i64 = lot.lot_id.ok_or(PersistenceError::MissingIdentifier)?;

    let updated: usize = diesel::update(lots::table.filter(lots::lot_id.eq(lot_id)))
        .set((
            lots::raw_series.eq(lot.plate.raw_series()),
            lots::region_code.eq(lot.plate.region_code()),
            lots::category.eq(lot.plate.category().as_str()),
            lots::price.eq(lot.price),
            lots::seller_name.eq(&lot.seller_name),
            lots::seller_id.eq(lot.seller_id),
            lots::phone.eq(lot.phone.as_deref()),
            lots::description.eq(lot.description.as_deref()),
            lots::comment.eq(lot.comment.as_deref()),
            lots::status.eq(lot.status.as_str()),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::LotNotFound(lot_id));
    }

    info!(lot_id, status = %lot.status, "Lot updated");
    Ok(())
}

/// Deletes a lot.
///
/// # Errors
///
/// Returns `PersistenceError::LotNotFound` if no row was deleted.
pub fn delete_lot(conn: &mut SqliteConnection, lot_id: i64) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(lots::table.filter(lots::lot_id.eq(lot_id))).execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::LotNotFound(lot_id));
    }

    info!(lot_id, "Lot deleted");
    Ok(())
}
