// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use platemart_domain::{Lot, LotStatus, PlateRecord};
use std::str::FromStr;
use tracing::debug;

use crate::backend::sqlite::parse_timestamp;
use crate::diesel_schema::lots;
use crate::error::PersistenceError;

/// Diesel Queryable struct for lot rows.
///
/// The stored category is not read back: the plate is re-canonicalized from
/// its series and region, which classifies it again.
#[derive(Queryable, Selectable)]
#[diesel(table_name = lots)]
struct LotRow {
    lot_id: i64,
    raw_series: String,
    region_code: String,
    price: f64,
    seller_name: String,
    seller_id: Option<i64>,
    phone: Option<String>,
    description: Option<String>,
    comment: Option<String>,
    created_at: String,
    status: String,
}

impl LotRow {
    fn into_lot(self) -> Result<Lot, PersistenceError> {
        let plate: PlateRecord = PlateRecord::from_series(&self.raw_series, &self.region_code)
            .map_err(|e| PersistenceError::CorruptRecord(format!("lot {}: {e}", self.lot_id)))?;
        let status: LotStatus = LotStatus::from_str(&self.status)
            .map_err(|e| PersistenceError::CorruptRecord(format!("lot {}: {e}", self.lot_id)))?;

        Ok(Lot {
            lot_id: Some(self.lot_id),
            plate,
            price: self.price,
            seller_name: self.seller_name,
            seller_id: self.seller_id,
            phone: self.phone,
            description: self.description,
            comment: self.comment,
            created_at: parse_timestamp(&self.created_at)?,
            status,
        })
    }
}

/// Retrieves a lot by ID.
///
/// # Errors
///
/// Returns `PersistenceError::LotNotFound` if the lot does not exist, or an
/// error if the query fails or the row is corrupt.
pub fn get_lot(conn: &mut SqliteConnection, lot_id: i64) -> Result<Lot, PersistenceError> {
    debug!(lot_id, "Looking up lot");

    let result: Result<LotRow, diesel::result::Error> = lots::table
        .filter(lots::lot_id.eq(lot_id))
        .select(LotRow::as_select())
        .first(conn);

    match result {
        Ok(row) => row.into_lot(),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::LotNotFound(lot_id)),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves every lot, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or any row is corrupt.
pub fn list_lots(conn: &mut SqliteConnection) -> Result<Vec<Lot>, PersistenceError> {
    let rows: Vec<LotRow> = lots::table
        .order(lots::lot_id.asc())
        .select(LotRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded lots");
    rows.into_iter().map(LotRow::into_lot).collect()
}
