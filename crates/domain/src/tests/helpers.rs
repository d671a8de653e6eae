// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Lot, LotStatus, PlateRecord};
use time::{Duration, OffsetDateTime};

pub fn create_test_plate(series: &str, region: &str) -> PlateRecord {
    PlateRecord::from_series(series, region).expect("valid test plate")
}

/// Builds an active lot created `minutes` after a fixed epoch.
pub fn create_test_lot(lot_id: i64, series: &str, region: &str, price: f64, minutes: i64) -> Lot {
    Lot {
        lot_id: Some(lot_id),
        plate: create_test_plate(series, region),
        price,
        seller_name: String::from("Иван Петров"),
        seller_id: None,
        phone: None,
        description: None,
        comment: None,
        created_at: OffsetDateTime::UNIX_EPOCH + Duration::minutes(minutes),
        status: LotStatus::Active,
    }
}
