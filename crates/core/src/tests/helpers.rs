// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, TransitionResult, apply};
use platemart_domain::{Lot, PlateInput, PriceInput, RegionInput};
use time::{Duration, OffsetDateTime};

pub fn create_test_time() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH + Duration::days(20_000)
}

pub fn create_lot_command(series: &str, region: &str, price: f64) -> Command {
    Command::CreateLot {
        plate: PlateInput::from_series(series),
        region: RegionInput::Text(String::from(region)),
        price: Some(PriceInput::Number(price)),
        seller_name: Some(String::from("Иван Петров")),
        seller_id: None,
        phone: Some(String::from("+7 900 123-45-67")),
        description: None,
        comment: None,
    }
}

/// Creates a stored-looking lot through the real pipeline.
pub fn create_test_lot(lot_id: i64, series: &str, region: &str, price: f64) -> Lot {
    match apply(create_lot_command(series, region, price), create_test_time()).unwrap() {
        TransitionResult::LotCreated(lot) => lot.with_id(lot_id),
        other => panic!("expected LotCreated, got {other:?}"),
    }
}
