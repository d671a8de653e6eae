// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use platemart_persistence::InMemoryStore;
use serde_json::{Value, json};
use time::{Duration, OffsetDateTime};

use crate::{LotInfo, create_lot};

pub fn create_test_time() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH + Duration::days(20_000)
}

pub fn create_test_payload(series: &str, region: &str, price: f64) -> Value {
    json!({
        "series": series,
        "regionCode": region,
        "price": price,
        "sellerName": "Иван Петров",
        "phone": "+7 900 123-45-67",
    })
}

/// Lists a lot created `minutes` after the test time.
pub fn list_test_lot(
    store: &mut InMemoryStore,
    series: &str,
    region: &str,
    price: f64,
    minutes: i64,
) -> LotInfo {
    create_lot(
        store,
        &create_test_payload(series, region, price),
        create_test_time() + Duration::minutes(minutes),
    )
    .unwrap()
    .lot
}
