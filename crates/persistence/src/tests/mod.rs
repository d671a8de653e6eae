// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;
mod lot_store_tests;

use platemart::SellerRegistration;
use platemart_domain::{Lot, LotStatus, PlateRecord};
use time::{Duration, OffsetDateTime};

use crate::{InMemoryStore, Repository, SqliteStore};

pub fn create_test_time() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH + Duration::days(20_000)
}

pub fn create_test_lot(series: &str, region: &str, price: f64) -> Lot {
    Lot {
        lot_id: None,
        plate: PlateRecord::from_series(series, region).expect("valid test plate"),
        price,
        seller_name: String::from("Иван Петров"),
        seller_id: None,
        phone: Some(String::from("+7 900 000-00-00")),
        description: Some(String::from("Номер с документами")),
        comment: None,
        created_at: create_test_time(),
        status: LotStatus::Active,
    }
}

pub fn create_test_registration(phone_number: &str, password: &str) -> SellerRegistration {
    SellerRegistration {
        full_name: String::from("Анна Смирнова"),
        phone_number: String::from(phone_number),
        email: None,
        password: String::from(password),
    }
}

/// Both store implementations, so behavioural tests run against each.
pub fn create_test_stores() -> Vec<(&'static str, Box<dyn Repository>)> {
    vec![
        ("memory", Box::new(InMemoryStore::new())),
        (
            "sqlite",
            Box::new(SqliteStore::new_in_memory().expect("in-memory sqlite store")),
        ),
    ]
}
