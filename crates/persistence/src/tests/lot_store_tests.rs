// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use platemart_domain::{Category, Lot, LotStatus, PlateRecord};
use time::Duration;

use crate::{LotRepository, PersistenceError};
use crate::tests::{create_test_lot, create_test_stores, create_test_time};

#[test]
fn test_insert_and_get_round_trip() {
    for (name, mut store) in create_test_stores() {
        let lot: Lot = create_test_lot("М777ММ", "77", 1_500_000.0);
        let lot_id: i64 = store.insert_lot(&lot).unwrap();

        let loaded: Lot = store.get_lot(lot_id).unwrap();

        assert_eq!(loaded, lot.clone().with_id(lot_id), "store: {name}");
        assert_eq!(loaded.plate.category(), Category::Vip, "store: {name}");
    }
}

#[test]
fn test_ids_are_sequential_and_list_is_in_insertion_order() {
    for (name, mut store) in create_test_stores() {
        let first: i64 = store
            .insert_lot(&create_test_lot("А123ВС", "77", 300.0))
            .unwrap();
        let second: i64 = store
            .insert_lot(&create_test_lot("В456ОР", "50", 100.0))
            .unwrap();

        assert!(second > first, "store: {name}");
        let ids: Vec<Option<i64>> = store
            .list_lots()
            .unwrap()
            .iter()
            .map(|lot| lot.lot_id)
            .collect();
        assert_eq!(ids, vec![Some(first), Some(second)], "store: {name}");
    }
}

#[test]
fn test_get_missing_lot() {
    for (name, mut store) in create_test_stores() {
        assert_eq!(
            store.get_lot(42),
            Err(PersistenceError::LotNotFound(42)),
            "store: {name}"
        );
    }
}

#[test]
fn test_update_replaces_plate_and_keeps_creation_time() {
    for (name, mut store) in create_test_stores() {
        let lot_id: i64 = store
            .insert_lot(&create_test_lot("А124ВС", "77", 100.0))
            .unwrap();

        let mut changed: Lot = store.get_lot(lot_id).unwrap();
        changed.plate = PlateRecord::from_series("А777ВС", "777").unwrap();
        changed.price = 250.0;
        changed.status = LotStatus::Sold;
        changed.comment = Some(String::from("продан"));
        changed.created_at = create_test_time() + Duration::days(1);
        store.update_lot(&changed).unwrap();

        let loaded: Lot = store.get_lot(lot_id).unwrap();
        assert_eq!(loaded.plate.raw_series(), "А777ВС", "store: {name}");
        assert_eq!(loaded.plate.region_code(), "777", "store: {name}");
        assert_eq!(loaded.plate.category(), Category::Vip, "store: {name}");
        assert_eq!(loaded.status, LotStatus::Sold, "store: {name}");
        assert_eq!(loaded.comment.as_deref(), Some("продан"), "store: {name}");
        assert_eq!(loaded.created_at, create_test_time(), "store: {name}");
    }
}

#[test]
fn test_update_requires_stored_lot() {
    for (name, mut store) in create_test_stores() {
        let lot: Lot = create_test_lot("А123ВС", "77", 100.0);

        assert_eq!(
            store.update_lot(&lot),
            Err(PersistenceError::MissingIdentifier),
            "store: {name}"
        );
        assert_eq!(
            store.update_lot(&lot.with_id(7)),
            Err(PersistenceError::LotNotFound(7)),
            "store: {name}"
        );
    }
}

#[test]
fn test_delete() {
    for (name, mut store) in create_test_stores() {
        let lot_id: i64 = store
            .insert_lot(&create_test_lot("А123ВС", "77", 100.0))
            .unwrap();

        store.delete_lot(lot_id).unwrap();

        assert_eq!(
            store.get_lot(lot_id),
            Err(PersistenceError::LotNotFound(lot_id)),
            "store: {name}"
        );
        assert_eq!(
            store.delete_lot(lot_id),
            Err(PersistenceError::LotNotFound(lot_id)),
            "store: {name}"
        );
    }
}
