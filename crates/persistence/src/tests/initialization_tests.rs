// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use platemart_domain::Lot;

use crate::tests::create_test_lot;
use crate::{LotRepository, PersistenceError, SqliteStore};

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first: SqliteStore = SqliteStore::new_in_memory().unwrap();
    let mut second: SqliteStore = SqliteStore::new_in_memory().unwrap();

    first
        .insert_lot(&create_test_lot("А123ВС", "77", 100.0))
        .unwrap();

    assert_eq!(first.list_lots().unwrap().len(), 1);
    assert!(second.list_lots().unwrap().is_empty());
}

#[test]
fn test_file_database_survives_reopen() {
    let path: std::path::PathBuf = std::env::temp_dir().join(format!(
        "platemart_reopen_{}.sqlite3",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let lot_id: i64 = {
        let mut store: SqliteStore = SqliteStore::new_with_file(&path).unwrap();
        store
            .insert_lot(&create_test_lot("О001ОО", "77", 5_000_000.0))
            .unwrap()
    };

    let mut reopened: SqliteStore = SqliteStore::new_with_file(&path).unwrap();
    let lot: Lot = reopened.get_lot(lot_id).unwrap();
    assert_eq!(lot.plate.raw_series(), "О001ОО");

    drop(reopened);
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}

#[test]
fn test_lot_must_reference_existing_seller() {
    let mut store: SqliteStore = SqliteStore::new_in_memory().unwrap();
    let mut lot: Lot = create_test_lot("А123ВС", "77", 100.0);
    lot.seller_id = Some(999);

    let result: Result<i64, PersistenceError> = store.insert_lot(&lot);

    assert!(matches!(result, Err(PersistenceError::DatabaseError(_))));
}
