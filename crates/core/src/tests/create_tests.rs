// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_lot_command, create_test_time};
use crate::{Command, CoreError, TransitionResult, apply};
use platemart_domain::{
    Category, DomainError, Lot, LotStatus, PlateInput, PriceInput, RegionInput,
};

fn created_lot(command: Command) -> Lot {
    match apply(command, create_test_time()).unwrap() {
        TransitionResult::LotCreated(lot) => lot,
        other => panic!("expected LotCreated, got {other:?}"),
    }
}

#[test]
fn test_create_lot_canonicalizes_and_classifies() {
    let lot: Lot = created_lot(create_lot_command("м 777 мм", "77", 1_000_000.0));

    assert_eq!(lot.lot_id, None);
    assert_eq!(lot.plate.raw_series(), "М777ММ");
    assert_eq!(lot.plate.region_code(), "77");
    assert_eq!(lot.plate.category(), Category::Vip);
    assert_eq!(lot.status, LotStatus::Active);
    assert_eq!(lot.created_at, create_test_time());
    assert_eq!(lot.phone.as_deref(), Some("+7 900 123-45-67"));
}

#[test]
fn test_create_lot_from_discrete_fields() {
    let command: Command = Command::CreateLot {
        plate: PlateInput::from_fields(["К", "Х", "Х", "1", "2", "1"]),
        region: RegionInput::Text(String::from("178 RUS")),
        price: Some(PriceInput::from("250000")),
        seller_name: Some(String::from("  Анна  ")),
        seller_id: Some(3),
        phone: None,
        description: Some(String::from("   ")),
        comment: Some(String::from("торг")),
    };
    let lot: Lot = created_lot(command);

    assert_eq!(lot.plate.raw_series(), "К121ХХ");
    assert_eq!(lot.plate.region_code(), "178");
    assert_eq!(lot.plate.category(), Category::Mirror);
    assert!((lot.price - 250_000.0).abs() < f64::EPSILON);
    assert_eq!(lot.seller_name, "Анна");
    assert_eq!(lot.seller_id, Some(3));
    assert_eq!(lot.description, None);
    assert_eq!(lot.comment.as_deref(), Some("торг"));
}

#[test]
fn test_create_lot_rejects_incomplete_series() {
    let result: Result<TransitionResult, CoreError> =
        apply(create_lot_command("АВ12", "77", 100.0), create_test_time());

    assert!(matches!(
        result,
        Err(CoreError::InvalidField(
            DomainError::IncompleteSeries { .. }
        ))
    ));
}

#[test]
fn test_create_lot_rejects_missing_region() {
    let result: Result<TransitionResult, CoreError> =
        apply(create_lot_command("А123ВС", "rus", 100.0), create_test_time());

    assert_eq!(
        result,
        Err(CoreError::InvalidField(DomainError::MissingRegion))
    );
}

#[test]
fn test_create_lot_rejects_bad_prices() {
    for price in [0.0, -5.0] {
        let result: Result<TransitionResult, CoreError> =
            apply(create_lot_command("А123ВС", "77", price), create_test_time());
        assert!(matches!(
            result,
            Err(CoreError::InvalidField(DomainError::InvalidPrice { .. }))
        ));
    }
}

#[test]
fn test_create_lot_requires_price() {
    let mut command: Command = create_lot_command("А123ВС", "77", 100.0);
    if let Command::CreateLot { price, .. } = &mut command {
        *price = None;
    }

    assert_eq!(
        apply(command, create_test_time()),
        Err(CoreError::InvalidField(DomainError::MissingField {
            field: "price"
        }))
    );
}

#[test]
fn test_create_lot_requires_seller_name() {
    let mut command: Command = create_lot_command("А123ВС", "77", 100.0);
    if let Command::CreateLot { seller_name, .. } = &mut command {
        *seller_name = Some(String::from("   "));
    }

    assert_eq!(
        apply(command, create_test_time()),
        Err(CoreError::InvalidField(DomainError::MissingField {
            field: "sellerName"
        }))
    );
}

#[test]
fn test_plate_errors_are_reported_before_price_errors() {
    let result: Result<TransitionResult, CoreError> =
        apply(create_lot_command("А1", "77", -1.0), create_test_time());

    assert!(matches!(
        result,
        Err(CoreError::InvalidField(
            DomainError::IncompleteSeries { .. }
        ))
    ));
}
