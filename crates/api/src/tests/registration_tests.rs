// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use platemart_domain::{Lot, Seller};
use platemart_persistence::{InMemoryStore, LotRepository, PersistenceError, SellerRepository};
use serde_json::{Value, json};

use crate::tests::helpers::create_test_time;
use crate::{
    ApiError, CreateLotWithRegistrationResponse, RegisterSellerRequest, RegisterSellerResponse,
    create_lot_with_registration, register_seller,
};

/// Stores lots normally but refuses to write sellers.
struct SellerWriteFails {
    inner: InMemoryStore,
}

impl LotRepository for SellerWriteFails {
    fn insert_lot(&mut self, lot: &Lot) -> Result<i64, PersistenceError> {
        self.inner.insert_lot(lot)
    }

    fn get_lot(&mut self, lot_id: i64) -> Result<Lot, PersistenceError> {
        self.inner.get_lot(lot_id)
    }

    fn list_lots(&mut self) -> Result<Vec<Lot>, PersistenceError> {
        self.inner.list_lots()
    }

    fn update_lot(&mut self, lot: &Lot) -> Result<(), PersistenceError> {
        self.inner.update_lot(lot)
    }

    fn delete_lot(&mut self, lot_id: i64) -> Result<(), PersistenceError> {
        self.inner.delete_lot(lot_id)
    }
}

impl SellerRepository for SellerWriteFails {
    fn find_seller_by_phone(
        &mut self,
        phone_number: &str,
    ) -> Result<Option<Seller>, PersistenceError> {
        self.inner.find_seller_by_phone(phone_number)
    }

    fn insert_seller(&mut self, _seller: &Seller) -> Result<i64, PersistenceError> {
        Err(PersistenceError::DatabaseError(String::from("disk full")))
    }

    fn set_seller_email(&mut self, seller_id: i64, email: &str) -> Result<(), PersistenceError> {
        self.inner.set_seller_email(seller_id, email)
    }
}

fn create_request(phone: &str, password: &str) -> RegisterSellerRequest {
    RegisterSellerRequest {
        full_name: Some(String::from("Анна Смирнова")),
        phone_number: Some(String::from(phone)),
        email: None,
        password: String::from(password),
    }
}

fn create_registration_payload(series_fields: [&str; 6], password: &str) -> Value {
    json!({
        "firstLetter": series_fields[0],
        "firstDigit": series_fields[1],
        "secondDigit": series_fields[2],
        "thirdDigit": series_fields[3],
        "secondLetter": series_fields[4],
        "thirdLetter": series_fields[5],
        "regionId": 77,
        "price": 500000,
        "fullName": "Анна Смирнова",
        "phoneNumber": "+7 (900) 111-22-33",
        "email": "anna@example.com",
        "password": password,
        "comment": "Торг уместен"
    })
}

#[test]
fn test_register_then_merge() {
    let mut store: InMemoryStore = InMemoryStore::new();

    let first: RegisterSellerResponse =
        register_seller(&mut store, create_request("8 900 111 22 33", "secret1"), create_test_time())
            .unwrap();
    let second: RegisterSellerResponse =
        register_seller(&mut store, create_request("89001112233", "secret1"), create_test_time())
            .unwrap();

    assert!(!first.merged);
    assert!(second.merged);
    assert_eq!(first.seller_id, second.seller_id);
}

#[test]
fn test_register_with_wrong_password_for_known_phone() {
    let mut store: InMemoryStore = InMemoryStore::new();
    register_seller(&mut store, create_request("89001112233", "secret1"), create_test_time())
        .unwrap();

    let result: Result<RegisterSellerResponse, ApiError> =
        register_seller(&mut store, create_request("89001112233", "guess-me"), create_test_time());

    assert!(matches!(result, Err(ApiError::AuthenticationFailed { .. })));
}

#[test]
fn test_register_with_short_password() {
    let mut store: InMemoryStore = InMemoryStore::new();

    let result: Result<RegisterSellerResponse, ApiError> =
        register_seller(&mut store, create_request("89001112233", "123"), create_test_time());

    assert_eq!(
        result,
        Err(ApiError::InvalidInput {
            field: String::from("password"),
            message: String::from("Password must be at least 6 characters long"),
        })
    );
}

#[test]
fn test_create_lot_with_registration() {
    let mut store: InMemoryStore = InMemoryStore::new();

    let response: CreateLotWithRegistrationResponse = create_lot_with_registration(
        &mut store,
        &create_registration_payload(["Е", "0", "0", "7", "К", "Х"], "secret1"),
        create_test_time(),
    )
    .unwrap();

    assert!(!response.merged);
    assert_eq!(response.lot.seller_id, Some(response.seller_id));
    assert_eq!(response.lot.display_number, "Е007КХ 77");
    assert_eq!(response.lot.category, "vip");
    assert_eq!(response.lot.seller_name, "Анна Смирнова");
    assert_eq!(response.lot.comment.as_deref(), Some("Торг уместен"));

    let seller = store.find_seller_by_phone("79001112233").unwrap().unwrap();
    assert_eq!(seller.email.as_deref(), Some("anna@example.com"));
}

#[test]
fn test_invalid_plate_does_not_register_seller() {
    let mut store: InMemoryStore = InMemoryStore::new();

    let result: Result<CreateLotWithRegistrationResponse, ApiError> = create_lot_with_registration(
        &mut store,
        &create_registration_payload(["Е", "0", "0", "", "К", "Х"], "secret1"),
        create_test_time(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "series"
    ));
    assert_eq!(store.find_seller_by_phone("79001112233").unwrap(), None);
    assert!(store.list_lots().unwrap().is_empty());
}

#[test]
fn test_failed_seller_write_withdraws_lot() {
    let mut store: SellerWriteFails = SellerWriteFails {
        inner: InMemoryStore::new(),
    };

    let result: Result<CreateLotWithRegistrationResponse, ApiError> = create_lot_with_registration(
        &mut store,
        &create_registration_payload(["Е", "0", "0", "7", "К", "Х"], "secret1"),
        create_test_time(),
    );

    assert!(matches!(result, Err(ApiError::Internal { .. })));
    assert!(store.list_lots().unwrap().is_empty());
    assert_eq!(store.find_seller_by_phone("79001112233").unwrap(), None);
}

#[test]
fn test_wrong_password_with_lot_leaves_no_lot() {
    let mut store: InMemoryStore = InMemoryStore::new();
    register_seller(
        &mut store,
        create_request("+7 (900) 111-22-33", "secret1"),
        create_test_time(),
    )
    .unwrap();

    let result: Result<CreateLotWithRegistrationResponse, ApiError> = create_lot_with_registration(
        &mut store,
        &create_registration_payload(["Е", "0", "0", "7", "К", "Х"], "other-pass"),
        create_test_time(),
    );

    assert!(matches!(
        result,
        Err(ApiError::AuthenticationFailed { .. })
    ));
    assert!(store.list_lots().unwrap().is_empty());
}
