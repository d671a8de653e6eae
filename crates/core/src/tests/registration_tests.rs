// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_time;
use crate::{Command, CoreError, SellerRegistration, TransitionResult, apply};
use platemart_domain::DomainError;

fn register(full_name: &str, phone: &str, password: &str) -> Result<TransitionResult, CoreError> {
    apply(
        Command::RegisterSeller {
            full_name: Some(String::from(full_name)),
            phone_number: Some(String::from(phone)),
            email: Some(String::from(" anna@example.com ")),
            password: String::from(password),
        },
        create_test_time(),
    )
}

#[test]
fn test_valid_registration() {
    let result: TransitionResult = register(" Анна Смирнова ", "+7 (900) 555-12-34", "secret1").unwrap();

    assert_eq!(result.lot(), None);
    assert_eq!(
        result,
        TransitionResult::SellerRegistered(SellerRegistration {
            full_name: String::from("Анна Смирнова"),
            phone_number: String::from("79005551234"),
            email: Some(String::from("anna@example.com")),
            password: String::from("secret1"),
        })
    );
}

#[test]
fn test_registration_rejects_short_password() {
    assert_eq!(
        register("Анна", "89005551234", "12345"),
        Err(CoreError::InvalidField(DomainError::WeakPassword {
            min_length: 6
        }))
    );
}

#[test]
fn test_password_length_counts_characters() {
    assert!(register("Анна", "89005551234", "пароль").is_ok());
}

#[test]
fn test_registration_requires_name() {
    assert_eq!(
        register("", "89005551234", "secret1"),
        Err(CoreError::InvalidField(DomainError::MissingField {
            field: "fullName"
        }))
    );
}

#[test]
fn test_registration_requires_phone_digits() {
    for phone in ["", "n/a"] {
        assert_eq!(
            register("Анна", phone, "secret1"),
            Err(CoreError::InvalidField(DomainError::MissingField {
                field: "phoneNumber"
            }))
        );
    }
}
