// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::plate::PlateRecord;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Sale status of a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LotStatus {
    /// Listed and visible to buyers.
    #[default]
    Active,
    /// A buyer has been found; the lot is held.
    Reserved,
    /// The plate has been sold.
    Sold,
}

impl LotStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Reserved => "reserved",
            Self::Sold => "sold",
        }
    }
}

impl FromStr for LotStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "reserved" => Ok(Self::Reserved),
            "sold" => Ok(Self::Sold),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for LotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A plate offered for sale.
///
/// The embedded [`PlateRecord`] is never edited in place. Changing plate
/// fields means canonicalizing new input and replacing `plate` wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    /// The store-assigned identifier. `None` until persisted.
    pub lot_id: Option<i64>,
    /// The canonical plate.
    pub plate: PlateRecord,
    /// Asking price, always finite and positive.
    pub price: f64,
    /// Display name of the seller.
    pub seller_name: String,
    /// The registered seller this lot belongs to, if any.
    pub seller_id: Option<i64>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub comment: Option<String>,
    /// When the lot was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub status: LotStatus,
}

impl Lot {
    /// Returns a copy of this lot with the given identifier.
    #[must_use]
    pub fn with_id(mut self, lot_id: i64) -> Self {
        self.lot_id = Some(lot_id);
        self
    }
}

/// A registered seller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seller {
    /// The store-assigned identifier. `None` until persisted.
    pub seller_id: Option<i64>,
    pub full_name: String,
    /// Phone number reduced to its digits; the merge key for registrations.
    pub phone_number: String,
    pub email: Option<String>,
    /// bcrypt hash of the password. Plain-text passwords never reach this type.
    pub password_hash: String,
    pub created_at: OffsetDateTime,
}

/// Reduces a phone number to its digits so formatting differences do not
/// create duplicate sellers.
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
