// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use platemart_domain::{Lot, LotStatus, PlateInput, PriceInput, RegionInput};

/// A command represents user intent as data only.
///
/// Commands carry raw, unvalidated input. [`crate::apply`] is the only place
/// that turns them into lots or seller registrations.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// List a plate for sale.
    CreateLot {
        /// Plate fields as submitted.
        plate: PlateInput,
        /// Raw region token.
        region: RegionInput,
        /// Asking price; `None` when the client sent nothing.
        price: Option<PriceInput>,
        /// Seller display name.
        seller_name: Option<String>,
        /// The registered seller, when the lot is created alongside a registration.
        seller_id: Option<i64>,
        phone: Option<String>,
        description: Option<String>,
        comment: Option<String>,
    },
    /// Change an existing lot.
    UpdateLot {
        /// The lot as currently stored.
        current: Lot,
        /// The requested changes.
        patch: LotPatch,
    },
    /// Register a seller, or merge into an existing one with the same phone.
    RegisterSeller {
        full_name: Option<String>,
        phone_number: Option<String>,
        email: Option<String>,
        /// Clear-text password; hashed by the store, never kept here.
        password: String,
    },
}

/// Requested changes to a lot. `None` leaves a field untouched.
///
/// Plate and region changes re-run the whole canonicalization pipeline; the
/// stored plate is replaced, never edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LotPatch {
    pub plate: Option<PlateInput>,
    pub region: Option<RegionInput>,
    pub price: Option<PriceInput>,
    pub seller_name: Option<String>,
    /// A blank value clears the field.
    pub phone: Option<String>,
    /// A blank value clears the field.
    pub description: Option<String>,
    /// A blank value clears the field.
    pub comment: Option<String>,
    pub status: Option<LotStatus>,
}

impl LotPatch {
    /// Returns true if applying this patch would require a new plate record.
    #[must_use]
    pub const fn touches_plate(&self) -> bool {
        self.plate.is_some() || self.region.is_some()
    }
}
