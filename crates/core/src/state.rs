// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use platemart_domain::Lot;

/// A seller registration that passed validation.
///
/// The phone number is already reduced to digits. The password is still in
/// clear text; the store hashes it before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerRegistration {
    pub full_name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub password: String,
}

/// The result of a successful command.
///
/// Transitions are atomic: a command either produces one of these or fails
/// without side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionResult {
    /// A new lot, not yet stored (`lot_id` is `None`).
    LotCreated(Lot),
    /// The replacement for an existing lot. Identity and creation time are kept.
    LotUpdated(Lot),
    /// A validated seller registration.
    SellerRegistered(SellerRegistration),
}

impl TransitionResult {
    /// Returns the lot this transition produced, if any.
    #[must_use]
    pub const fn lot(&self) -> Option<&Lot> {
        match self {
            Self::LotCreated(lot) | Self::LotUpdated(lot) => Some(lot),
            Self::SellerRegistered(_) => None,
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a> {
    /// The lots on the requested page, in sort order.
    pub items: Vec<&'a Lot>,
    /// Number of lots matching the query across all pages.
    pub total: usize,
}
