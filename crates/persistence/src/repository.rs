// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage interfaces injected into the API layer.
//!
//! Every method takes `&mut self`: a `SqliteConnection` needs exclusive access
//! even to read, and callers already serialize access behind a mutex.

use platemart_domain::{Lot, Seller};

use crate::error::PersistenceError;

/// Storage for lots.
pub trait LotRepository {
    /// Stores a new lot and returns its identifier. Any `lot_id` on the input
    /// is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the lot cannot be written.
    fn insert_lot(&mut self, lot: &Lot) -> Result<i64, PersistenceError>;

    /// Loads one lot.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::LotNotFound` if no lot has this identifier.
    fn get_lot(&mut self, lot_id: i64) -> Result<Lot, PersistenceError>;

    /// Loads every lot in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_lots(&mut self) -> Result<Vec<Lot>, PersistenceError>;

    /// Replaces a stored lot. The creation time is never changed.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::MissingIdentifier` if `lot.lot_id` is `None`
    /// and `PersistenceError::LotNotFound` if no such lot is stored.
    fn update_lot(&mut self, lot: &Lot) -> Result<(), PersistenceError>;

    /// Removes a lot.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::LotNotFound` if no lot has this identifier.
    fn delete_lot(&mut self, lot_id: i64) -> Result<(), PersistenceError>;
}

/// Storage for registered sellers.
pub trait SellerRepository {
    /// Looks a seller up by normalized phone number.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn find_seller_by_phone(&mut self, phone_number: &str)
    -> Result<Option<Seller>, PersistenceError>;

    /// Stores a new seller and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the seller cannot be written.
    fn insert_seller(&mut self, seller: &Seller) -> Result<i64, PersistenceError>;

    /// Sets the email address of an existing seller.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::SellerNotFound` if no seller has this identifier.
    fn set_seller_email(&mut self, seller_id: i64, email: &str) -> Result<(), PersistenceError>;
}

/// A complete store, shareable across the server's worker threads.
pub trait Repository: LotRepository + SellerRepository + Send {}

impl<T: LotRepository + SellerRepository + Send> Repository for T {}
