// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the platemart marketplace.
//!
//! Lots and sellers are stored behind the [`LotRepository`] and
//! [`SellerRepository`] traits. Two stores implement them:
//!
//! - [`InMemoryStore`] keeps everything in process memory and is lost on exit.
//! - [`SqliteStore`] is built on Diesel. Migrations are embedded and run on
//!   open. File databases use WAL mode; in-memory databases get a unique
//!   shared-cache name per instance so tests stay isolated.
//!
//! Passwords are hashed with bcrypt before they reach either store.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use backend::sqlite::Location;
use diesel::SqliteConnection;
use platemart_domain::{Lot, Seller};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod credentials;
mod diesel_schema;
mod error;
mod memory;
mod mutations;
mod queries;
mod registration;
mod repository;

#[cfg(test)]
mod tests;

pub use credentials::{BCRYPT_COST, CredentialError, hash_password, verify_password};
pub use error::PersistenceError;
pub use memory::InMemoryStore;
pub use registration::{RegistrationOutcome, register_seller};
pub use repository::{LotRepository, Repository, SellerRepository};

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A store backed by a single `SQLite` connection.
pub struct SqliteStore {
    conn: SqliteConnection,
}

impl SqliteStore {
    /// Opens a fresh in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let conn: SqliteConnection = backend::sqlite::open(Location::Memory(db_id))?;
        Ok(Self { conn })
    }

    /// Opens (or creates) a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let conn: SqliteConnection = backend::sqlite::open(Location::File(path_str))?;
        Ok(Self { conn })
    }
}

impl LotRepository for SqliteStore {
    fn insert_lot(&mut self, lot: &Lot) -> Result<i64, PersistenceError> {
        mutations::lots::insert_lot(&mut self.conn, lot)
    }

    fn get_lot(&mut self, lot_id: i64) -> Result<Lot, PersistenceError> {
        queries::lots::get_lot(&mut self.conn, lot_id)
    }

    fn list_lots(&mut self) -> Result<Vec<Lot>, PersistenceError> {
        queries::lots::list_lots(&mut self.conn)
    }

    fn update_lot(&mut self, lot: &Lot) -> Result<(), PersistenceError> {
        mutations::lots::update_lot(&mut self.conn, lot)
    }

    fn delete_lot(&mut self, lot_id: i64) -> Result<(), PersistenceError> {
        mutations::lots::delete_lot(&mut self.conn, lot_id)
    }
}

impl SellerRepository for SqliteStore {
    fn find_seller_by_phone(
        &mut self,
        phone_number: &str,
    ) -> Result<Option<Seller>, PersistenceError> {
        queries::sellers::find_seller_by_phone(&mut self.conn, phone_number)
    }

    fn insert_seller(&mut self, seller: &Seller) -> Result<i64, PersistenceError> {
        mutations::sellers::insert_seller(&mut self.conn, seller)
    }

    fn set_seller_email(&mut self, seller_id: i64, email: &str) -> Result<(), PersistenceError> {
        mutations::sellers::set_seller_email(&mut self.conn, seller_id, email)
    }
}
