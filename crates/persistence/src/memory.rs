// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use platemart_domain::{Lot, Seller};
use time::OffsetDateTime;
use tracing::debug;

use crate::error::PersistenceError;
use crate::repository::{LotRepository, SellerRepository};

/// A store that keeps everything in process memory.
///
/// Identifiers start at 1 and are never reused, even after a delete.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    lots: Vec<Lot>,
    sellers: Vec<Seller>,
    last_lot_id: i64,
    last_seller_id: i64,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lot_position(&self, lot_id: i64) -> Result<usize, PersistenceError> {
        self.lots
            .iter()
            .position(|lot| lot.lot_id == Some(lot_id))
            .ok_or(PersistenceError::LotNotFound(lot_id))
    }
}

impl LotRepository for InMemoryStore {
    fn insert_lot(&mut self, lot: &Lot) -> Result<i64, PersistenceError> {
        self.last_lot_id += 1;
        let lot_id: i64 = self.last_lot_id;
        self.lots.push(lot.clone().with_id(lot_id));
        debug!(lot_id, "Stored lot in memory");
        Ok(lot_id)
    }

    fn get_lot(&mut self, lot_id: i64) -> Result<Lot, PersistenceError> {
        let position: usize = self.lot_position(lot_id)?;
        Ok(self.lots[position].clone())
    }

    fn list_lots(&mut self) -> Result<Vec<Lot>, PersistenceError> {
        Ok(self.lots.clone())
    }

    fn update_lot(&mut self, lot: &Lot) -> Result<(), PersistenceError> {
        let lot_id: i64 = lot.lot_id.ok_or(PersistenceError::MissingIdentifier)?;
        let position: usize = self.lot_position(lot_id)?;
        let created_at: OffsetDateTime = self.lots[position].created_at;
        self.lots[position] = Lot {
            created_at,
            ..lot.clone()
        };
        debug!(lot_id, "Updated lot in memory");
        Ok(())
    }

    fn delete_lot(&mut self, lot_id: i64) -> Result<(), PersistenceError> {
        let position: usize = self.lot_position(lot_id)?;
        self.lots.remove(position);
        debug!(lot_id, "Deleted lot from memory");
        Ok(())
    }
}

impl SellerRepository for InMemoryStore {
    fn find_seller_by_phone(
        &mut self,
        phone_number: &str,
    ) -> Result<Option<Seller>, PersistenceError> {
        Ok(self
            .sellers
            .iter()
            .find(|seller| seller.phone_number == phone_number)
            .cloned())
    }

    fn insert_seller(&mut self, seller: &Seller) -> Result<i64, PersistenceError> {
        self.last_seller_id += 1;
        let seller_id: i64 = self.last_seller_id;
        self.sellers.push(Seller {
            seller_id: Some(seller_id),
            ..seller.clone()
        });
        debug!(seller_id, "Stored seller in memory");
        Ok(seller_id)
    }

    fn set_seller_email(&mut self, seller_id: i64, email: &str) -> Result<(), PersistenceError> {
        let seller: &mut Seller = self
            .sellers
            .iter_mut()
            .find(|seller| seller.seller_id == Some(seller_id))
            .ok_or(PersistenceError::SellerNotFound(seller_id))?;
        seller.email = Some(email.to_string());
        Ok(())
    }
}
