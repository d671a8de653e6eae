// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plate canonicalization, classification and matching.
//!
//! Everything in this crate is pure and synchronous: raw input goes through
//! the parser, the validator and the classifier to become a [`PlateRecord`],
//! and a [`Query`] is evaluated against a snapshot of [`Lot`]s.

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

pub mod alphabet;
mod classify;
mod error;
mod matcher;
mod parse;
mod plate;
pub mod resolve;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use classify::{Category, classify, classify_parts};
pub use error::DomainError;
pub use matcher::{
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Page, Query, SeriesPattern, SortDirection, SortKey,
    SortSpec, filter_lots, paginate,
};
pub use parse::{PlateInput, RegionInput, normalize_region, parse_plate, parse_series};
pub use plate::{PlateDraft, PlateRecord, Slot, compose_series};
pub use types::{Lot, LotStatus, Seller, normalize_phone};
pub use validation::{
    MIN_PASSWORD_LENGTH, PriceInput, normalize_optional, validate_complete, validate_password,
    validate_price, validate_required,
};
