// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the platemart marketplace.
//!
//! Requests arrive as DTOs or raw JSON, become core commands, run against an
//! injected store, and come back as response DTOs. Lower-layer errors are
//! translated explicitly into [`ApiError`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    build_query, create_lot, create_lot_with_registration, delete_lot, get_lot, list_lots,
    register_seller, update_lot,
};
pub use request_response::{
    CreateLotWithRegistrationResponse, DeleteLotResponse, ListLotsQuery, ListLotsResponse,
    LotInfo, LotResponse, RegisterSellerRequest, RegisterSellerResponse, UpdateLotRequest,
};
