// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names are camelCase on the wire.

use platemart_domain::resolve::{
    COMMENT_CANDIDATES, DESCRIPTION_CANDIDATES, PHONE_CANDIDATES, SELLER_NAME_CANDIDATES,
    STATUS_CANDIDATES, resolve_patch_text, resolve_price, resolve_region,
};
use platemart_domain::{Lot, PlateInput, PriceInput, RegionInput};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

use crate::error::ApiError;

/// API request to register a seller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterSellerRequest {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

/// API response for a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSellerResponse {
    pub seller_id: i64,
    /// True when the phone number was already registered.
    pub merged: bool,
    pub message: String,
}

/// API request to change a lot. Absent fields are left unchanged.
///
/// Built from the raw body with the same resolver as creation, so plate
/// fields may arrive under any supported key and as strings or numbers.
/// Sending any plate field (or a region) re-canonicalizes the plate. A blank
/// optional text field clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateLotRequest {
    pub plate: PlateInput,
    pub region_code: Option<RegionInput>,
    pub price: Option<PriceInput>,
    pub seller_name: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub status: Option<String>,
}

impl UpdateLotRequest {
    /// Reads a patch out of a loosely shaped JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the body is not a JSON object.
    pub fn from_payload(payload: &Value) -> Result<Self, ApiError> {
        if !payload.is_object() {
            return Err(ApiError::InvalidInput {
                field: String::from("body"),
                message: String::from("Request body must be a JSON object"),
            });
        }

        Ok(Self {
            plate: PlateInput::from_payload(payload),
            region_code: resolve_region(payload),
            price: resolve_price(payload),
            seller_name: resolve_patch_text(payload, SELLER_NAME_CANDIDATES),
            phone: resolve_patch_text(payload, PHONE_CANDIDATES),
            description: resolve_patch_text(payload, DESCRIPTION_CANDIDATES),
            comment: resolve_patch_text(payload, COMMENT_CANDIDATES),
            status: resolve_patch_text(payload, STATUS_CANDIDATES),
        })
    }
}

/// Listing parameters, all optional and all raw text.
///
/// * `page` - 1-based page number, default 1
/// * `size` - page size, default 20, clamped to 1..=100
/// * `sort` - `price` or `date`, optionally followed by `,asc` or `,desc`
/// * `region` - region code; empty or `*` means any
/// * `category` - exact category tag
/// * `pattern` - series pattern with `*` wildcards
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListLotsQuery {
    pub page: Option<String>,
    pub size: Option<String>,
    pub sort: Option<String>,
    pub region: Option<String>,
    pub category: Option<String>,
    pub pattern: Option<String>,
}

/// A lot as presented to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotInfo {
    pub lot_id: i64,
    /// Canonical series, e.g. `А123ВС`.
    pub series: String,
    pub region_code: String,
    /// Series and region separated by a space.
    pub display_number: String,
    pub category: String,
    pub price: f64,
    pub seller_name: String,
    pub seller_id: Option<i64>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub comment: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub status: String,
}

impl TryFrom<&Lot> for LotInfo {
    type Error = ApiError;

    fn try_from(lot: &Lot) -> Result<Self, Self::Error> {
        let lot_id: i64 = lot.lot_id.ok_or_else(|| ApiError::Internal {
            message: format!("Lot {} has no identifier", lot.plate.display_number()),
        })?;

        Ok(Self {
            lot_id,
            series: lot.plate.raw_series().to_string(),
            region_code: lot.plate.region_code().to_string(),
            display_number: lot.plate.display_number(),
            category: lot.plate.category().to_string(),
            price: lot.price,
            seller_name: lot.seller_name.clone(),
            seller_id: lot.seller_id,
            phone: lot.phone.clone(),
            description: lot.description.clone(),
            comment: lot.comment.clone(),
            created_at: lot.created_at,
            status: lot.status.to_string(),
        })
    }
}

/// API response for a lot that was created or changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotResponse {
    pub lot: LotInfo,
    pub message: String,
}

/// API response for a lot created together with a seller registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLotWithRegistrationResponse {
    pub seller_id: i64,
    pub merged: bool,
    pub lot: LotInfo,
    pub message: String,
}

/// API response for a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListLotsResponse {
    pub items: Vec<LotInfo>,
    /// Matches across all pages.
    pub total: usize,
    pub page: usize,
    pub size: usize,
}

/// API response for a deleted lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLotResponse {
    pub lot_id: i64,
    pub message: String,
}
