// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, LotPatch};
use crate::error::CoreError;
use crate::state::{SellerRegistration, TransitionResult};
use platemart_domain::{
    DomainError, Lot, LotStatus, PlateInput, PlateRecord, PriceInput, RegionInput,
    normalize_optional, normalize_phone, validate_password, validate_price, validate_required,
};
use time::OffsetDateTime;

/// Applies a command, producing a new lot or a validated registration.
///
/// # Arguments
///
/// * `command` - The command to apply
/// * `now` - The creation time for new lots
///
/// # Returns
///
/// * `Ok(TransitionResult)` describing what the command produced
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns `CoreError::InvalidField` if any field violates a domain rule.
/// Validation stops at the first failure: plate, region, price, then contact
/// fields. Returns `CoreError::UnstoredLot` if an update targets a lot
/// without an identifier.
pub fn apply(command: Command, now: OffsetDateTime) -> Result<TransitionResult, CoreError> {
    match command {
        Command::CreateLot {
            plate,
            region,
            price,
            seller_name,
            seller_id,
            phone,
            description,
            comment,
        } => {
            let plate: PlateRecord = PlateRecord::canonicalize(&plate, &region)?;
            let price: f64 = require_price(price.as_ref())?;
            let seller_name: String = validate_required("sellerName", seller_name.as_deref())?;

            Ok(TransitionResult::LotCreated(Lot {
                lot_id: None,
                plate,
                price,
                seller_name,
                seller_id,
                phone: normalize_optional(phone.as_deref()),
                description: normalize_optional(description.as_deref()),
                comment: normalize_optional(comment.as_deref()),
                created_at: now,
                status: LotStatus::Active,
            }))
        }
        Command::UpdateLot { current, patch } => {
            if current.lot_id.is_none() {
                return Err(CoreError::UnstoredLot {
                    number: current.plate.display_number(),
                });
            }
            Ok(TransitionResult::LotUpdated(apply_patch(current, patch)?))
        }
        Command::RegisterSeller {
            full_name,
            phone_number,
            email,
            password,
        } => {
            let full_name: String = validate_required("fullName", full_name.as_deref())?;
            let phone_number: String =
                normalize_phone(&validate_required("phoneNumber", phone_number.as_deref())?);
            if phone_number.is_empty() {
                return Err(CoreError::InvalidField(DomainError::MissingField {
                    field: "phoneNumber",
                }));
            }
            validate_password(&password)?;

            Ok(TransitionResult::SellerRegistered(SellerRegistration {
                full_name,
                phone_number,
                email: normalize_optional(email.as_deref()),
                password,
            }))
        }
    }
}

fn require_price(price: Option<&PriceInput>) -> Result<f64, DomainError> {
    price.map_or(
        Err(DomainError::MissingField { field: "price" }),
        validate_price,
    )
}

/// Builds the replacement for `current`.
///
/// A plate or region change canonicalizes again, filling whichever half was
/// not supplied from the stored plate, so the category always matches the
/// new series. Discrete slot fields without a series fall back to the stored
/// series, so a patch may change a single character.
fn apply_patch(current: Lot, patch: LotPatch) -> Result<Lot, DomainError> {
    let mut lot: Lot = current;

    if patch.touches_plate() {
        let mut plate: PlateInput = patch.plate.unwrap_or_default();
        if plate
            .series
            .as_deref()
            .is_none_or(|series| series.trim().is_empty())
        {
            plate.series = Some(lot.plate.raw_series().to_string());
        }
        let region: RegionInput = patch
            .region
            .unwrap_or_else(|| RegionInput::Text(lot.plate.region_code().to_string()));
        lot.plate = PlateRecord::canonicalize(&plate, &region)?;
    }

    if let Some(price) = patch.price.as_ref() {
        lot.price = validate_price(price)?;
    }

    if let Some(seller_name) = patch.seller_name.as_deref() {
        lot.seller_name = validate_required("sellerName", Some(seller_name))?;
    }

    if let Some(phone) = patch.phone.as_deref() {
        lot.phone = normalize_optional(Some(phone));
    }

    if let Some(description) = patch.description.as_deref() {
        lot.description = normalize_optional(Some(description));
    }

    if let Some(comment) = patch.comment.as_deref() {
        lot.comment = normalize_optional(Some(comment));
    }

    if let Some(status) = patch.status {
        lot.status = status;
    }

    Ok(lot)
}
