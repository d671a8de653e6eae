// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers are synchronous. The caller owns the locking around the store, so
//! each handler runs as one logical operation.

use platemart::{
    Command, LotPatch, SearchResult, SellerRegistration, TransitionResult, apply, search,
};
use platemart_domain::resolve::{
    COMMENT_CANDIDATES, DESCRIPTION_CANDIDATES, PHONE_CANDIDATES, SELLER_NAME_CANDIDATES,
    resolve_price, resolve_region, resolve_text,
};
use platemart_domain::{
    Category, DEFAULT_PAGE_SIZE, Lot, LotStatus, Page, PlateInput, Query, SeriesPattern, SortSpec,
    normalize_region,
};
use platemart_persistence::{
    LotRepository, RegistrationOutcome, Repository, SellerRepository,
    register_seller as store_seller,
};
use serde_json::Value;
use std::str::FromStr;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    CreateLotWithRegistrationResponse, DeleteLotResponse, ListLotsQuery, ListLotsResponse,
    LotInfo, LotResponse, RegisterSellerRequest, RegisterSellerResponse, UpdateLotRequest,
};

/// Builds a create command from any payload shape the resolver understands.
fn create_lot_command(payload: &Value) -> Command {
    Command::CreateLot {
        plate: PlateInput::from_payload(payload),
        region: resolve_region(payload).unwrap_or_default(),
        price: resolve_price(payload),
        seller_name: resolve_text(payload, SELLER_NAME_CANDIDATES),
        seller_id: None,
        phone: resolve_text(payload, PHONE_CANDIDATES),
        description: resolve_text(payload, DESCRIPTION_CANDIDATES),
        comment: resolve_text(payload, COMMENT_CANDIDATES),
    }
}

fn expect_lot(result: TransitionResult) -> Result<Lot, ApiError> {
    match result {
        TransitionResult::LotCreated(lot) | TransitionResult::LotUpdated(lot) => Ok(lot),
        TransitionResult::SellerRegistered(_) => Err(ApiError::Internal {
            message: String::from("Lot command produced a seller registration"),
        }),
    }
}

fn expect_registration(result: TransitionResult) -> Result<SellerRegistration, ApiError> {
    match result {
        TransitionResult::SellerRegistered(registration) => Ok(registration),
        TransitionResult::LotCreated(_) | TransitionResult::LotUpdated(_) => {
            Err(ApiError::Internal {
                message: String::from("Registration command produced a lot"),
            })
        }
    }
}

fn registration_command(request: RegisterSellerRequest) -> Command {
    Command::RegisterSeller {
        full_name: request.full_name,
        phone_number: request.phone_number,
        email: request.email,
        password: request.password,
    }
}

fn insert_and_reload<R: Repository + ?Sized>(
    repository: &mut R,
    lot: &Lot,
) -> Result<LotInfo, ApiError> {
    let lot_id: i64 = repository
        .insert_lot(lot)
        .map_err(translate_persistence_error)?;
    let stored: Lot = repository
        .get_lot(lot_id)
        .map_err(translate_persistence_error)?;
    LotInfo::try_from(&stored)
}

/// Creates a lot from a loosely shaped JSON payload.
///
/// The payload may carry a free-text series, discrete letter and digit
/// fields, or either of those nested under `carNumber`, `plate` or `number`.
///
/// # Arguments
///
/// * `repository` - The store
/// * `payload` - The request body
/// * `now` - The creation time
///
/// # Errors
///
/// Returns an error if any field fails validation or the store fails.
pub fn create_lot<R: Repository + ?Sized>(
    repository: &mut R,
    payload: &Value,
    now: OffsetDateTime,
) -> Result<LotResponse, ApiError> {
    let lot: Lot = expect_lot(
        apply(create_lot_command(payload), now).map_err(translate_core_error)?,
    )?;
    let lot: LotInfo = insert_and_reload(repository, &lot)?;

    info!(lot_id = lot.lot_id, number = %lot.display_number, "Lot listed");

    Ok(LotResponse {
        message: format!("Listed plate {}", lot.display_number),
        lot,
    })
}

/// Registers (or merges) a seller and lists a lot for them in one request.
///
/// Both the registration and the lot are validated before anything is
/// written. The lot is stored first and withdrawn again if the seller cannot
/// be stored, so a failed request never leaves a stray seller or lot behind.
///
/// # Errors
///
/// Returns an error if the registration or the lot is invalid, the phone
/// number is registered with a different password, or the store fails.
pub fn create_lot_with_registration<R: Repository + ?Sized>(
    repository: &mut R,
    payload: &Value,
    now: OffsetDateTime,
) -> Result<CreateLotWithRegistrationResponse, ApiError> {
    let request: RegisterSellerRequest =
        serde_json::from_value(payload.clone()).map_err(|e| ApiError::InvalidInput {
            field: String::from("body"),
            message: e.to_string(),
        })?;

    let registration: SellerRegistration = expect_registration(
        apply(registration_command(request), now).map_err(translate_core_error)?,
    )?;
    let mut lot: Lot = expect_lot(
        apply(create_lot_command(payload), now).map_err(translate_core_error)?,
    )?;

    let lot_id: i64 = repository
        .insert_lot(&lot)
        .map_err(translate_persistence_error)?;
    let outcome: RegistrationOutcome = match store_seller(repository, &registration, now) {
        Ok(outcome) => outcome,
        Err(err) => {
            if let Err(cleanup) = repository.delete_lot(lot_id) {
                warn!(lot_id, error = %cleanup, "Failed to withdraw lot after registration error");
            }
            return Err(translate_persistence_error(err));
        }
    };

    lot.lot_id = Some(lot_id);
    lot.seller_id = Some(outcome.seller_id());
    repository
        .update_lot(&lot)
        .map_err(translate_persistence_error)?;
    let stored: Lot = repository
        .get_lot(lot_id)
        .map_err(translate_persistence_error)?;
    let lot: LotInfo = LotInfo::try_from(&stored)?;

    info!(
        lot_id = lot.lot_id,
        seller_id = outcome.seller_id(),
        number = %lot.display_number,
        "Lot listed with seller registration"
    );

    Ok(CreateLotWithRegistrationResponse {
        seller_id: outcome.seller_id(),
        merged: matches!(outcome, RegistrationOutcome::Merged { .. }),
        message: format!("Listed plate {}", lot.display_number),
        lot,
    })
}

/// Registers a seller, merging by phone number.
///
/// # Errors
///
/// Returns an error if a field is invalid, the phone number is registered
/// with a different password, or the store fails.
pub fn register_seller<R: SellerRepository + ?Sized>(
    repository: &mut R,
    request: RegisterSellerRequest,
    now: OffsetDateTime,
) -> Result<RegisterSellerResponse, ApiError> {
    let registration: SellerRegistration = expect_registration(
        apply(registration_command(request), now).map_err(translate_core_error)?,
    )?;

    let outcome: RegistrationOutcome =
        store_seller(repository, &registration, now).map_err(translate_persistence_error)?;

    let (merged, message): (bool, String) = match outcome {
        RegistrationOutcome::Created { seller_id } => {
            (false, format!("Registered seller {seller_id}"))
        }
        RegistrationOutcome::Merged { seller_id } => {
            (true, format!("Seller {seller_id} is already registered"))
        }
    };

    Ok(RegisterSellerResponse {
        seller_id: outcome.seller_id(),
        merged,
        message,
    })
}

fn parse_count(field: &str, value: Option<&str>, default: usize) -> Result<usize, ApiError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(text) => text.parse::<usize>().map_err(|_| ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("'{text}' is not a non-negative integer"),
        }),
    }
}

/// Turns raw listing parameters into a matcher query.
///
/// # Errors
///
/// Returns an error if the pattern, region, category or sort is malformed.
pub fn build_query(params: &ListLotsQuery) -> Result<Query, ApiError> {
    let pattern: Option<SeriesPattern> = params
        .pattern
        .as_deref()
        .map(SeriesPattern::parse)
        .transpose()
        .map_err(translate_domain_error)?
        .filter(|pattern| !pattern.is_match_all());

    let region: Option<String> = match params.region.as_deref().map(str::trim) {
        None | Some("" | "*") => None,
        Some(token) => Some(normalize_region(token).map_err(translate_domain_error)?),
    };

    let category: Option<Category> = match params.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(tag) => Some(Category::from_str(tag).map_err(translate_domain_error)?),
    };

    let sort: SortSpec = SortSpec::from_str(params.sort.as_deref().unwrap_or_default())
        .map_err(translate_domain_error)?;

    Ok(Query {
        pattern,
        region,
        category,
        sort,
    })
}

/// Lists lots matching the query, one page at a time.
///
/// # Errors
///
/// Returns an error if a parameter is malformed or the store fails.
pub fn list_lots<R: LotRepository + ?Sized>(
    repository: &mut R,
    params: &ListLotsQuery,
) -> Result<ListLotsResponse, ApiError> {
    let query: Query = build_query(params)?;
    let page: Page = Page::new(
        parse_count("page", params.page.as_deref(), 1)?,
        parse_count("size", params.size.as_deref(), DEFAULT_PAGE_SIZE)?,
    );

    let lots: Vec<Lot> = repository
        .list_lots()
        .map_err(translate_persistence_error)?;
    let result: SearchResult<'_> = search(&query, page, &lots);

    debug!(
        total = result.total,
        page = page.page(),
        size = page.size(),
        "Listed lots"
    );

    Ok(ListLotsResponse {
        items: result
            .items
            .into_iter()
            .map(LotInfo::try_from)
            .collect::<Result<Vec<LotInfo>, ApiError>>()?,
        total: result.total,
        page: page.page(),
        size: page.size(),
    })
}

/// Loads a single lot.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the lot does not exist.
pub fn get_lot<R: LotRepository + ?Sized>(
    repository: &mut R,
    lot_id: i64,
) -> Result<LotInfo, ApiError> {
    let lot: Lot = repository
        .get_lot(lot_id)
        .map_err(translate_persistence_error)?;
    LotInfo::try_from(&lot)
}

/// Applies a partial update to a lot from a loosely shaped JSON body.
///
/// Plate slots the body leaves out keep their stored characters.
///
/// # Errors
///
/// Returns an error if the body is not an object, the lot does not exist, a
/// field is invalid, or the store fails.
pub fn update_lot<R: LotRepository + ?Sized>(
    repository: &mut R,
    lot_id: i64,
    payload: &Value,
    now: OffsetDateTime,
) -> Result<LotResponse, ApiError> {
    let request: UpdateLotRequest = UpdateLotRequest::from_payload(payload)?;
    let current: Lot = repository
        .get_lot(lot_id)
        .map_err(translate_persistence_error)?;

    let status: Option<LotStatus> = request
        .status
        .as_deref()
        .map(LotStatus::from_str)
        .transpose()
        .map_err(translate_domain_error)?;

    let patch: LotPatch = LotPatch {
        plate: (!request.plate.is_empty()).then_some(request.plate),
        region: request.region_code,
        price: request.price,
        seller_name: request.seller_name,
        phone: request.phone,
        description: request.description,
        comment: request.comment,
        status,
    };

    let lot: Lot = expect_lot(
        apply(Command::UpdateLot { current, patch }, now).map_err(translate_core_error)?,
    )?;
    repository
        .update_lot(&lot)
        .map_err(translate_persistence_error)?;

    let lot: LotInfo = get_lot(repository, lot_id)?;
    info!(lot_id, number = %lot.display_number, status = %lot.status, "Lot updated");

    Ok(LotResponse {
        message: format!("Updated plate {}", lot.display_number),
        lot,
    })
}

/// Removes a lot.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the lot does not exist.
pub fn delete_lot<R: LotRepository + ?Sized>(
    repository: &mut R,
    lot_id: i64,
) -> Result<DeleteLotResponse, ApiError> {
    repository
        .delete_lot(lot_id)
        .map_err(translate_persistence_error)?;

    info!(lot_id, "Lot removed");

    Ok(DeleteLotResponse {
        lot_id,
        message: format!("Removed lot {lot_id}"),
    })
}
