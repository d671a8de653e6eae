// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ordered-candidate field resolution for loosely shaped JSON payloads.
//!
//! Clients send the same information under different keys (`sellerName`,
//! `fullName`, `owner.name`, …) and sometimes nest plate fields under
//! `carNumber`, `plate` or `number`. Each piece of information has exactly
//! one priority-ordered list of key paths, declared here; the first path that
//! yields a usable value wins.

use crate::parse::{PlateInput, RegionInput};
use crate::plate::Slot;
use crate::validation::PriceInput;
use serde_json::Value;

/// A key path into a JSON object, outermost key first.
pub type FieldPath = &'static [&'static str];

/// Keys under which clients nest plate objects, in priority order.
pub const CONTAINER_KEYS: &[&str] = &["carNumber", "plate", "number"];

/// Seller name candidates, highest priority first.
pub const SELLER_NAME_CANDIDATES: &[FieldPath] = &[
    &["sellerName"],
    &["seller"],
    &["fullName"],
    &["ownerName"],
    &["owner", "name"],
];

/// Phone candidates, highest priority first.
pub const PHONE_CANDIDATES: &[FieldPath] = &[&["phone"], &["phoneNumber"], &["owner", "phone"]];

/// Free-text series candidates, highest priority first.
///
/// A container key holding a plain string is itself the series.
pub const SERIES_CANDIDATES: &[FieldPath] = &[
    &["series"],
    &["carNumber"],
    &["plate"],
    &["number"],
    &["carNumber", "series"],
    &["plate", "series"],
    &["number", "series"],
];

/// Region keys, checked at the top level before any container.
pub const REGION_KEYS: &[&str] = &["regionCode", "regionId", "region"];

/// Price candidates, highest priority first.
pub const PRICE_CANDIDATES: &[FieldPath] = &[&["price"]];

/// Free-text description candidates.
pub const DESCRIPTION_CANDIDATES: &[FieldPath] = &[&["description"]];

/// Seller comment candidates.
pub const COMMENT_CANDIDATES: &[FieldPath] = &[&["comment"]];

/// Lot status candidates.
pub const STATUS_CANDIDATES: &[FieldPath] = &[&["status"]];

/// Follows `path` into `payload`.
#[must_use]
pub fn lookup<'a>(payload: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(payload, |current, key| current.as_object()?.get(*key))
}

/// Renders a scalar as trimmed text. Blank strings, objects, arrays, booleans
/// and nulls yield `None`.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed: &str = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Returns the first candidate present as a string or number, trimmed.
///
/// Unlike [`resolve_text`], a blank string is returned as `Some("")`, so a
/// patch can tell "clear this field" apart from "leave it alone".
#[must_use]
pub fn resolve_patch_text<P: AsRef<[&'static str]>>(
    payload: &Value,
    candidates: &[P],
) -> Option<String> {
    candidates
        .iter()
        .filter_map(|path| lookup(payload, path.as_ref()))
        .find_map(|value| match value {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

/// Returns the first candidate that yields a non-empty trimmed string.
///
/// Numbers count as text so a numeric region or phone is still found.
#[must_use]
pub fn resolve_text<P: AsRef<[&'static str]>>(payload: &Value, candidates: &[P]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|path| lookup(payload, path.as_ref()))
        .find_map(scalar_text)
}

/// Expands a key into its candidate paths: top level first, then under each
/// container key in [`CONTAINER_KEYS`] order.
#[must_use]
pub fn nested_candidates(key: &'static str) -> Vec<Vec<&'static str>> {
    std::iter::once(vec![key])
        .chain(CONTAINER_KEYS.iter().map(|container| vec![*container, key]))
        .collect()
}

/// Resolves the region token, keeping numbers as numbers.
#[must_use]
pub fn resolve_region(payload: &Value) -> Option<RegionInput> {
    let top_level = REGION_KEYS.iter().map(|key| vec![*key]);
    let nested = CONTAINER_KEYS
        .iter()
        .flat_map(|container| REGION_KEYS.iter().map(move |key| vec![*container, *key]));

    top_level
        .chain(nested)
        .filter_map(|path| lookup(payload, &path))
        .find_map(|value| match value {
            Value::Number(n) => Some(RegionInput::Number(n.clone())),
            other => scalar_text(other).map(RegionInput::Text),
        })
}

/// Resolves the price, keeping numbers as numbers and strings as text.
#[must_use]
pub fn resolve_price(payload: &Value) -> Option<PriceInput> {
    PRICE_CANDIDATES
        .iter()
        .filter_map(|path| lookup(payload, path))
        .find_map(|value| match value {
            Value::Number(n) => n.as_f64().map(PriceInput::Number),
            Value::String(s) => Some(PriceInput::Text(s.clone())),
            _ => None,
        })
}

impl PlateInput {
    /// Builds parser input from any supported payload shape.
    ///
    /// The series comes from [`SERIES_CANDIDATES`]; each discrete slot is
    /// looked up by its field name via [`nested_candidates`].
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        let mut input: Self = Self {
            series: resolve_text(payload, SERIES_CANDIDATES),
            ..Self::default()
        };
        for slot in Slot::ALL {
            if let Some(value) = resolve_text(payload, &nested_candidates(slot.field_name())) {
                input.set_field(slot, value);
            }
        }
        input
    }
}
