// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Turning raw plate input into a [`PlateDraft`].

use crate::alphabet::{is_valid_digit, is_valid_letter, normalize_digit, normalize_letter};
use crate::error::DomainError;
use crate::plate::{PlateDraft, Slot};
use serde::{Deserialize, Serialize};

/// Maximum number of digits kept from a region token.
pub const MAX_REGION_DIGITS: usize = 3;

/// Raw plate characters as submitted by a client.
///
/// Any combination of the free-text `series` and the six discrete fields may
/// be present. Resolution per slot is: discrete field, then the character
/// extracted from `series`, then the wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateInput {
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub first_letter: Option<String>,
    #[serde(default)]
    pub second_letter: Option<String>,
    #[serde(default)]
    pub third_letter: Option<String>,
    #[serde(default)]
    pub first_digit: Option<String>,
    #[serde(default)]
    pub second_digit: Option<String>,
    #[serde(default)]
    pub third_digit: Option<String>,
}

impl PlateInput {
    /// Input carrying only a free-text series.
    #[must_use]
    pub fn from_series(series: &str) -> Self {
        Self {
            series: Some(series.to_string()),
            ..Self::default()
        }
    }

    /// Input carrying the six discrete fields in `firstLetter` … `thirdDigit` order.
    #[must_use]
    pub fn from_fields(fields: [&str; 6]) -> Self {
        let mut input: Self = Self::default();
        for (slot, value) in Slot::ALL.into_iter().zip(fields) {
            input.set_field(slot, value.to_string());
        }
        input
    }

    /// Returns the discrete field for `slot`, if present.
    #[must_use]
    pub fn field(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::FirstLetter => self.first_letter.as_deref(),
            Slot::SecondLetter => self.second_letter.as_deref(),
            Slot::ThirdLetter => self.third_letter.as_deref(),
            Slot::FirstDigit => self.first_digit.as_deref(),
            Slot::SecondDigit => self.second_digit.as_deref(),
            Slot::ThirdDigit => self.third_digit.as_deref(),
        }
    }

    /// Sets the discrete field for `slot`.
    pub fn set_field(&mut self, slot: Slot, value: String) {
        let target: &mut Option<String> = match slot {
            Slot::FirstLetter => &mut self.first_letter,
            Slot::SecondLetter => &mut self.second_letter,
            Slot::ThirdLetter => &mut self.third_letter,
            Slot::FirstDigit => &mut self.first_digit,
            Slot::SecondDigit => &mut self.second_digit,
            Slot::ThirdDigit => &mut self.third_digit,
        };
        *target = Some(value);
    }

    /// Returns true if neither the series nor any discrete field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_none() && Slot::ALL.into_iter().all(|slot| self.field(slot).is_none())
    }
}

/// A region token, which clients send either as a string or as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionInput {
    Number(serde_json::Number),
    Text(String),
}

impl RegionInput {
    /// The token rendered as text.
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl Default for RegionInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// Decomposes a free-text series into letter and digit slots.
///
/// Whitespace is dropped and letters are normalized. The first three plate
/// letters fill the letter slots in order of appearance. Digits come from the
/// first run that reaches three consecutive digits: separators such as `-`
/// or `.` do not break a run, a letter does. Only the first three digits of
/// that run are taken, so a leading or trailing region (`77 А123ВС`,
/// `А123ВС77`) is ignored. When no run reaches three digits, the first run
/// fills what it can. Unfilled slots keep the wildcard.
#[must_use]
pub fn parse_series(text: &str) -> PlateDraft {
    let mut draft: PlateDraft = PlateDraft::EMPTY;
    let letter_slots: [Slot; 3] = [Slot::FirstLetter, Slot::SecondLetter, Slot::ThirdLetter];
    let digit_slots: [Slot; 3] = [Slot::FirstDigit, Slot::SecondDigit, Slot::ThirdDigit];

    let mut letters_taken: usize = 0;
    let mut run: Vec<char> = Vec::with_capacity(digit_slots.len());
    let mut first_run: Option<Vec<char>> = None;
    let mut triple: Option<Vec<char>> = None;

    for raw in text.chars().filter(|c| !c.is_whitespace()) {
        let digit: char = normalize_digit(raw);
        if is_valid_digit(digit) {
            if triple.is_none() {
                run.push(digit);
                if run.len() == digit_slots.len() {
                    triple = Some(run.clone());
                }
            }
            continue;
        }

        let letter: char = normalize_letter(raw);
        if letter.is_alphabetic() && !run.is_empty() {
            if first_run.is_none() {
                first_run = Some(run.clone());
            }
            run.clear();
        }
        if is_valid_letter(letter) && letters_taken < letter_slots.len() {
            draft.set(letter_slots[letters_taken], letter);
            letters_taken += 1;
        }
    }

    let digits: Vec<char> = triple.or(first_run).unwrap_or(run);
    for (slot, digit) in digit_slots.into_iter().zip(digits) {
        draft.set(slot, digit);
    }

    draft
}

/// Normalizes a single discrete field for `slot`.
///
/// Returns `None` when the field is blank, longer than one character, or not
/// a valid character for the slot; the caller then falls back to the series.
fn normalize_field(slot: Slot, raw: &str) -> Option<char> {
    let mut chars = raw.trim().chars();
    let ch: char = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if slot.is_letter() {
        let letter: char = normalize_letter(ch);
        is_valid_letter(letter).then_some(letter)
    } else {
        let digit: char = normalize_digit(ch);
        is_valid_digit(digit).then_some(digit)
    }
}

/// Resolves every slot of `input` using the ordered fallback chain.
///
/// For each slot: the discrete field, then the series character, then the
/// wildcard. The result is complete iff every slot resolved.
#[must_use]
pub fn parse_plate(input: &PlateInput) -> PlateDraft {
    let from_series: PlateDraft = input
        .series
        .as_deref()
        .map_or(PlateDraft::EMPTY, parse_series);

    let mut draft: PlateDraft = PlateDraft::EMPTY;
    for slot in Slot::ALL {
        let value: char = input
            .field(slot)
            .and_then(|raw| normalize_field(slot, raw))
            .unwrap_or_else(|| from_series.get(slot));
        draft.set(slot, value);
    }
    draft
}

/// Extracts a region code from a raw token.
///
/// Keeps digit characters only and takes at most the first three.
///
/// # Errors
///
/// Returns `DomainError::MissingRegion` if the token contains no digits.
pub fn normalize_region(token: &str) -> Result<String, DomainError> {
    let code: String = token
        .chars()
        .map(normalize_digit)
        .filter(|c| is_valid_digit(*c))
        .take(MAX_REGION_DIGITS)
        .collect();

    if code.is_empty() {
        return Err(DomainError::MissingRegion);
    }
    Ok(code)
}
