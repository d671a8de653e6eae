// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::alphabet::WILDCARD;
use crate::classify::{Category, classify};
use crate::error::DomainError;
use crate::parse::{PlateInput, RegionInput, normalize_region, parse_plate};
use crate::validation::validate_complete;
use serde::Serialize;

/// One of the six character positions of a plate series.
///
/// Variants are declared in the order the discrete form fields are named
/// (`firstLetter` … `thirdDigit`), not in series order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    FirstLetter,
    SecondLetter,
    ThirdLetter,
    FirstDigit,
    SecondDigit,
    ThirdDigit,
}

impl Slot {
    /// All slots, in field order.
    pub const ALL: [Self; 6] = [
        Self::FirstLetter,
        Self::SecondLetter,
        Self::ThirdLetter,
        Self::FirstDigit,
        Self::SecondDigit,
        Self::ThirdDigit,
    ];

    /// The payload field name carrying this slot.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::FirstLetter => "firstLetter",
            Self::SecondLetter => "secondLetter",
            Self::ThirdLetter => "thirdLetter",
            Self::FirstDigit => "firstDigit",
            Self::SecondDigit => "secondDigit",
            Self::ThirdDigit => "thirdDigit",
        }
    }

    /// Returns true for the three letter slots.
    #[must_use]
    pub const fn is_letter(self) -> bool {
        matches!(
            self,
            Self::FirstLetter | Self::SecondLetter | Self::ThirdLetter
        )
    }

    /// Index within the letter or digit triple.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::FirstLetter | Self::FirstDigit => 0,
            Self::SecondLetter | Self::SecondDigit => 1,
            Self::ThirdLetter | Self::ThirdDigit => 2,
        }
    }
}

/// Builds the 6-character series in `L D D D L L` order.
#[must_use]
pub fn compose_series(letters: &[char; 3], digits: &[char; 3]) -> String {
    [
        letters[0], digits[0], digits[1], digits[2], letters[1], letters[2],
    ]
    .iter()
    .collect()
}

/// Parser output: letter and digit triples that may still hold wildcards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlateDraft {
    letters: [char; 3],
    digits: [char; 3],
}

impl PlateDraft {
    /// A draft with every slot unresolved.
    pub const EMPTY: Self = Self {
        letters: [WILDCARD; 3],
        digits: [WILDCARD; 3],
    };

    /// Creates a draft from already-normalized triples.
    #[must_use]
    pub const fn new(letters: [char; 3], digits: [char; 3]) -> Self {
        Self { letters, digits }
    }

    #[must_use]
    pub const fn letters(&self) -> &[char; 3] {
        &self.letters
    }

    #[must_use]
    pub const fn digits(&self) -> &[char; 3] {
        &self.digits
    }

    /// Returns the character held by `slot`.
    #[must_use]
    pub const fn get(&self, slot: Slot) -> char {
        if slot.is_letter() {
            self.letters[slot.index()]
        } else {
            self.digits[slot.index()]
        }
    }

    pub(crate) const fn set(&mut self, slot: Slot, value: char) {
        if slot.is_letter() {
            self.letters[slot.index()] = value;
        } else {
            self.digits[slot.index()] = value;
        }
    }

    /// Slots that are still unresolved.
    #[must_use]
    pub fn missing_slots(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot) == WILDCARD)
            .collect()
    }

    /// A draft is complete iff no slot holds the wildcard.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.letters.contains(&WILDCARD) && !self.digits.contains(&WILDCARD)
    }

    /// The series in `L D D D L L` order, wildcards included.
    #[must_use]
    pub fn series(&self) -> String {
        compose_series(&self.letters, &self.digits)
    }
}

/// A canonical, validated and classified plate.
///
/// Instances only come out of [`PlateRecord::canonicalize`], so a record
/// never contains a wildcard and always carries a 1–3 digit region code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateRecord {
    letters: [char; 3],
    digits: [char; 3],
    region_code: String,
    raw_series: String,
    category: Category,
}

impl PlateRecord {
    /// Runs the full Parser → Validator → Classifier pipeline.
    ///
    /// # Arguments
    ///
    /// * `input` - The plate characters in any supported shape
    /// * `region` - The raw region token
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - fewer than three letters or three digits can be resolved
    /// - the region token contains no digits
    pub fn canonicalize(input: &PlateInput, region: &RegionInput) -> Result<Self, DomainError> {
        let draft: PlateDraft = parse_plate(input);
        validate_complete(&draft)?;
        let region_code: String = normalize_region(&region.as_text())?;
        Ok(Self::assemble(draft, region_code))
    }

    /// Canonicalizes a free-text series and region, as stored by persistence.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`PlateRecord::canonicalize`].
    pub fn from_series(series: &str, region: &str) -> Result<Self, DomainError> {
        Self::canonicalize(
            &PlateInput::from_series(series),
            &RegionInput::Text(region.to_string()),
        )
    }

    fn assemble(draft: PlateDraft, region_code: String) -> Self {
        let raw_series: String = draft.series();
        let category: Category = classify(&draft);
        Self {
            letters: draft.letters,
            digits: draft.digits,
            region_code,
            raw_series,
            category,
        }
    }

    #[must_use]
    pub const fn letters(&self) -> &[char; 3] {
        &self.letters
    }

    #[must_use]
    pub const fn digits(&self) -> &[char; 3] {
        &self.digits
    }

    /// The digit-only region code (1–3 characters).
    #[must_use]
    pub fn region_code(&self) -> &str {
        &self.region_code
    }

    /// The canonical 6-character matching key.
    #[must_use]
    pub fn raw_series(&self) -> &str {
        &self.raw_series
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// The series followed by the region, e.g. `А123ВС 77`.
    #[must_use]
    pub fn display_number(&self) -> String {
        format!("{} {}", self.raw_series, self.region_code)
    }
}

impl std::fmt::Display for PlateRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_number())
    }
}
