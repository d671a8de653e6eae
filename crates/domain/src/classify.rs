// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::alphabet::WILDCARD;
use crate::error::DomainError;
use crate::plate::PlateDraft;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Digit triples that are `vip` when all three digits are identical.
const VIP_REPEATED_TRIPLES: [&str; 5] = ["000", "111", "777", "888", "999"];

/// Whole digit triples that are `vip` on their own.
const VIP_EXACT_TRIPLES: [&str; 3] = ["007", "900", "911"];

/// Substrings that make a digit triple `vip`.
const VIP_SUBSTRINGS: [&str; 5] = ["777", "555", "999", "123", "321"];

/// Desirability category of a plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Vip,
    SameDigits,
    SameLetters,
    Mirror,
    Random,
    Hidden,
}

impl Category {
    /// All categories, in rule order.
    pub const ALL: [Self; 6] = [
        Self::Vip,
        Self::SameDigits,
        Self::SameLetters,
        Self::Mirror,
        Self::Random,
        Self::Hidden,
    ];

    /// The wire tag for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vip => "vip",
            Self::SameDigits => "same-digits",
            Self::SameLetters => "same-letters",
            Self::Mirror => "mirror",
            Self::Random => "random",
            Self::Hidden => "hidden",
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s.trim())
            .ok_or_else(|| DomainError::InvalidCategory(s.to_string()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies a parsed plate.
#[must_use]
pub fn classify(draft: &PlateDraft) -> Category {
    classify_parts(draft.letters(), draft.digits())
}

/// Classifies letter and digit sequences that may be short or unresolved.
///
/// Rules are evaluated in a fixed order and the first match wins:
///
/// 1. three identical digits: `vip` for 000/111/777/888/999, else `same-digits`
/// 2. three identical letters: `same-letters`
/// 3. first digit equals third digit: `mirror`
/// 4. digits start with `00`, equal 007/900/911, or contain 777/555/999/123/321: `vip`
/// 5. non-empty series: `random`
/// 6. otherwise `hidden`
///
/// Rules 1–4 only look at fully resolved triples, so degenerate input falls
/// through to `random` or `hidden` instead of panicking.
#[must_use]
pub fn classify_parts(letters: &[char], digits: &[char]) -> Category {
    let digit_triple: Option<[char; 3]> = resolved_triple(digits);
    let letter_triple: Option<[char; 3]> = resolved_triple(letters);

    if let Some(d) = digit_triple {
        if d[0] == d[1] && d[1] == d[2] {
            let text: String = d.iter().collect();
            if VIP_REPEATED_TRIPLES.contains(&text.as_str()) {
                return Category::Vip;
            }
            return Category::SameDigits;
        }
    }

    if let Some(l) = letter_triple {
        if l[0] == l[1] && l[1] == l[2] {
            return Category::SameLetters;
        }
    }

    if let Some(d) = digit_triple {
        if d[0] == d[2] {
            return Category::Mirror;
        }

        let text: String = d.iter().collect();
        if is_vip_digits(&text) {
            return Category::Vip;
        }
    }

    if letters.is_empty() && digits.is_empty() {
        Category::Hidden
    } else {
        Category::Random
    }
}

fn is_vip_digits(text: &str) -> bool {
    text.starts_with("00")
        || VIP_EXACT_TRIPLES.contains(&text)
        || VIP_SUBSTRINGS.iter().any(|pattern| text.contains(pattern))
}

fn resolved_triple(chars: &[char]) -> Option<[char; 3]> {
    match chars {
        [a, b, c] if !chars.contains(&WILDCARD) => Some([*a, *b, *c]),
        _ => None,
    }
}
