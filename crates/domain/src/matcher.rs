// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Search over a snapshot of lots: wildcard pattern, region and category
//! filters, price/date ordering and pagination.

use crate::alphabet::{WILDCARD, is_pattern_digit, is_pattern_letter, normalize_digit, normalize_letter};
use crate::classify::Category;
use crate::error::DomainError;
use crate::types::Lot;
use std::cmp::Ordering;
use std::str::FromStr;

/// Number of positions in a series pattern.
pub const PATTERN_LENGTH: usize = 6;

/// Default page size for listings.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: usize = 100;

/// Positions of a series (`L D D D L L`) that hold letters.
const LETTER_POSITIONS: [usize; 3] = [0, 4, 5];

/// A 6-position series pattern in `L D D D L L` order.
///
/// `*` matches any character at its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesPattern {
    chars: [char; PATTERN_LENGTH],
}

impl SeriesPattern {
    /// The pattern that matches every series.
    pub const ANY: Self = Self {
        chars: [WILDCARD; PATTERN_LENGTH],
    };

    /// Parses a pattern string.
    ///
    /// Whitespace is ignored and letters are normalized. A blank string is
    /// the match-all pattern; a shorter pattern is padded with wildcards.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPattern` if the pattern is longer than six
    /// positions or a position holds a character that cannot appear there.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let normalized: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        if normalized.len() > PATTERN_LENGTH {
            return Err(DomainError::InvalidPattern(format!(
                "pattern '{text}' is longer than {PATTERN_LENGTH} characters"
            )));
        }

        let mut chars: [char; PATTERN_LENGTH] = [WILDCARD; PATTERN_LENGTH];
        for (position, raw) in normalized.into_iter().enumerate() {
            let (ch, valid): (char, bool) = if LETTER_POSITIONS.contains(&position) {
                let letter: char = normalize_letter(raw);
                (letter, is_pattern_letter(letter))
            } else {
                let digit: char = normalize_digit(raw);
                (digit, is_pattern_digit(digit))
            };
            if !valid {
                return Err(DomainError::InvalidPattern(format!(
                    "'{raw}' is not allowed at position {}",
                    position + 1
                )));
            }
            chars[position] = ch;
        }
        Ok(Self { chars })
    }

    /// Returns true if every position is a wildcard.
    #[must_use]
    pub fn is_match_all(&self) -> bool {
        self.chars.iter().all(|c| *c == WILDCARD)
    }

    /// Compares `series` position by position.
    #[must_use]
    pub fn matches(&self, series: &str) -> bool {
        if self.is_match_all() {
            return true;
        }
        let mut candidate = series.chars();
        self.chars.iter().all(|expected| {
            candidate
                .next()
                .is_some_and(|actual| *expected == WILDCARD || *expected == actual)
        })
    }
}

impl std::fmt::Display for SeriesPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chars.iter().collect::<String>())
    }
}

/// Field a listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Price,
    CreatedAt,
}

/// Ordering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// A parsed `sort` parameter such as `price,desc` or `date,asc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl FromStr for SortSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);
        let key: SortKey = match parts.next().unwrap_or_default().to_lowercase().as_str() {
            "" | "price" => SortKey::Price,
            "date" | "createdat" | "created_at" => SortKey::CreatedAt,
            _ => return Err(DomainError::InvalidSort(s.to_string())),
        };
        let direction: SortDirection = match parts.next().map(str::to_lowercase).as_deref() {
            None | Some("" | "asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(_) => return Err(DomainError::InvalidSort(s.to_string())),
        };
        if parts.next().is_some() {
            return Err(DomainError::InvalidSort(s.to_string()));
        }
        Ok(Self { key, direction })
    }
}

/// A search over lots. Every active filter must pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    /// Series pattern; `None` matches everything.
    pub pattern: Option<SeriesPattern>,
    /// Region code; `None`, empty or `*` matches every region.
    pub region: Option<String>,
    /// Exact category; `None` matches every category.
    pub category: Option<Category>,
    pub sort: SortSpec,
}

impl Query {
    fn region_filter(&self) -> Option<&str> {
        self.region
            .as_deref()
            .map(str::trim)
            .filter(|region| !region.is_empty() && *region != "*")
    }

    /// Returns true if `lot` passes the region, category and pattern filters.
    #[must_use]
    pub fn accepts(&self, lot: &Lot) -> bool {
        if let Some(region) = self.region_filter() {
            if lot.plate.region_code() != region {
                return false;
            }
        }

        if let Some(category) = self.category {
            if lot.plate.category() != category {
                return false;
            }
        }

        self.pattern
            .as_ref()
            .is_none_or(|pattern| pattern.matches(lot.plate.raw_series()))
    }
}

fn compare(a: &Lot, b: &Lot, key: SortKey) -> Ordering {
    match key {
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

/// Evaluates `query` against `lots`.
///
/// Returns the matching lots ordered by the query's sort. The sort is stable,
/// so lots with equal keys keep their input order.
#[must_use]
pub fn filter_lots<'a>(query: &Query, lots: &'a [Lot]) -> Vec<&'a Lot> {
    let mut matched: Vec<&Lot> = lots.iter().filter(|lot| query.accepts(lot)).collect();
    matched.sort_by(|a, b| {
        let ordering: Ordering = compare(a, b, query.sort.key);
        match query.sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    matched
}

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    page: usize,
    size: usize,
}

impl Page {
    /// Creates a page request, clamping `page` to at least 1 and `size` to
    /// `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page: page.max(1),
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// Returns the slice of `items` that falls on `page`.
#[must_use]
pub fn paginate<T>(items: &[T], page: Page) -> &[T] {
    let start: usize = (page.page - 1).saturating_mul(page.size).min(items.len());
    let end: usize = start.saturating_add(page.size).min(items.len());
    &items[start..end]
}
