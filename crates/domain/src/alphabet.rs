// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Character rules for Russian registration plates.
//!
//! Plates only use the twelve Cyrillic letters that have a Latin twin
//! (`А В Е К М Н О Р С Т У Х`) and the ASCII digits. Every function here is
//! pure and operates on a single `char`.

/// The wildcard placeholder used in search patterns and unresolved slots.
pub const WILDCARD: char = '*';

/// The letters allowed on a plate, in canonical (Cyrillic uppercase) form.
pub const PLATE_LETTERS: [char; 12] = [
    'А', 'В', 'Е', 'К', 'М', 'Н', 'О', 'Р', 'С', 'Т', 'У', 'Х',
];

/// Latin look-alikes and the Cyrillic letter each one stands for.
const LATIN_TWINS: [(char, char); 12] = [
    ('A', 'А'),
    ('B', 'В'),
    ('E', 'Е'),
    ('K', 'К'),
    ('M', 'М'),
    ('H', 'Н'),
    ('O', 'О'),
    ('P', 'Р'),
    ('C', 'С'),
    ('T', 'Т'),
    ('Y', 'У'),
    ('X', 'Х'),
];

/// Returns true if `ch` is one of the canonical plate letters.
///
/// The check is exact: callers that accept user input should run
/// [`normalize_letter`] first.
#[must_use]
pub fn is_valid_letter(ch: char) -> bool {
    PLATE_LETTERS.contains(&ch)
}

/// Returns true if `ch` is an ASCII digit.
#[must_use]
pub const fn is_valid_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Returns true if `ch` may occupy a letter slot of a search pattern.
#[must_use]
pub fn is_pattern_letter(ch: char) -> bool {
    ch == WILDCARD || is_valid_letter(ch)
}

/// Returns true if `ch` may occupy a digit slot of a search pattern.
#[must_use]
pub const fn is_pattern_digit(ch: char) -> bool {
    ch == WILDCARD || is_valid_digit(ch)
}

/// Normalizes a letter to its canonical plate form.
///
/// Uppercases, folds `Ё` into `Е` and maps Latin look-alikes onto their
/// Cyrillic counterparts. Characters with no plate meaning are returned
/// uppercased but otherwise unchanged, so the result still has to be checked
/// with [`is_valid_letter`].
#[must_use]
pub fn normalize_letter(ch: char) -> char {
    let upper: char = ch.to_uppercase().next().unwrap_or(ch);
    if upper == 'Ё' {
        return 'Е';
    }
    LATIN_TWINS
        .iter()
        .find(|(latin, _)| *latin == upper)
        .map_or(upper, |(_, cyrillic)| *cyrillic)
}

/// Normalizes a digit to ASCII.
///
/// Full-width digits (`０`..`９`) are folded to `0`..`9`; anything else is
/// returned unchanged.
#[must_use]
pub fn normalize_digit(ch: char) -> char {
    if ('０'..='９').contains(&ch) {
        let offset: u32 = u32::from(ch) - u32::from('０');
        return char::from_digit(offset, 10).unwrap_or(ch);
    }
    ch
}
