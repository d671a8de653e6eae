// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::alphabet::{
    PLATE_LETTERS, WILDCARD, is_pattern_digit, is_pattern_letter, is_valid_digit,
    is_valid_letter, normalize_digit, normalize_letter,
};

#[test]
fn test_all_plate_letters_are_valid() {
    for letter in PLATE_LETTERS {
        assert!(is_valid_letter(letter), "{letter} should be valid");
    }
}

#[test]
fn test_non_plate_cyrillic_letters_are_invalid() {
    for letter in ['Б', 'Г', 'Д', 'Ж', 'З', 'И', 'Л', 'П', 'Ф', 'Ц', 'Я'] {
        assert!(!is_valid_letter(letter), "{letter} should be invalid");
    }
}

#[test]
fn test_latin_letters_are_not_valid_without_normalization() {
    assert!(!is_valid_letter('A'));
    assert!(is_valid_letter(normalize_letter('A')));
}

#[test]
fn test_normalize_letter_uppercases_cyrillic() {
    assert_eq!(normalize_letter('а'), 'А');
    assert_eq!(normalize_letter('х'), 'Х');
}

#[test]
fn test_normalize_letter_folds_yo() {
    assert_eq!(normalize_letter('Ё'), 'Е');
    assert_eq!(normalize_letter('ё'), 'Е');
}

#[test]
fn test_normalize_letter_maps_latin_twins() {
    let latin: &str = "ABEKMHOPCTYX";
    let mapped: String = latin.chars().map(normalize_letter).collect();
    assert_eq!(mapped, "АВЕКМНОРСТУХ");

    let lower: String = "abekmhopctyx".chars().map(normalize_letter).collect();
    assert_eq!(lower, "АВЕКМНОРСТУХ");
}

#[test]
fn test_normalize_letter_leaves_other_characters() {
    assert_eq!(normalize_letter('q'), 'Q');
    assert_eq!(normalize_letter('ж'), 'Ж');
    assert_eq!(normalize_letter('-'), '-');
}

#[test]
fn test_digits() {
    for digit in '0'..='9' {
        assert!(is_valid_digit(digit));
        assert_eq!(normalize_digit(digit), digit);
    }
    assert!(!is_valid_digit('О'));
    assert!(!is_valid_digit(WILDCARD));
}

#[test]
fn test_normalize_digit_folds_full_width() {
    assert_eq!(normalize_digit('０'), '0');
    assert_eq!(normalize_digit('７'), '7');
    assert_eq!(normalize_digit('９'), '9');
}

#[test]
fn test_wildcard_only_valid_in_pattern_context() {
    assert!(!is_valid_letter(WILDCARD));
    assert!(is_pattern_letter(WILDCARD));
    assert!(is_pattern_digit(WILDCARD));
    assert!(is_pattern_letter('М'));
    assert!(!is_pattern_letter('7'));
    assert!(!is_pattern_digit('М'));
}
