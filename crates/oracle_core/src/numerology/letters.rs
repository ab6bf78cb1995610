//! Letter values.
//!
//! a=1 … i=9, j=1 … r=9, s=1 … z=8. Names are decomposed (NFD) and stripped
//! of combining marks first, so "é" counts as "e" and "ç" as "c". Anything
//! that is not an ASCII letter afterwards is worth 0.

use super::reduce::reduce_with_masters;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase `text` and strip diacritics.
pub fn fold_name(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Value of one already-folded character.
pub fn letter_value(c: char) -> u32 {
    if c.is_ascii_lowercase() {
        (c as u32 - 'a' as u32) % 9 + 1
    } else {
        0
    }
}

/// Sum of the letter values of `name`.
pub fn name_sum(name: &str) -> u32 {
    fold_name(name).chars().map(letter_value).sum()
}

/// Vibration of a first name: the letter sum reduced by digit sums, keeping
/// 11, 22 and 33. Returns 0 when the name has no letters, which callers must
/// read as "no result".
pub fn first_name_vibration(name: &str) -> u8 {
    match name_sum(name) {
        0 => 0,
        sum => reduce_with_masters(sum),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_values() {
        assert_eq!(letter_value('a'), 1);
        assert_eq!(letter_value('i'), 9);
        assert_eq!(letter_value('j'), 1);
        assert_eq!(letter_value('r'), 9);
        assert_eq!(letter_value('s'), 1);
        assert_eq!(letter_value('z'), 8);
        assert_eq!(letter_value('-'), 0);
        assert_eq!(letter_value(' '), 0);
        assert_eq!(letter_value('A'), 0);
    }

    #[test]
    fn test_fold_name() {
        assert_eq!(fold_name("Éloïse"), "eloise");
        assert_eq!(fold_name("François"), "francois");
        assert_eq!(fold_name("JOSÉ"), "jose");
        assert_eq!(fold_name("Jean-Noël"), "jean-noel");
    }

    #[test]
    fn test_accents_do_not_change_value() {
        assert_eq!(name_sum("Hélène"), name_sum("Helene"));
        assert_eq!(first_name_vibration("Ç"), first_name_vibration("c"));
    }

    #[test]
    fn test_first_name_vibration() {
        assert_eq!(first_name_vibration("Ana"), 7);
        // m4 a1 r9 i9 e5 = 28 -> 10 -> 1
        assert_eq!(first_name_vibration("Marie"), 1);
        // k2 = 2 ; "kb" = 2 + 2 = 4
        assert_eq!(first_name_vibration("kb"), 4);
    }

    #[test]
    fn test_master_numbers_preserved() {
        // b2 i9 = 11
        assert_eq!(first_name_vibration("bi"), 11);
        // i9 i9 d4 = 22
        assert_eq!(first_name_vibration("iid"), 22);
        // i9 i9 i9 f6 = 33
        assert_eq!(first_name_vibration("iiif"), 33);
    }

    #[test]
    fn test_no_letters_is_zero() {
        assert_eq!(first_name_vibration(""), 0);
        assert_eq!(first_name_vibration("   "), 0);
        assert_eq!(first_name_vibration("1234 -"), 0);
    }
}
