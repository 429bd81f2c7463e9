//! Formatting utilities for terminal output

use crate::core::{Alphabet, WILDCARD, letter_counts, normalize};
use std::collections::BTreeMap;

/// Mark the letters of a word covered by its suffix match
///
/// All `false` when there is no match or the match runs past the word.
/// Indices are in letters.
#[must_use]
pub fn match_positions(word: &str, match_index: Option<usize>, match_len: usize) -> Vec<bool> {
    let len = word.chars().count();

    match match_index {
        Some(start) if start + match_len <= len => {
            (0..len).map(|i| i >= start && i < start + match_len).collect()
        }
        _ => vec![false; len],
    }
}

/// Mark the letters of a word that must come from a wildcard
///
/// Walks the word left to right, taking each letter from the rack while any
/// remain; a letter with no rack copy left is a wildcard.
///
/// # Examples
/// ```
/// use word_finder::output::formatters::joker_positions;
///
/// assert_eq!(joker_positions("kat", "ka*"), vec![false, false, true]);
/// ```
#[must_use]
pub fn joker_positions(word: &str, letters: &str) -> Vec<bool> {
    let rack: String = normalize(letters).chars().filter(|&ch| ch != WILDCARD).collect();
    let mut remaining = letter_counts(&rack);

    word.chars()
        .map(|ch| match remaining.get_mut(&ch) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
        .collect()
}

/// Letters grouped by point value, lowest value first
#[must_use]
pub fn letters_by_points(alphabet: &Alphabet) -> BTreeMap<u32, Vec<char>> {
    let mut groups: BTreeMap<u32, Vec<char>> = BTreeMap::new();
    for letter in alphabet.letters() {
        groups.entry(alphabet.points(letter)).or_default().push(letter);
    }
    groups
}

/// Uppercase with Turkish rules (`i` to `İ`, `ı` to `I`)
#[must_use]
pub fn to_turkish_upper(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'i' => out.push('İ'),
            'ı' => out.push('I'),
            _ => out.extend(ch.to_uppercase()),
        }
    }
    out
}
