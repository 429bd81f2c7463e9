//! Letter multiset
//!
//! The letters a player holds, counted per letter, with wildcard markers
//! counted separately.

use super::alphabet::WILDCARD;
use rustc_hash::FxHashMap;

/// Counted set of letters plus a wildcard count
///
/// Built once per query from normalized input and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterMultiset {
    counts: FxHashMap<char, u32>,
    wildcards: u32,
}

impl LetterMultiset {
    /// Build a multiset from a (lowercase) letter string
    ///
    /// Wildcard markers are stripped and counted as `wildcard_count`.
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::LetterMultiset;
    ///
    /// let rack = LetterMultiset::new("ağa*");
    /// assert_eq!(rack.count('a'), 2);
    /// assert_eq!(rack.count('ğ'), 1);
    /// assert_eq!(rack.wildcard_count(), 1);
    /// ```
    #[must_use]
    pub fn new(letters: &str) -> Self {
        let mut counts = FxHashMap::default();
        let mut wildcards = 0;

        for ch in letters.chars() {
            if ch == WILDCARD {
                wildcards += 1;
            } else {
                *counts.entry(ch).or_insert(0) += 1;
            }
        }

        Self { counts, wildcards }
    }

    /// How many of `letter` the multiset holds
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub const fn wildcard_count(&self) -> u32 {
        self.wildcards
    }

    /// Total number of non-wildcard letters
    #[must_use]
    pub fn letter_total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// True when there are no non-wildcard letters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (letter, count) pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.counts.iter().map(|(&letter, &count)| (letter, count))
    }
}

/// Count each letter of a word
pub(crate) fn letter_counts(word: &str) -> FxHashMap<char, u32> {
    let mut counts = FxHashMap::default();
    for ch in word.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_plain_letters() {
        let rack = LetterMultiset::new("kedi");
        assert_eq!(rack.count('k'), 1);
        assert_eq!(rack.count('e'), 1);
        assert_eq!(rack.count('d'), 1);
        assert_eq!(rack.count('i'), 1);
        assert_eq!(rack.count('z'), 0);
        assert_eq!(rack.wildcard_count(), 0);
        assert_eq!(rack.letter_total(), 4);
    }

    #[test]
    fn counts_duplicates() {
        let rack = LetterMultiset::new("aaab");
        assert_eq!(rack.count('a'), 3);
        assert_eq!(rack.count('b'), 1);
        assert_eq!(rack.iter().count(), 2);
    }

    #[test]
    fn strips_wildcards_anywhere() {
        let rack = LetterMultiset::new("*k*a*");
        assert_eq!(rack.wildcard_count(), 3);
        assert_eq!(rack.count('*'), 0);
        assert_eq!(rack.letter_total(), 2);
    }

    #[test]
    fn all_wildcards_gives_empty_map() {
        let rack = LetterMultiset::new("**");
        assert!(rack.is_empty());
        assert_eq!(rack.wildcard_count(), 2);
    }

    #[test]
    fn empty_input() {
        let rack = LetterMultiset::new("");
        assert!(rack.is_empty());
        assert_eq!(rack.wildcard_count(), 0);
        assert_eq!(rack, LetterMultiset::default());
    }

    #[test]
    fn multibyte_letters_count_once() {
        let rack = LetterMultiset::new("şüğş");
        assert_eq!(rack.count('ş'), 2);
        assert_eq!(rack.count('ü'), 1);
        assert_eq!(rack.count('ğ'), 1);
        assert_eq!(rack.letter_total(), 4);
    }

    #[test]
    fn word_letter_counts() {
        let counts = letter_counts("çiçek");
        assert_eq!(counts.get(&'ç'), Some(&2));
        assert_eq!(counts.get(&'i'), Some(&1));
        assert_eq!(counts.get(&'e'), Some(&1));
        assert_eq!(counts.get(&'k'), Some(&1));
        assert_eq!(counts.len(), 4);
    }
}
