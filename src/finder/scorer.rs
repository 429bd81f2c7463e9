//! Word scoring

use crate::core::Alphabet;

/// Sum of letter point values for a word
///
/// Letters missing from the point table contribute nothing.
///
/// # Examples
/// ```
/// use word_finder::core::Alphabet;
/// use word_finder::finder::score;
///
/// // k=1, e=1, d=3, i=1
/// assert_eq!(score("kedi", Alphabet::turkish()), 6);
/// ```
#[must_use]
pub fn score(word: &str, alphabet: &Alphabet) -> u32 {
    word.chars().map(|letter| alphabet.points(letter)).sum()
}
