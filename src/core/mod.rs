//! Core domain types for word finding
//!
//! Alphabet tables and the letter multiset. Everything here is pure and
//! immutable once built.

mod alphabet;
mod multiset;

pub use alphabet::{Alphabet, WILDCARD, normalize};
pub use multiset::LetterMultiset;
pub(crate) use multiset::letter_counts;
