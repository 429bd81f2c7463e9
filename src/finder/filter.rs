//! Candidate filtering
//!
//! Decides whether a dictionary word can be built from a letter multiset plus
//! a wildcard budget, without exceeding any letter's scarcity limit.

use crate::core::{Alphabet, LetterMultiset, letter_counts};

/// How wildcard deficits are charged against the budget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WildcardPolicy {
    /// Each letter's deficit is compared to the full budget on its own.
    ///
    /// A word short one `x` and one `y` passes with a single wildcard.
    #[default]
    PerLetter,
    /// Deficits are summed across the word and the total must fit the budget
    Cumulative,
}

impl WildcardPolicy {
    /// Parse a policy name
    ///
    /// Supported names: "per-letter", "cumulative"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "per-letter" | "per_letter" | "perletter" => Some(Self::PerLetter),
            "cumulative" | "strict" => Some(Self::Cumulative),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PerLetter => "per-letter",
            Self::Cumulative => "cumulative",
        }
    }
}

/// Constructibility predicate bound to an alphabet and a wildcard policy
#[derive(Debug, Clone, Copy)]
pub struct CandidateFilter<'a> {
    alphabet: &'a Alphabet,
    policy: WildcardPolicy,
}

impl<'a> CandidateFilter<'a> {
    #[must_use]
    pub const fn new(alphabet: &'a Alphabet, policy: WildcardPolicy) -> Self {
        Self { alphabet, policy }
    }

    /// Check whether `word` can be built from `multiset` and `wildcard_budget`
    ///
    /// A word is rejected when any of its letters is used more often than the
    /// letter's scarcity limit, or when the wildcards needed to cover missing
    /// letters exceed the budget (see [`WildcardPolicy`]).
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::{Alphabet, LetterMultiset};
    /// use word_finder::finder::{CandidateFilter, WildcardPolicy};
    ///
    /// let filter = CandidateFilter::new(Alphabet::turkish(), WildcardPolicy::PerLetter);
    /// let rack = LetterMultiset::new("ka*");
    ///
    /// assert!(filter.is_valid("kat", &rack, rack.wildcard_count()));
    /// assert!(!filter.is_valid("kart", &rack, 0));
    /// ```
    #[must_use]
    pub fn is_valid(&self, word: &str, multiset: &LetterMultiset, wildcard_budget: u32) -> bool {
        let mut spent = 0;

        for (letter, need) in letter_counts(word) {
            if need > self.alphabet.limit(letter) {
                return false;
            }

            let have = multiset.count(letter);
            if need > have {
                let deficit = need - have;
                let charged = match self.policy {
                    WildcardPolicy::PerLetter => deficit,
                    WildcardPolicy::Cumulative => {
                        spent += deficit;
                        spent
                    }
                };

                if charged > wildcard_budget {
                    return false;
                }
            }
        }

        true
    }
}
