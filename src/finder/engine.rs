//! Query engine
//!
//! Scans the whole dictionary for one query and assembles the scored,
//! length-grouped result.

use super::filter::{CandidateFilter, WildcardPolicy};
use super::scorer::score;
use crate::core::{Alphabet, LetterMultiset, normalize};
use crate::dictionary::Dictionary;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// One matched word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordResult {
    pub word: String,
    /// Length in letters
    pub length: usize,
    pub points: u32,
    /// Letter index of the first occurrence of the suffix, if one was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_index: Option<usize>,
}

/// Matched words grouped by length, each group sorted by descending points
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordGroups(BTreeMap<usize, Vec<WordResult>>);

impl WordGroups {
    fn from_results(results: Vec<WordResult>) -> Self {
        let mut groups: BTreeMap<usize, Vec<WordResult>> = BTreeMap::new();
        for result in results {
            groups.entry(result.length).or_default().push(result);
        }

        // stable: equal points keep dictionary order
        for group in groups.values_mut() {
            group.sort_by(|a, b| b.points.cmp(&a.points));
        }

        Self(groups)
    }

    /// Results of a given length, best first
    #[must_use]
    pub fn get(&self, length: usize) -> Option<&[WordResult]> {
        self.0.get(&length).map(Vec::as_slice)
    }

    /// Iterate groups in ascending length order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, &[WordResult])> {
        self.0.iter().map(|(&len, group)| (len, group.as_slice()))
    }

    /// Iterate every result across all groups
    pub fn results(&self) -> impl Iterator<Item = &WordResult> {
        self.0.values().flatten()
    }

    /// Number of results across all groups
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Longest matched length, if any
    #[must_use]
    pub fn longest(&self) -> Option<usize> {
        self.0.keys().next_back().copied()
    }

    /// Keep at most `limit` results per group
    pub fn truncate_each(&mut self, limit: usize) {
        for group in self.0.values_mut() {
            group.truncate(limit);
        }
    }
}

/// Counters for a single execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryStats {
    pub scanned: usize,
    pub matched: usize,
    pub elapsed: Duration,
}

/// Word finder over a shared dictionary
///
/// Cheap to clone; every clone shares the same dictionary.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    dictionary: Arc<Dictionary>,
    alphabet: &'static Alphabet,
    policy: WildcardPolicy,
}

impl QueryEngine {
    /// Create an engine over the Turkish alphabet with the default wildcard policy
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self {
            dictionary,
            alphabet: Alphabet::turkish(),
            policy: WildcardPolicy::default(),
        }
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: WildcardPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn policy(&self) -> WildcardPolicy {
        self.policy
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Find every dictionary word buildable from `letters`
    ///
    /// `letters` may contain `*` wildcards. When `suffix` is given (and not
    /// empty) only words containing it are returned. Both inputs are
    /// lowercased with Turkish rules first.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use word_finder::dictionary::Dictionary;
    /// use word_finder::finder::QueryEngine;
    ///
    /// let engine = QueryEngine::new(Arc::new(Dictionary::from_words(["kat", "kalem"])));
    /// let groups = engine.execute("KA*", None);
    ///
    /// let three = groups.get(3).unwrap();
    /// assert_eq!(three[0].word, "kat");
    /// assert!(groups.get(5).is_none());
    /// ```
    #[must_use]
    pub fn execute(&self, letters: &str, suffix: Option<&str>) -> WordGroups {
        self.execute_with_stats(letters, suffix).0
    }

    /// Like [`execute`](Self::execute), also returning scan counters
    #[must_use]
    pub fn execute_with_stats(&self, letters: &str, suffix: Option<&str>) -> (WordGroups, QueryStats) {
        let start = Instant::now();

        let letters = normalize(letters);
        let suffix = suffix.map(normalize).filter(|s| !s.is_empty());

        let multiset = LetterMultiset::new(&letters);
        let wildcards = multiset.wildcard_count();
        // markers count in the raw length and again as wildcards
        let max_length = letters.chars().count() + wildcards as usize;

        let filter = CandidateFilter::new(self.alphabet, self.policy);

        let results: Vec<WordResult> = self
            .dictionary
            .words()
            .par_iter()
            .filter_map(|word| {
                let match_index = match suffix.as_deref() {
                    Some(needle) => Some(letter_index_of(word, needle)?),
                    None => None,
                };

                let length = word.chars().count();
                if length > max_length || !filter.is_valid(word, &multiset, wildcards) {
                    return None;
                }

                Some(WordResult {
                    word: word.clone(),
                    length,
                    points: score(word, self.alphabet),
                    match_index,
                })
            })
            .collect();

        let stats = QueryStats {
            scanned: self.dictionary.len(),
            matched: results.len(),
            elapsed: start.elapsed(),
        };

        tracing::debug!(
            letters = %letters,
            suffix = suffix.as_deref().unwrap_or(""),
            policy = self.policy.name(),
            scanned = stats.scanned,
            matched = stats.matched,
            elapsed_us = stats.elapsed.as_micros() as u64,
            "query executed"
        );

        (WordGroups::from_results(results), stats)
    }
}

/// Letter (not byte) index of the first occurrence of `needle` in `word`
fn letter_index_of(word: &str, needle: &str) -> Option<usize> {
    word.find(needle).map(|byte| word[..byte].chars().count())
}
