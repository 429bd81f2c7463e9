//! Dictionary of playable words
//!
//! The word set is loaded once at startup and shared read-only by every query.

pub mod builder;
pub mod loader;

use rustc_hash::FxHashSet;

/// Deduplicated, lowercase word set
///
/// Entries are trusted to contain only alphabet letters; the engine does not
/// re-validate them per query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary, keeping the first occurrence of each word
    ///
    /// # Examples
    /// ```
    /// use word_finder::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["kedi", "kat", "kedi"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("kat"));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = FxHashSet::default();
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|word| index.insert(word.clone()))
            .collect();

        Self { words, index }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }
}
