//! Offline dictionary builder
//!
//! Turns a raw word list into the deduplicated, lowercase, alphabet-only list
//! the query engine trusts. This runs once, ahead of serving.

use crate::core::{Alphabet, normalize};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Summary of a built word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryStats {
    pub total: usize,
    pub shortest: usize,
    pub longest: usize,
    pub longest_word: String,
}

impl DictionaryStats {
    /// Compute stats for a word list, or `None` if it is empty
    #[must_use]
    pub fn from_words(words: &[String]) -> Option<Self> {
        let shortest = words.iter().map(|w| w.chars().count()).min()?;

        // last of the longest words wins ties
        let mut longest_word = &words[0];
        let mut longest = longest_word.chars().count();
        for word in &words[1..] {
            let len = word.chars().count();
            if len >= longest {
                longest = len;
                longest_word = word;
            }
        }

        Some(Self {
            total: words.len(),
            shortest,
            longest,
            longest_word: longest_word.clone(),
        })
    }
}

/// Whether a normalized entry is a playable single word
///
/// Entries must be longer than one letter and consist only of alphabet letters.
#[must_use]
pub fn is_playable(word: &str, alphabet: &Alphabet) -> bool {
    word.chars().count() > 1 && word.chars().all(|ch| alphabet.contains(ch))
}

/// Build a sorted, deduplicated word list from raw newline-separated text
///
/// # Examples
/// ```
/// use word_finder::dictionary::builder::build_word_list;
///
/// let words = build_word_list("Kedi\nKEDİ\na\nçay evi\nIŞIK\n");
/// assert_eq!(words, vec!["kedi", "ışık"]);
/// ```
#[must_use]
pub fn build_word_list(raw: &str) -> Vec<String> {
    let alphabet = Alphabet::turkish();

    let mut words: Vec<String> = raw
        .lines()
        .map(str::trim)
        .map(normalize)
        .filter(|word| is_playable(word, alphabet))
        .collect();

    words.sort_unstable();
    words.dedup();
    words
}

/// Write a word list as a pretty-printed JSON array
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or the file
/// cannot be written.
pub fn write_json<P: AsRef<Path>>(path: P, words: &[String]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(words)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::load_from_file;

    #[test]
    fn drops_short_and_multiword_entries() {
        let words = build_word_list("a\nev\ngüzel ev\n\n  kapı  \n");
        assert_eq!(words, vec!["ev", "kapı"]);
    }

    #[test]
    fn drops_non_alphabet_entries() {
        let words = build_word_list("wifi\nabc1\nkat\nx-ray\n");
        assert_eq!(words, vec!["kat"]);
    }

    #[test]
    fn lowercases_with_turkish_rules() {
        let words = build_word_list("IRMAK\nİNEK\nÇİÇEK\n");
        assert_eq!(words, vec!["inek", "çiçek", "ırmak"]);
    }

    #[test]
    fn sorts_and_deduplicates() {
        let words = build_word_list("zil\nkedi\nKedi\nat\nzil\n");
        assert_eq!(words, vec!["at", "kedi", "zil"]);
    }

    #[test]
    fn stats_for_words() {
        let words: Vec<String> = ["at", "kedi", "kelebek", "ağaççı"]
            .into_iter()
            .map(String::from)
            .collect();
        let stats = DictionaryStats::from_words(&words).unwrap();

        assert_eq!(stats.total, 4);
        assert_eq!(stats.shortest, 2);
        assert_eq!(stats.longest, 7);
        assert_eq!(stats.longest_word, "kelebek");
    }

    #[test]
    fn stats_longest_tie_keeps_last() {
        let words: Vec<String> = ["kedi", "kaya", "at"].into_iter().map(String::from).collect();
        let stats = DictionaryStats::from_words(&words).unwrap();

        assert_eq!(stats.longest, 4);
        assert_eq!(stats.longest_word, "kaya");
    }

    #[test]
    fn stats_for_empty_list() {
        assert_eq!(DictionaryStats::from_words(&[]), None);
    }

    #[test]
    fn write_json_round_trips_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("words.json");
        let words = build_word_list("kedi\nşeker\n");

        write_json(&path, &words).unwrap();

        let dictionary = load_from_file(&path).unwrap();
        assert_eq!(dictionary.words(), words.as_slice());
    }
}
