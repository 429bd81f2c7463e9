//! Word finding command
//!
//! Runs one query against the engine and returns the grouped result.

use crate::finder::{QueryEngine, QueryStats, WordGroups};

/// Configuration for a single find
pub struct FindConfig {
    pub letters: String,
    pub suffix: Option<String>,
    /// Maximum results shown per length group
    pub limit: Option<usize>,
}

impl FindConfig {
    #[must_use]
    pub const fn new(letters: String, suffix: Option<String>) -> Self {
        Self {
            letters,
            suffix,
            limit: None,
        }
    }
}

/// Result of a find
pub struct FindResult {
    pub letters: String,
    pub suffix: Option<String>,
    pub groups: WordGroups,
    pub stats: QueryStats,
}

/// Find all words buildable from the configured letters
///
/// # Errors
///
/// Returns an error if no letters were given; the engine is not run.
pub fn find_words(config: FindConfig, engine: &QueryEngine) -> Result<FindResult, String> {
    if config.letters.is_empty() {
        return Err("Letters are required".to_string());
    }

    let (mut groups, stats) = engine.execute_with_stats(&config.letters, config.suffix.as_deref());

    if let Some(limit) = config.limit {
        groups.truncate_each(limit);
    }

    Ok(FindResult {
        letters: config.letters,
        suffix: config.suffix,
        groups,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use std::sync::Arc;

    fn engine() -> QueryEngine {
        QueryEngine::new(Arc::new(Dictionary::from_words([
            "kedi", "dik", "ek", "kat", "ağaç",
        ])))
    }

    #[test]
    fn find_returns_groups() {
        let result = find_words(FindConfig::new("kedi".into(), None), &engine()).unwrap();

        assert_eq!(result.groups.total(), 3);
        assert_eq!(result.stats.scanned, 5);
        assert_eq!(result.letters, "kedi");
        assert!(result.groups.results().all(|r| r.length <= 4));
    }

    #[test]
    fn find_with_suffix() {
        let config = FindConfig::new("kedi".into(), Some("ek".into()));
        let result = find_words(config, &engine()).unwrap();

        let words: Vec<&str> = result.groups.results().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["ek"]);
        assert_eq!(result.suffix.as_deref(), Some("ek"));
    }

    #[test]
    fn find_respects_limit() {
        let mut config = FindConfig::new("kedi".into(), None);
        config.limit = Some(0);
        let result = find_words(config, &engine()).unwrap();
        assert_eq!(result.groups.total(), 0);
        assert_eq!(result.stats.matched, 3);
    }

    #[test]
    fn find_without_letters_is_error() {
        let result = find_words(FindConfig::new(String::new(), None), &engine());
        assert!(result.is_err());
    }
}
