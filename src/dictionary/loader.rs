//! Dictionary loading
//!
//! Reads a prepared word list from disk: JSON arrays (`.json`) or one word per
//! line (anything else).

use super::Dictionary;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a dictionary from a file
///
/// Files ending in `.json` must hold an array of strings. Other files are
/// read line by line; surrounding whitespace is trimmed and blank lines are
/// skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the JSON is malformed.
///
/// # Examples
/// ```no_run
/// use word_finder::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/turkish-words.json").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read dictionary {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let dictionary = if is_json {
        let words: Vec<String> = serde_json::from_str(&content)
            .with_context(|| format!("malformed JSON word list {}", path.display()))?;
        Dictionary::from_words(words)
    } else {
        words_from_lines(&content)
    };

    tracing::info!(
        path = %path.display(),
        words = dictionary.len(),
        "dictionary loaded"
    );

    Ok(dictionary)
}

/// Build a dictionary from newline-separated text
#[must_use]
pub fn words_from_lines(content: &str) -> Dictionary {
    Dictionary::from_words(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_lines_skips_blank_lines() {
        let dictionary = words_from_lines("kedi\n\n  kat \r\nağaç\n");
        assert_eq!(dictionary.words(), &["kedi", "kat", "ağaç"]);
    }

    #[test]
    fn load_text_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "kedi").unwrap();
        writeln!(file, "köpek").unwrap();
        writeln!(file, "kedi").unwrap();

        let dictionary = load_from_file(file.path()).unwrap();
        assert_eq!(dictionary.words(), &["kedi", "köpek"]);
    }

    #[test]
    fn load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"["ağaç", "şeker", "ağaç"]"#).unwrap();

        let dictionary = load_from_file(file.path()).unwrap();
        assert_eq!(dictionary.words(), &["ağaç", "şeker"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"words": 3}}"#).unwrap();

        let err = load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("malformed JSON"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(dir.path().join("nope.txt")).unwrap_err();
        assert!(err.to_string().contains("failed to read dictionary"));
    }
}
