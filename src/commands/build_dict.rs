//! Dictionary build command
//!
//! Converts a raw word list into the JSON word list loaded at startup.

use crate::dictionary::builder::{DictionaryStats, build_word_list, write_json};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Build `output` from the raw list at `input` and report stats
///
/// # Errors
///
/// Returns an error if the input cannot be read, no playable words remain, or
/// the output cannot be written.
pub fn build_dictionary(input: &Path, output: &Path) -> Result<DictionaryStats> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("failed to read word list {}", input.display()))?;

    let words = build_word_list(&raw);
    let Some(stats) = DictionaryStats::from_words(&words) else {
        bail!("no playable words in {}", input.display());
    };

    write_json(output, &words)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        words = stats.total,
        "dictionary built"
    );

    Ok(stats)
}
