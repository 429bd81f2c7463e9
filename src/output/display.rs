//! Display functions for command results

use super::formatters::{joker_positions, letters_by_points, match_positions, to_turkish_upper};
use crate::commands::{BenchmarkResult, FindResult};
use crate::core::{Alphabet, WILDCARD};
use crate::dictionary::builder::DictionaryStats;
use colored::Colorize;

/// Print the result of a find
pub fn print_find_result(result: &FindResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    print!(
        "Letters: {}",
        to_turkish_upper(&result.letters).bright_yellow().bold()
    );
    if let Some(suffix) = &result.suffix {
        print!("   Contains: {}", to_turkish_upper(suffix).bright_yellow());
    }
    println!();
    println!("{}", "─".repeat(60).cyan());

    if result.groups.is_empty() {
        println!("\n{}", "No words found".red().bold());
        return;
    }

    let match_len = result.suffix.as_deref().map_or(0, |s| s.chars().count());

    // longest words first
    for (length, group) in result.groups.iter().rev() {
        println!(
            "\n{} {}",
            format!("{length} letters").bright_cyan().bold(),
            format!("({})", group.len()).bright_black()
        );

        for word in group {
            println!(
                "  {}  {}",
                styled_word(&word.word, &result.letters, word.match_index, match_len),
                format!("{} pts", word.points).bright_yellow()
            );
        }
    }

    println!();
    if result.letters.contains(WILDCARD) {
        println!("  {}", "red letters come from wildcards".bright_black());
    }
    println!(
        "{}",
        format!("✅ {} words found", result.groups.total())
            .green()
            .bold()
    );

    if verbose {
        println!(
            "  Scanned {} words in {:.2}ms ({} matched)",
            result.stats.scanned,
            result.stats.elapsed.as_secs_f64() * 1000.0,
            result.stats.matched
        );
    }
}

/// Wildcard letters in red, suffix match in green
fn styled_word(word: &str, letters: &str, match_index: Option<usize>, match_len: usize) -> String {
    let jokers = joker_positions(word, letters);
    let matched = match_positions(word, match_index, match_len);

    word.chars()
        .zip(jokers)
        .zip(matched)
        .map(|((ch, joker), in_match)| {
            let letter = to_turkish_upper(&ch.to_string());
            if joker {
                letter.red().bold().to_string()
            } else if in_match {
                letter.green().bold().to_string()
            } else {
                letter
            }
        })
        .collect()
}

/// Print the letter point and tile tables
pub fn print_points_table(alphabet: &Alphabet) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LETTER POINTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (points, letters) in letters_by_points(alphabet).into_iter().rev() {
        let shown: Vec<String> = letters
            .iter()
            .map(|&letter| {
                format!(
                    "{}×{}",
                    to_turkish_upper(&letter.to_string()),
                    alphabet.limit(letter)
                )
            })
            .collect();
        println!(
            "  {:>3} pts  {}",
            points.to_string().bright_yellow().bold(),
            shown.join("  ")
        );
    }

    println!("\n  {}", "×N = maximum tiles of that letter".bright_black());
}

/// Print the stats of a built dictionary
pub fn print_dictionary_stats(stats: &DictionaryStats) {
    println!("\n📚 {}", "Dictionary".bright_cyan().bold());
    println!("   Total words:      {}", stats.total.to_string().green());
    println!("   Shortest length:  {}", stats.shortest);
    println!("   Longest length:   {}", stats.longest);
    println!("   Longest word:     {}", stats.longest_word.bright_yellow());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Racks tested:     {}", result.total_queries);
    println!(
        "   Average matches:  {}",
        format!("{:.1}", result.average_matches)
            .bright_yellow()
            .bold()
    );
    println!("   Most matches:     {}", result.max_matches);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    if result.total_queries == 0 {
        return;
    }

    println!("\n📈 {}", "Longest word per rack:".bright_cyan().bold());
    for (&length, &count) in &result.distribution {
        let pct = (count as f64 / result.total_queries as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {length:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
