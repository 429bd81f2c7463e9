//! Benchmark command
//!
//! Draws random racks from a tile bag and measures query throughput with the
//! queries running concurrently.

use crate::core::{Alphabet, WILDCARD};
use crate::finder::QueryEngine;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Benchmark parameters
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub racks: usize,
    /// Tiles per rack, wildcards included
    pub rack_size: usize,
    pub wildcards: usize,
    /// Fixed seed for reproducible racks
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            racks: 50,
            rack_size: 7,
            wildcards: 0,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub total_matches: usize,
    pub average_matches: f64,
    pub max_matches: usize,
    /// Queries per longest-match length (0 when nothing matched)
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// One tile per scarcity slot of every letter
fn tile_bag(alphabet: &Alphabet) -> Vec<char> {
    alphabet
        .letters()
        .flat_map(|letter| std::iter::repeat_n(letter, alphabet.limit(letter) as usize))
        .collect()
}

/// Draw `config.racks` random racks
///
/// Each rack takes `rack_size - wildcards` distinct tiles from the bag and
/// appends the wildcards.
#[must_use]
pub fn draw_racks(alphabet: &Alphabet, config: &BenchmarkConfig) -> Vec<String> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let bag = tile_bag(alphabet);
    let wildcards = config.wildcards.min(config.rack_size);
    let letters = config.rack_size - wildcards;

    tracing::debug!(seed, bag = bag.len(), "drawing racks");

    (0..config.racks)
        .map(|_| {
            let mut rack: String = bag.choose_multiple(&mut rng, letters).collect();
            rack.extend(std::iter::repeat_n(WILDCARD, wildcards));
            rack
        })
        .collect()
}

/// Run every rack through the engine in parallel
#[must_use]
pub fn run_benchmark(engine: &QueryEngine, racks: &[String], show_progress: bool) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(racks.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes: Vec<(usize, usize)> = racks
        .par_iter()
        .map(|rack| {
            let groups = engine.execute(rack, None);
            pb.inc(1);
            (groups.total(), groups.longest().unwrap_or(0))
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution = BTreeMap::new();
    for &(_, longest) in &outcomes {
        *distribution.entry(longest).or_insert(0) += 1;
    }

    let total_queries = outcomes.len();
    let total_matches: usize = outcomes.iter().map(|&(matches, _)| matches).sum();
    let max_matches = outcomes.iter().map(|&(matches, _)| matches).max().unwrap_or(0);

    BenchmarkResult {
        total_queries,
        total_matches,
        average_matches: if total_queries > 0 {
            total_matches as f64 / total_queries as f64
        } else {
            0.0
        },
        max_matches,
        distribution,
        duration,
        queries_per_second: total_queries as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
