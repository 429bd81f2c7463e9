//! Word Finder - CLI
//!
//! Finds scored Turkish words for a rack of letters, serves JSON requests over
//! stdin/stdout, builds the word list and benchmarks the engine.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use word_finder::{
    commands::{
        BenchmarkConfig, FindConfig, build_dictionary, draw_racks, find_words, run_benchmark,
        run_serve,
    },
    config::{Config, MergeOpts, load_config},
    core::Alphabet,
    dictionary::loader::load_from_file,
    finder::{QueryEngine, WildcardPolicy},
    output::{
        print_benchmark_result, print_dictionary_stats, print_find_result, print_points_table,
    },
    service::FindService,
};

#[derive(Parser)]
#[command(
    name = "word_finder",
    about = "Find the best-scoring Turkish words for your letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Word list to load (.json array or one word per line)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Wildcard budget check: per-letter (default) or cumulative
    #[arg(short = 'p', long, global = true)]
    wildcard_policy: Option<String>,

    /// Maximum words per length group
    #[arg(short, long, global = true)]
    limit: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find words for a rack of letters (use * for wildcards)
    Find {
        /// Letters on the rack, e.g. "kedi*"
        letters: String,

        /// Only show words containing this text
        #[arg(short, long)]
        suffix: Option<String>,

        /// Show scan statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Answer line-delimited JSON requests from stdin
    Serve,

    /// Build the JSON word list from a raw word file
    BuildDict {
        /// Raw word list, one entry per line
        input: PathBuf,

        /// Output JSON file
        #[arg(default_value = word_finder::config::DEFAULT_DICTIONARY)]
        output: PathBuf,
    },

    /// Benchmark the engine on random racks
    Benchmark {
        /// Number of racks
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Tiles per rack
        #[arg(long, default_value = "7")]
        rack_size: usize,

        /// Wildcards per rack
        #[arg(short, long, default_value = "0")]
        wildcards: usize,

        /// Seed for reproducible racks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show letter points and tile limits
    Points,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for results and `serve`
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let cli_wildcard_policy = cli
        .wildcard_policy
        .as_deref()
        .map(|name| {
            WildcardPolicy::from_name(name)
                .ok_or_else(|| anyhow!("unknown wildcard policy '{name}'"))
        })
        .transpose()?;

    let config = load_config(
        Config::default(),
        MergeOpts {
            config_path: cli.config.clone(),
            cli_dictionary: cli.dictionary.clone(),
            cli_wildcard_policy,
            cli_result_limit: cli.limit,
        },
    )?;

    match cli.command {
        Commands::Find {
            letters,
            suffix,
            verbose,
        } => run_find_command(&config, letters, suffix, verbose),
        Commands::Serve => run_serve_command(&config),
        Commands::BuildDict { input, output } => run_build_dict_command(&input, &output),
        Commands::Benchmark {
            count,
            rack_size,
            wildcards,
            seed,
        } => run_benchmark_command(
            &config,
            BenchmarkConfig {
                racks: count,
                rack_size,
                wildcards,
                seed,
                show_progress: true,
            },
        ),
        Commands::Points => {
            print_points_table(Alphabet::turkish());
            Ok(())
        }
    }
}

/// Load the dictionary once and wrap it in a shared engine
fn load_engine(config: &Config) -> Result<QueryEngine> {
    let dictionary = load_from_file(&config.dictionary)
        .context("could not load dictionary (build one with `word_finder build-dict <words.txt>`)")?;

    Ok(QueryEngine::new(Arc::new(dictionary)).with_policy(config.wildcard_policy))
}

fn run_find_command(
    config: &Config,
    letters: String,
    suffix: Option<String>,
    verbose: bool,
) -> Result<()> {
    let engine = load_engine(config)?;

    let mut find_config = FindConfig::new(letters, suffix);
    find_config.limit = config.result_limit;

    let result = find_words(find_config, &engine).map_err(|e| anyhow!(e))?;
    print_find_result(&result, verbose);
    Ok(())
}

fn run_serve_command(config: &Config) -> Result<()> {
    let engine = load_engine(config)?;
    let service = FindService::new(engine, config.result_limit);

    tracing::info!(
        words = service.engine().dictionary().len(),
        policy = config.wildcard_policy.name(),
        "serving requests from stdin"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_serve(&service, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn run_build_dict_command(input: &Path, output: &Path) -> Result<()> {
    let stats = build_dictionary(input, output)?;
    print_dictionary_stats(&stats);
    println!("\nSaved to {}", output.display());
    Ok(())
}

fn run_benchmark_command(config: &Config, benchmark: BenchmarkConfig) -> Result<()> {
    let engine = load_engine(config)?;

    println!(
        "Running benchmark on {} random racks of {} tiles ({} wildcards)...",
        benchmark.racks, benchmark.rack_size, benchmark.wildcards
    );

    let racks = draw_racks(Alphabet::turkish(), &benchmark);
    let result = run_benchmark(&engine, &racks, benchmark.show_progress);
    print_benchmark_result(&result);
    Ok(())
}
