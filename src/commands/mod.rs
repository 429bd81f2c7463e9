//! Command implementations

pub mod benchmark;
pub mod build_dict;
pub mod find;
pub mod serve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, draw_racks, run_benchmark};
pub use build_dict::build_dictionary;
pub use find::{FindConfig, FindResult, find_words};
pub use serve::{ServeSummary, run_serve};
