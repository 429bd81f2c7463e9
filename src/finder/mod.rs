//! Word finding
//!
//! Candidate filtering, scoring and the query engine that ties them together.

mod engine;
pub mod filter;
pub mod scorer;

pub use engine::{QueryEngine, QueryStats, WordGroups, WordResult};
pub use filter::{CandidateFilter, WildcardPolicy};
pub use scorer::score;
