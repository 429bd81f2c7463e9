//! Word Finder
//!
//! Finds every Turkish dictionary word that can be built from a rack of
//! letters and `*` wildcards, scores each word by letter values and groups the
//! results by length, best first.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use word_finder::dictionary::Dictionary;
//! use word_finder::finder::QueryEngine;
//!
//! let dictionary = Arc::new(Dictionary::from_words(["kedi", "dik", "kat"]));
//! let engine = QueryEngine::new(dictionary);
//!
//! let groups = engine.execute("kedi", None);
//! for (length, words) in groups.iter() {
//!     for word in words {
//!         println!("{length}: {} ({} pts)", word.word, word.points);
//!     }
//! }
//! ```

// Core domain types
pub mod core;

// Matching, scoring and query execution
pub mod finder;

// Word list loading and building
pub mod dictionary;

// Request validation and error mapping
pub mod service;

// Layered runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
