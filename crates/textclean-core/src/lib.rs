//! Core library for textclean.
//!
//! Normalizes messy text and computes descriptive statistics over the result.
//! Both steps are pure functions: they never fail and hold no state beyond
//! the immutable built-in stopword set.
//!
//! # Modules
//!
//! - [`normalize`] - Trim, strip non-ASCII, collapse whitespace, re-case
//! - [`stats`] - Word count, sentence count, top non-stopwords
//! - [`stopwords`] - Built-in and extended stopword sets
//! - [`text`] - Sentence and word splitting shared by both steps
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textclean_core::{analyze, process};
//!
//! let cleaned = process("  the CAT sat.   the cat ran!  ");
//! assert_eq!(cleaned, "The cat sat. The cat ran!");
//!
//! let stats = analyze(&cleaned);
//! assert_eq!(stats.word_count, 6);
//! assert_eq!(stats.sentence_count, 2);
//! assert_eq!(stats.top_words[0].word, "cat");
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod normalize;
pub mod stats;
pub mod stopwords;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use normalize::process;
pub use stats::{Analyzer, DEFAULT_TOP_WORDS, TextStats, WordCount, analyze};
pub use stopwords::StopWords;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
