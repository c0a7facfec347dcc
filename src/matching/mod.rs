//! Repeat scanning and telomere calling.
//!
//! This module provides the classification pipeline:
//!
//! - [`RepeatPattern`]: Declarative bounded-repeat motif (e.g. `C{2,4}T{1,2}A{1,3}`)
//! - [`RepeatMatch`]: One non-overlapping motif occurrence in a window
//! - [`TelomereClassifier`]: Applies the coverage-threshold or min-copies rule
//! - [`ClassificationEngine`]: Runs the full per-record pipeline
//! - [`CohortAggregator`]: Accumulates per-category contig lists across a run
//!
//! ## Matching
//!
//! Windows are scanned left to right. At each position the motif is matched
//! greedily, with backtracking, exactly as a regular expression made of
//! concatenated bounded repeats would be. A match consumes its bases and the
//! scan resumes after it, so matches never overlap.
//!
//! ## Example
//!
//! ```rust
//! use telomere_search::{ClassificationEngine, SearchConfig, SearchOptions, SequenceRecord};
//! use telomere_search::core::types::Category;
//!
//! let options = SearchOptions {
//!     window_length: Some(12),
//!     min_copies: Some(2),
//!     ..SearchOptions::default()
//! };
//! let engine = ClassificationEngine::new(SearchConfig::from_options(&options).unwrap());
//!
//! let record = SequenceRecord::new("chr1", "CCCTAACCCTAAACGTACGTTTAGGGTTAGGG");
//! let contig = engine.classify(&record);
//! assert_eq!(contig.category, Category::Both);
//! ```
//!
//! [`RepeatPattern`]: pattern::RepeatPattern
//! [`RepeatMatch`]: scanner::RepeatMatch
//! [`TelomereClassifier`]: classifier::TelomereClassifier
//! [`ClassificationEngine`]: engine::ClassificationEngine
//! [`CohortAggregator`]: cohort::CohortAggregator

pub mod classifier;
pub mod cohort;
pub mod engine;
pub mod pattern;
pub mod scanner;
