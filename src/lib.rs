//! # telomere-search
//!
//! A library for finding telomeric repeats at the ends of assembled contigs.
//!
//! Genome assemblies are often checked for completeness by asking which contigs
//! reach a chromosome end. Telomeres show up as tandem copies of a short motif
//! (TTAGGG/CCCTAA in vertebrates and many other eukaryotes) at the contig
//! termini.
//!
//! `telomere-search` scans a fixed-length window at the start and end of each
//! contig for a configurable repeat motif and classifies the contig as having
//! telomeric repeats at both ends, the start only, the end only, or neither.
//!
//! ## Features
//!
//! - **Terminal windows**: Scans the first/last `n` bases after trimming terminal `N`s
//! - **Tolerant motifs**: Bounded-repeat patterns such as `C{2,4}T{1,2}A{1,3}`
//! - **Two decision rules**: Coverage fraction of the window, or a minimum copy count
//! - **Cohort summary**: Per-category contig lists in input order
//!
//! ## Example
//!
//! ```rust
//! use telomere_search::{ClassificationEngine, SearchConfig, SequenceRecord};
//!
//! let engine = ClassificationEngine::new(SearchConfig::default());
//!
//! let records = vec![
//!     SequenceRecord::new("chr1", "CCCTAA".repeat(100)),
//!     SequenceRecord::new("chr2", "ACGT".repeat(100)),
//! ];
//! let (contigs, summary) = engine.classify_all(&records);
//!
//! assert!(contigs[0].start.telomere_found);
//! assert_eq!(summary.total_sequences, 2);
//! assert_eq!(summary.start_only, vec!["chr1"]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequence, window, and classification types
//! - [`matching`]: Repeat patterns, scanning, decision rules, and aggregation
//! - [`parsing`]: FASTA input
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::contig::{ContigClassification, EndClassification};
pub use core::sequence::{NormalizedSequence, SequenceRecord, Terminus, Window};
pub use core::types::*;
pub use matching::cohort::{CohortAggregator, CohortSummary, Parameters};
pub use matching::engine::{ClassificationEngine, SearchConfig, SearchOptions};
pub use matching::pattern::RepeatPattern;
pub use matching::scanner::RepeatMatch;
pub use utils::validation::ConfigError;
