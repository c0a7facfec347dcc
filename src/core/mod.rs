//! Core data types for telomere classification.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`SequenceRecord`]: A FASTA record as read from the input
//! - [`NormalizedSequence`]: Uppercased sequence with terminal `N` runs removed
//! - [`Window`]: The leading or trailing bases of a normalized sequence
//! - [`DecisionMode`], [`Category`]: Decision rule and per-contig outcome
//! - [`EndClassification`], [`ContigClassification`]: Per-end and per-contig results
//!
//! ## Windows
//!
//! Each contig is examined at both termini:
//!
//! | Terminus | Window            | Motif   |
//! |----------|-------------------|---------|
//! | Start    | first `n` bases   | forward |
//! | End      | last `n` bases    | reverse |
//!
//! Contigs shorter than `n` are scanned in full at both ends.
//!
//! [`SequenceRecord`]: sequence::SequenceRecord
//! [`NormalizedSequence`]: sequence::NormalizedSequence
//! [`Window`]: sequence::Window
//! [`DecisionMode`]: types::DecisionMode
//! [`Category`]: types::Category
//! [`EndClassification`]: contig::EndClassification
//! [`ContigClassification`]: contig::ContigClassification

pub mod contig;
pub mod sequence;
pub mod types;
