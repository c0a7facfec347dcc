//! Run-level accumulation of per-contig classifications.

use serde::{Deserialize, Serialize};

use crate::core::contig::ContigClassification;
use crate::core::types::{Category, DecisionMode};

/// Run parameters echoed alongside the cohort summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub forward_pattern: String,
    pub reverse_pattern: String,
    pub window_length: usize,
    pub mode: DecisionMode,
}

/// Final counts and category listings for a run.
///
/// Id lists keep input order. Contigs with no telomere are counted in
/// `total_sequences` but not listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortSummary {
    pub total_sequences: usize,
    pub both: Vec<String>,
    pub start_only: Vec<String>,
    pub end_only: Vec<String>,
    pub parameters: Parameters,
}

impl CohortSummary {
    /// Ids listed under `category` (always empty for `Category::None`)
    #[must_use]
    pub fn ids(&self, category: Category) -> &[String] {
        match category {
            Category::Both => &self.both,
            Category::StartOnly => &self.start_only,
            Category::EndOnly => &self.end_only,
            Category::None => &[],
        }
    }

    /// Contigs with a telomere at either end
    #[must_use]
    pub fn with_telomere(&self) -> usize {
        self.both.len() + self.start_only.len() + self.end_only.len()
    }
}

/// Mutable accumulator that becomes a [`CohortSummary`] once input is exhausted
#[derive(Debug, Clone)]
pub struct CohortAggregator {
    summary: CohortSummary,
}

impl CohortAggregator {
    #[must_use]
    pub fn new(parameters: Parameters) -> Self {
        Self {
            summary: CohortSummary {
                total_sequences: 0,
                both: Vec::new(),
                start_only: Vec::new(),
                end_only: Vec::new(),
                parameters,
            },
        }
    }

    /// Count one contig and list it under its category
    pub fn record(&mut self, contig: &ContigClassification) {
        self.summary.total_sequences += 1;
        let list = match contig.category {
            Category::Both => &mut self.summary.both,
            Category::StartOnly => &mut self.summary.start_only,
            Category::EndOnly => &mut self.summary.end_only,
            Category::None => return,
        };
        list.push(contig.id.clone());
    }

    /// Append `other`'s results after ours.
    ///
    /// Merging chunk aggregators in input order gives the same summary as
    /// recording every contig sequentially. Parameters of `self` are kept.
    pub fn merge(&mut self, other: CohortAggregator) {
        let other = other.summary;
        self.summary.total_sequences += other.total_sequences;
        self.summary.both.extend(other.both);
        self.summary.start_only.extend(other.start_only);
        self.summary.end_only.extend(other.end_only);
    }

    #[must_use]
    pub fn total_sequences(&self) -> usize {
        self.summary.total_sequences
    }

    #[must_use]
    pub fn finish(self) -> CohortSummary {
        self.summary
    }
}
