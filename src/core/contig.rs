use serde::{Deserialize, Serialize};

use crate::core::sequence::Terminus;
use crate::core::types::Category;
use crate::matching::scanner::RepeatMatch;

/// Repeat matches and telomere call for one end of a contig
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndClassification {
    /// Which end was scanned
    pub terminus: Terminus,

    /// Window contents that were scanned
    pub window: String,

    /// Non-overlapping matches, in order of occurrence
    pub matches: Vec<RepeatMatch>,

    /// Whether the active decision mode called a telomere
    pub telomere_found: bool,
}

impl EndClassification {
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Total bases covered by matches
    #[must_use]
    pub fn matched_length(&self) -> usize {
        self.matches.iter().map(|m| m.length).sum()
    }

    /// Matched texts in order
    pub fn match_texts(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().map(|m| m.text.as_str())
    }
}

/// Classification of a whole contig from its two terminal calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContigClassification {
    /// Record identifier (full definition line)
    pub id: String,

    /// Length after normalization
    pub length: usize,

    pub start: EndClassification,
    pub end: EndClassification,
    pub category: Category,
}

impl ContigClassification {
    /// Combine two end calls; the category follows from their flags alone.
    pub fn new(
        id: impl Into<String>,
        length: usize,
        start: EndClassification,
        end: EndClassification,
    ) -> Self {
        let category = Category::from_flags(start.telomere_found, end.telomere_found);
        Self {
            id: id.into(),
            length,
            start,
            end,
            category,
        }
    }
}
