use serde::{Deserialize, Serialize};

/// Rule used to call a telomere from the repeat matches in one window.
///
/// Exactly one mode is active for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionMode {
    /// Fraction of the nominal window length covered by matches
    Threshold(f64),
    /// Minimum number of non-overlapping matches
    MinCopies(usize),
}

impl Default for DecisionMode {
    fn default() -> Self {
        Self::Threshold(crate::matching::engine::DEFAULT_THRESHOLD)
    }
}

impl std::fmt::Display for DecisionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Threshold(ratio) => write!(f, "Threshold: {ratio}"),
            Self::MinCopies(count) => write!(f, "Minimum copies: {count}"),
        }
    }
}

/// Per-contig outcome derived from the two terminal calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Both,
    StartOnly,
    EndOnly,
    None,
}

impl Category {
    #[must_use]
    pub fn from_flags(start: bool, end: bool) -> Self {
        match (start, end) {
            (true, true) => Category::Both,
            (true, false) => Category::StartOnly,
            (false, true) => Category::EndOnly,
            (false, false) => Category::None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Both => write!(f, "both"),
            Self::StartOnly => write!(f, "start_only"),
            Self::EndOnly => write!(f, "end_only"),
            Self::None => write!(f, "none"),
        }
    }
}
