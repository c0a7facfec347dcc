use crate::core::contig::EndClassification;
use crate::core::sequence::{Terminus, Window};
use crate::core::types::DecisionMode;
use crate::matching::pattern::RepeatPattern;
use crate::matching::scanner::RepeatMatch;

/// Safely convert usize to f64 for coverage ratios
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Fraction of the nominal window length covered by `matches`.
///
/// Uses the configured length, not the actual window length, so truncated
/// windows from short contigs can never reach full coverage.
#[must_use]
pub fn coverage(matches: &[RepeatMatch], nominal_length: usize) -> f64 {
    if nominal_length == 0 {
        return 0.0;
    }
    let covered: usize = matches.iter().map(|m| m.length).sum();
    count_to_f64(covered) / count_to_f64(nominal_length)
}

/// Applies the run's decision mode to the matches from one window
#[derive(Debug, Clone, Copy)]
pub struct TelomereClassifier {
    mode: DecisionMode,
}

impl TelomereClassifier {
    #[must_use]
    pub fn new(mode: DecisionMode) -> Self {
        Self { mode }
    }

    /// Boundary values count as found in both modes.
    #[must_use]
    pub fn is_telomeric(&self, matches: &[RepeatMatch], nominal_length: usize) -> bool {
        match self.mode {
            DecisionMode::Threshold(ratio) => coverage(matches, nominal_length) >= ratio,
            DecisionMode::MinCopies(count) => matches.len() >= count,
        }
    }

    /// Scan `window` with `pattern` and call a telomere for that end
    #[must_use]
    pub fn classify(
        &self,
        terminus: Terminus,
        window: &Window<'_>,
        pattern: &RepeatPattern,
    ) -> EndClassification {
        let matches = pattern.find_all(window.bases());
        let telomere_found = self.is_telomeric(&matches, window.nominal_length());

        EndClassification {
            terminus,
            window: window.to_text(),
            matches,
            telomere_found,
        }
    }
}
