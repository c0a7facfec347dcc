use tracing::{debug, info, warn};

use crate::core::contig::ContigClassification;
use crate::core::sequence::{NormalizedSequence, SequenceRecord, Terminus};
use crate::core::types::DecisionMode;
use crate::matching::classifier::TelomereClassifier;
use crate::matching::cohort::{CohortAggregator, CohortSummary, Parameters};
use crate::matching::pattern::RepeatPattern;
use crate::utils::validation::{
    resolve_mode, resolve_patterns, validate_window_length, ConfigError,
};

/// Default number of bases scanned at each end
pub const DEFAULT_WINDOW_LENGTH: usize = 300;

/// Default fraction of the window that must be repeat-covered
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Raw, unvalidated configuration as supplied by the CLI
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub window_length: Option<usize>,
    pub threshold: Option<f64>,
    pub min_copies: Option<usize>,
    pub forward: Option<String>,
    pub reverse: Option<String>,
}

/// Validated configuration for a run
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub window_length: usize,
    pub mode: DecisionMode,
    pub forward: RepeatPattern,
    pub reverse: RepeatPattern,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            window_length: DEFAULT_WINDOW_LENGTH,
            mode: DecisionMode::Threshold(DEFAULT_THRESHOLD),
            forward: RepeatPattern::default_forward(),
            reverse: RepeatPattern::default_reverse(),
        }
    }
}

impl SearchConfig {
    /// Validate raw options.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for conflicting decision modes, an unpaired or
    /// unparseable custom pattern, or out-of-range values.
    pub fn from_options(options: &SearchOptions) -> Result<Self, ConfigError> {
        let mode = resolve_mode(options.threshold, options.min_copies, DEFAULT_THRESHOLD)?;
        let (forward, reverse) =
            resolve_patterns(options.forward.as_deref(), options.reverse.as_deref())?;
        let window_length =
            validate_window_length(options.window_length.unwrap_or(DEFAULT_WINDOW_LENGTH))?;

        Ok(Self {
            window_length,
            mode,
            forward,
            reverse,
        })
    }

    /// Parameters echoed in the cohort summary
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        Parameters {
            forward_pattern: self.forward.to_string(),
            reverse_pattern: self.reverse.to_string(),
            window_length: self.window_length,
            mode: self.mode,
        }
    }
}

/// Per-record pipeline: normalize, cut windows, scan, call, combine
#[derive(Debug, Clone)]
pub struct ClassificationEngine {
    config: SearchConfig,
    classifier: TelomereClassifier,
}

impl ClassificationEngine {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        let classifier = TelomereClassifier::new(config.mode);
        Self { config, classifier }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Classify a single record. Records are independent of each other.
    #[must_use]
    pub fn classify(&self, record: &SequenceRecord) -> ContigClassification {
        let sequence = NormalizedSequence::new(&record.bases);
        let n = self.config.window_length;

        let start_window = sequence.window(Terminus::Start, n);
        if start_window.is_truncated() {
            warn!(
                "Sequence '{}' is shorter than the window ({} < {n} bp)",
                record.id,
                sequence.len()
            );
        }

        let start = self
            .classifier
            .classify(Terminus::Start, &start_window, &self.config.forward);
        let end = self.classifier.classify(
            Terminus::End,
            &sequence.window(Terminus::End, n),
            &self.config.reverse,
        );

        let contig = ContigClassification::new(record.id.clone(), sequence.len(), start, end);
        debug!(
            "{}: {} start / {} end repeats -> {}",
            contig.id,
            contig.start.match_count(),
            contig.end.match_count(),
            contig.category
        );
        contig
    }

    /// Classify records in order, handing each result to `on_contig` and
    /// accumulating the cohort summary.
    ///
    /// Stops at the first input error; no summary is produced for a partial run.
    ///
    /// # Errors
    ///
    /// Returns the first error yielded by `records` or by `on_contig`.
    pub fn run<I, E, F>(&self, records: I, mut on_contig: F) -> Result<CohortSummary, E>
    where
        I: IntoIterator<Item = Result<SequenceRecord, E>>,
        F: FnMut(&ContigClassification) -> Result<(), E>,
    {
        info!(
            "Scanning {} bp windows for {} / {} ({})",
            self.config.window_length, self.config.forward, self.config.reverse, self.config.mode
        );

        let mut aggregator = CohortAggregator::new(self.config.parameters());
        for record in records {
            let contig = self.classify(&record?);
            on_contig(&contig)?;
            aggregator.record(&contig);
        }

        let summary = aggregator.finish();
        info!(
            "Searched {} sequences, {} with telomeric repeats",
            summary.total_sequences,
            summary.with_telomere()
        );
        Ok(summary)
    }

    /// Classify a batch of records and return results with their summary
    #[must_use]
    pub fn classify_all(
        &self,
        records: &[SequenceRecord],
    ) -> (Vec<ContigClassification>, CohortSummary) {
        let mut aggregator = CohortAggregator::new(self.config.parameters());
        let contigs: Vec<_> = records
            .iter()
            .map(|record| {
                let contig = self.classify(record);
                aggregator.record(&contig);
                contig
            })
            .collect();
        (contigs, aggregator.finish())
    }
}
