//! Centralized validation of run configuration.
//!
//! Every check here runs before the first record is read, so a bad
//! configuration never produces a partial report.

use crate::core::types::DecisionMode;
use crate::matching::pattern::{PatternError, RepeatPattern};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("You can only specify one of '--threshold' or '--min-copies'")]
    ConflictingModes,

    #[error(
        "If specifying a custom repeat pattern, you must supply BOTH forward and reverse patterns (missing {missing})"
    )]
    UnpairedPattern { missing: &'static str },

    #[error("Window length must be greater than 0")]
    InvalidWindowLength,

    #[error("Threshold must be between 0 and 1, got {0}")]
    ThresholdOutOfRange(f64),

    #[error("Minimum copies must be at least 1")]
    InvalidMinCopies,

    #[error("Invalid {which} pattern '{text}': {source}")]
    InvalidPattern {
        which: &'static str,
        text: String,
        #[source]
        source: PatternError,
    },
}

/// Pick the decision mode from the two mutually exclusive options.
///
/// # Errors
///
/// Returns `ConfigError::ConflictingModes` if both are given, and range errors
/// for an out-of-range threshold or a zero copy count.
pub fn resolve_mode(
    threshold: Option<f64>,
    min_copies: Option<usize>,
    default_threshold: f64,
) -> Result<DecisionMode, ConfigError> {
    match (threshold, min_copies) {
        (Some(_), Some(_)) => Err(ConfigError::ConflictingModes),
        (None, Some(0)) => Err(ConfigError::InvalidMinCopies),
        (None, Some(count)) => Ok(DecisionMode::MinCopies(count)),
        (Some(ratio), None) => validate_threshold(ratio).map(DecisionMode::Threshold),
        (None, None) => validate_threshold(default_threshold).map(DecisionMode::Threshold),
    }
}

/// Check that a coverage ratio is a finite value in [0, 1].
///
/// # Errors
///
/// Returns `ConfigError::ThresholdOutOfRange` otherwise.
pub fn validate_threshold(ratio: f64) -> Result<f64, ConfigError> {
    if ratio.is_finite() && (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(ConfigError::ThresholdOutOfRange(ratio))
    }
}

/// # Errors
///
/// Returns `ConfigError::InvalidWindowLength` for a zero-length window.
pub fn validate_window_length(window_length: usize) -> Result<usize, ConfigError> {
    if window_length == 0 {
        Err(ConfigError::InvalidWindowLength)
    } else {
        Ok(window_length)
    }
}

/// Resolve the forward/reverse motifs. Custom motifs come in pairs; with
/// neither given the canonical telomeric motifs are used.
///
/// # Errors
///
/// Returns `ConfigError::UnpairedPattern` if only one is given, or
/// `ConfigError::InvalidPattern` if either fails to parse.
pub fn resolve_patterns(
    forward: Option<&str>,
    reverse: Option<&str>,
) -> Result<(RepeatPattern, RepeatPattern), ConfigError> {
    match (forward, reverse) {
        (None, None) => Ok((
            RepeatPattern::default_forward(),
            RepeatPattern::default_reverse(),
        )),
        (Some(_), None) => Err(ConfigError::UnpairedPattern { missing: "reverse" }),
        (None, Some(_)) => Err(ConfigError::UnpairedPattern { missing: "forward" }),
        (Some(forward), Some(reverse)) => {
            Ok((parse_pattern("forward", forward)?, parse_pattern("reverse", reverse)?))
        }
    }
}

fn parse_pattern(which: &'static str, text: &str) -> Result<RepeatPattern, ConfigError> {
    RepeatPattern::parse(text).map_err(|source| ConfigError::InvalidPattern {
        which,
        text: text.to_string(),
        source,
    })
}
