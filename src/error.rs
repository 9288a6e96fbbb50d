// src/error.rs

use thiserror::Error;

/// Ways a discrete distribution can be malformed.
///
/// These are configuration errors: they are raised when the distribution is
/// constructed, before any simulation runs, never mid-run.
#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("values and probabilities have different lengths ({values} values, {probs} probabilities)")]
    LengthMismatch { values: usize, probs: usize },

    #[error("distribution must contain at least one value")]
    Empty,

    #[error("probability at index {index} is negative ({probability})")]
    NegativeProbability { index: usize, probability: f64 },

    #[error("probabilities sum to {sum}, expected 1.0")]
    BadProbabilitySum { sum: f64 },
}

/// Invalid simulation configuration, rejected before the first day is
/// simulated. A run either fails with one of these or completes in full;
/// there is no partial result.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{which} distribution is invalid: {source}")]
    Distribution {
        which: &'static str,
        #[source]
        source: DistributionError,
    },

    #[error("{name} must be non-negative, got {value}")]
    NegativeCost { name: &'static str, value: f64 },

    #[error("review period N must be at least 1")]
    ZeroReviewPeriod,

    #[error("number of cycles must be at least 1")]
    ZeroCycles,
}
