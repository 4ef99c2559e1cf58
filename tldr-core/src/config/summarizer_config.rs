use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::{Algorithm, Weighing};

/// Per-instance summarizer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Ranking strategy.
    pub algorithm: Algorithm,
    /// Edge weighing metric.
    pub weighing: Weighing,
    /// Damping factor for the iterative ranker.
    pub damping: f64,
    /// Convergence tolerance (L1 delta) for the iterative ranker.
    pub tolerance: f64,
    /// Iteration cap for the iterative ranker.
    pub max_iterations: usize,
    /// Edges with weight at or below this value are dropped before ranking.
    pub threshold: f64,
    /// Jaro-Winkler score at or above which a later sentence is a near duplicate.
    pub sentence_distance_threshold: f64,
    /// Output budget in characters. 0 means unlimited.
    pub max_characters: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            weighing: Weighing::default(),
            damping: defaults::DEFAULT_DAMPING,
            tolerance: defaults::DEFAULT_TOLERANCE,
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
            threshold: defaults::DEFAULT_THRESHOLD,
            sentence_distance_threshold: defaults::DEFAULT_SENTENCE_DISTANCE_THRESHOLD,
            max_characters: defaults::DEFAULT_MAX_CHARACTERS,
        }
    }
}

impl SummarizerConfig {
    /// Reject values the ranking and dedup stages cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "damping",
                value: self.damping,
                expected: "0 < damping < 1",
            });
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "tolerance",
                value: self.tolerance,
                expected: "finite and > 0",
            });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::OutOfRange {
                field: "max_iterations",
                value: 0.0,
                expected: ">= 1",
            });
        }
        if !self.threshold.is_finite() {
            return Err(ConfigError::OutOfRange {
                field: "threshold",
                value: self.threshold,
                expected: "finite",
            });
        }
        if !(0.0..=1.0).contains(&self.sentence_distance_threshold) {
            return Err(ConfigError::OutOfRange {
                field: "sentence_distance_threshold",
                value: self.sentence_distance_threshold,
                expected: "0 <= threshold <= 1",
            });
        }
        Ok(())
    }
}
