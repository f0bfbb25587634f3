use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{PROBABLE_CONNECTION_THRESHOLD, SERIES_CANDIDATE_THRESHOLD};

/// Similarity score clamped to [0.0, 100.0] and rounded to 2 decimals.
/// Represents how alike two crime scenes are across all weighted criteria.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct SimilarityScore(f64);

impl SimilarityScore {
    /// Full match, produced by the self-identity short-circuit.
    pub const FULL: SimilarityScore = SimilarityScore(100.0);

    /// Create a new score, clamping to [0.0, 100.0] and rounding to
    /// 2 decimal places.
    pub fn new(value: f64) -> Self {
        Self((value.clamp(0.0, 100.0) * 100.0).round() / 100.0)
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Classify this score into a discrete band.
    pub fn classify(self) -> Classification {
        Classification::from_score(self.0)
    }
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for SimilarityScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<SimilarityScore> for f64 {
    fn from(score: SimilarityScore) -> Self {
        score.0
    }
}

/// How likely two scenes are connected, derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// High enough similarity (>= 75) to suspect the same perpetrator.
    SeriesCandidate,
    /// Moderate similarity (>= 60, < 75); worth a closer look.
    ProbableConnection,
    /// Below 60; probably unrelated.
    LowSimilarity,
}

impl Classification {
    /// Threshold bands are closed at their lower bound: 75.0 is a series
    /// candidate, 60.0 is a probable connection.
    pub fn from_score(score: f64) -> Self {
        if score >= SERIES_CANDIDATE_THRESHOLD {
            Classification::SeriesCandidate
        } else if score >= PROBABLE_CONNECTION_THRESHOLD {
            Classification::ProbableConnection
        } else {
            Classification::LowSimilarity
        }
    }
}
