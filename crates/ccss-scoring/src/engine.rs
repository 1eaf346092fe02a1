use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use ccss_core::config::SeverityConfig;
use ccss_core::errors::VectorResult;
use ccss_core::CcssVector;

use crate::formula::{self, ScoreBreakdown, Scores};
use crate::severity::Severity;

/// Scores paired with their severity ratings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatedScores {
    pub scores: Scores,
    pub base_severity: Severity,
    pub temporal_severity: Severity,
    pub environmental_severity: Severity,
}

/// Score engine evaluating the CCSS equations on packed vectors and rating
/// the results against configurable severity thresholds.
pub struct ScoreEngine {
    severity: SeverityConfig,
}

impl ScoreEngine {
    /// Create a new ScoreEngine with the default thresholds (4.0 / 7.0).
    pub fn new() -> Self {
        Self {
            severity: SeverityConfig::default(),
        }
    }

    /// Create with custom severity thresholds.
    pub fn with_config(severity: SeverityConfig) -> Self {
        Self { severity }
    }

    /// Get the severity thresholds.
    pub fn severity_config(&self) -> &SeverityConfig {
        &self.severity
    }

    pub fn score(&self, vector: &CcssVector) -> Scores {
        let scores = formula::compute(vector);
        trace!(%vector, ?scores, "scored CCSS vector");
        scores
    }

    /// Calculate the scores with a full breakdown of each subscore.
    pub fn breakdown(&self, vector: &CcssVector) -> ScoreBreakdown {
        formula::compute_breakdown(vector)
    }

    /// Parse `vector` and score it in one step.
    pub fn score_vector(&self, vector: &str) -> VectorResult<Scores> {
        let parsed = CcssVector::parse(vector)?;
        Ok(self.score(&parsed))
    }

    /// Rate a single score.
    pub fn severity(&self, score: f64) -> Severity {
        Severity::from_score(score, &self.severity)
    }

    /// Score a vector and rate each of its three scores.
    pub fn rate(&self, vector: &CcssVector) -> RatedScores {
        let scores = self.score(vector);
        RatedScores {
            scores,
            base_severity: self.severity(scores.base),
            temporal_severity: self.severity(scores.temporal),
            environmental_severity: self.severity(scores.environmental),
        }
    }

    /// Score a batch of vectors, preserving order.
    pub fn score_batch(&self, vectors: &[CcssVector]) -> Vec<Scores> {
        debug!(count = vectors.len(), "scoring CCSS batch");
        vectors.iter().map(|v| self.score(v)).collect()
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}
