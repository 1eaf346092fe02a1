//! Qualitative severity ratings.

use std::fmt;

use serde::{Deserialize, Serialize};

use ccss_core::config::SeverityConfig;

/// Qualitative rating of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
}

impl Severity {
    /// Rate `score` against the thresholds in `config`.
    ///
    /// Scores at or below 0.0 are `None`. Environmental scores can go
    /// negative, see [`crate::formula::environmental_score`].
    pub fn from_score(score: f64, config: &SeverityConfig) -> Self {
        if score <= 0.0 {
            Self::None
        } else if score >= config.effective_high() {
            Self::High
        } else if score >= config.effective_medium() {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
