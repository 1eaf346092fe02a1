//! Severity rating configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SEVERITY_HIGH, DEFAULT_SEVERITY_MEDIUM};

/// Score thresholds for the qualitative Low/Medium/High ratings.
///
/// A score of exactly 0.0 is rated None; anything below `medium` is Low.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SeverityConfig {
    /// Lowest score rated Medium. Default: 4.0.
    pub medium: Option<f64>,
    /// Lowest score rated High. Default: 7.0.
    pub high: Option<f64>,
}

impl SeverityConfig {
    /// Returns the effective Medium threshold, defaulting to 4.0.
    pub fn effective_medium(&self) -> f64 {
        self.medium.unwrap_or(DEFAULT_SEVERITY_MEDIUM)
    }

    /// Returns the effective High threshold, defaulting to 7.0.
    pub fn effective_high(&self) -> f64 {
        self.high.unwrap_or(DEFAULT_SEVERITY_HIGH)
    }
}
