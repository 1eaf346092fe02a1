//! # ccss-scoring
//!
//! Base, temporal and environmental CCSS scores computed straight from the
//! packed [`ccss_core::CcssVector`], plus qualitative severity ratings.

pub mod engine;
pub mod formula;
pub mod severity;
pub mod weights;

pub use engine::{RatedScores, ScoreEngine};
pub use formula::{
    base_score, compute, compute_breakdown, environmental_score, exploitability, impact,
    round1, temporal_score, ScoreBreakdown, Scores,
};
pub use severity::Severity;
