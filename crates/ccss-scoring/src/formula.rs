use serde::{Deserialize, Serialize};

use ccss_core::constants::MAX_SCORE;
use ccss_core::values::ImpactLevel;
use ccss_core::CcssVector;

use crate::weights;

/// Round to one decimal place, ties to even (`2.25 -> 2.2`).
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round_ties_even() / 10.0
}

/// Base impact subscore.
///
/// ```text
/// Impact = 10.41 × (1 − (1 − C) × (1 − I) × (1 − A))
/// ```
pub fn impact(vector: &CcssVector) -> f64 {
    cia_impact(
        vector.confidentiality(),
        vector.integrity(),
        vector.availability(),
    )
}

fn cia_impact(c: ImpactLevel, i: ImpactLevel, a: ImpactLevel) -> f64 {
    10.41 * (1.0 - (1.0 - weights::cia(c)) * (1.0 - weights::cia(i)) * (1.0 - weights::cia(a)))
}

/// Base exploitability subscore: `20 × AV × Au × AC`.
pub fn exploitability(vector: &CcssVector) -> f64 {
    20.0 * weights::access_vector(vector.access_vector())
        * weights::authentication(vector.authentication())
        * weights::access_complexity(vector.access_complexity())
}

fn combine(impact: f64, exploitability: f64, base_impact: f64) -> f64 {
    round1(((0.6 * impact) + (0.4 * exploitability) - 1.5) * weights::f_impact(base_impact))
}

pub fn base_score(vector: &CcssVector) -> f64 {
    let impact = impact(vector);
    combine(impact, exploitability(vector), impact)
}

/// Exploitability adjusted by GEL and GRL, capped at 10.
pub fn temporal_exploitability(vector: &CcssVector) -> f64 {
    let adjusted = exploitability(vector)
        * weights::general_exploit_level(vector.general_exploit_level())
        * weights::general_remediation_level(vector.general_remediation_level());
    adjusted.min(MAX_SCORE)
}

pub fn temporal_score(vector: &CcssVector) -> f64 {
    let impact = impact(vector);
    combine(impact, temporal_exploitability(vector), impact)
}

/// Impact recomputed with the environmental overrides, requirements and
/// collateral damage potential, capped at 10.
pub fn environmental_impact(vector: &CcssVector) -> f64 {
    let c = vector
        .environmental_confidentiality()
        .modify(vector.confidentiality());
    let i = vector.environmental_integrity().modify(vector.integrity());
    let a = vector
        .environmental_availability()
        .modify(vector.availability());

    let cr = weights::cia_requirement(vector.confidentiality_requirement());
    let ir = weights::cia_requirement(vector.integrity_requirement());
    let ar = weights::cia_requirement(vector.availability_requirement());
    let cdp = weights::collateral_damage_potential(vector.collateral_damage_potential());

    let adjusted = 10.41
        * (1.0
            - (1.0 - weights::cia(c) * cr)
                * (1.0 - weights::cia(i) * ir)
                * (1.0 - weights::cia(a) * ar))
        * cdp;
    adjusted.min(MAX_SCORE)
}

/// Exploitability adjusted by GEL, the local exploit level (LVP × PTV) and
/// LRL, capped at 10.
pub fn environmental_exploitability(vector: &CcssVector) -> f64 {
    let local_exploit_level = weights::local_vulnerability_prevalence(
        vector.local_vulnerability_prevalence(),
    ) * weights::perceived_target_value(vector.perceived_target_value());

    let adjusted = exploitability(vector)
        * weights::general_exploit_level(vector.general_exploit_level())
        * local_exploit_level
        * weights::local_remediation_level(vector.local_remediation_level());
    adjusted.min(MAX_SCORE)
}

/// Environmental score.
///
/// `f(Impact)` is evaluated on the *base* impact, not on the environmental
/// one. Overriding every CIA dimension to `N` therefore yields a negative
/// score instead of 0.0 when the base impact is non-zero.
pub fn environmental_score(vector: &CcssVector) -> f64 {
    combine(
        environmental_impact(vector),
        environmental_exploitability(vector),
        impact(vector),
    )
}

/// The three final scores of a vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub base: f64,
    pub temporal: f64,
    pub environmental: f64,
}

pub fn compute(vector: &CcssVector) -> Scores {
    Scores {
        base: base_score(vector),
        temporal: temporal_score(vector),
        environmental: environmental_score(vector),
    }
}

/// Every intermediate subscore, for debugging and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub impact: f64,
    pub exploitability: f64,
    pub temporal_exploitability: f64,
    pub environmental_impact: f64,
    pub environmental_exploitability: f64,
    pub scores: Scores,
}

/// Compute the scores with a full breakdown of each subscore.
pub fn compute_breakdown(vector: &CcssVector) -> ScoreBreakdown {
    let impact = impact(vector);
    let exploitability = exploitability(vector);
    let temporal_exploitability = temporal_exploitability(vector);
    let environmental_impact = environmental_impact(vector);
    let environmental_exploitability = environmental_exploitability(vector);

    ScoreBreakdown {
        impact,
        exploitability,
        temporal_exploitability,
        environmental_impact,
        environmental_exploitability,
        scores: Scores {
            base: combine(impact, exploitability, impact),
            temporal: combine(impact, temporal_exploitability, impact),
            environmental: combine(
                environmental_impact,
                environmental_exploitability,
                impact,
            ),
        },
    }
}
