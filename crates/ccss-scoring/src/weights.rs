//! Coefficient tables for the CCSS equations.
//!
//! Matches are exhaustive over the typed values, so every stored index has a
//! weight. An index that decodes to no value never reaches these functions:
//! the record accessors treat it as unreachable.

use ccss_core::values::{
    AccessComplexity, AccessVector, Authentication, CollateralDamagePotential, ImpactLevel,
    Level, Rating, RemediationLevel,
};

pub fn access_vector(v: AccessVector) -> f64 {
    match v {
        AccessVector::Local => 0.395,
        AccessVector::AdjacentNetwork => 0.646,
        AccessVector::Network => 1.0,
    }
}

pub fn authentication(v: Authentication) -> f64 {
    match v {
        Authentication::Multiple => 0.45,
        Authentication::Single => 0.56,
        Authentication::None => 0.704,
    }
}

pub fn access_complexity(v: AccessComplexity) -> f64 {
    match v {
        AccessComplexity::High => 0.35,
        AccessComplexity::Medium => 0.61,
        AccessComplexity::Low => 0.71,
    }
}

/// Confidentiality, integrity and availability impact.
pub fn cia(v: ImpactLevel) -> f64 {
    match v {
        ImpactLevel::None => 0.0,
        ImpactLevel::Partial => 0.275,
        ImpactLevel::Complete => 0.660,
    }
}

pub fn general_exploit_level(v: Level) -> f64 {
    match v {
        Level::None => 0.6,
        Level::Low => 0.8,
        Level::Medium => 1.0,
        Level::High => 1.2,
        Level::NotDefined => 1.0,
    }
}

pub fn general_remediation_level(v: RemediationLevel) -> f64 {
    match v {
        RemediationLevel::High => 0.4,
        RemediationLevel::Medium => 0.6,
        RemediationLevel::Low => 0.8,
        RemediationLevel::None => 1.0,
        RemediationLevel::NotDefined => 1.0,
    }
}

pub fn local_vulnerability_prevalence(v: Level) -> f64 {
    match v {
        Level::None => 0.6,
        Level::Low => 0.8,
        Level::Medium => 1.0,
        Level::High => 1.2,
        Level::NotDefined => 1.0,
    }
}

pub fn perceived_target_value(v: Rating) -> f64 {
    match v {
        Rating::Low => 0.8,
        Rating::Medium => 1.0,
        Rating::High => 1.2,
        Rating::NotDefined => 1.0,
    }
}

/// Local remediation weights run the opposite way to exploit levels:
/// more remediation lowers the score.
pub fn local_remediation_level(v: Level) -> f64 {
    match v {
        Level::None => 1.0,
        Level::Low => 0.8,
        Level::Medium => 0.6,
        Level::High => 0.4,
        Level::NotDefined => 1.0,
    }
}

/// Confidentiality, integrity and availability requirement.
pub fn cia_requirement(v: Rating) -> f64 {
    match v {
        Rating::Low => 0.5,
        Rating::Medium => 1.0,
        Rating::High => 1.51,
        Rating::NotDefined => 1.0,
    }
}

pub fn collateral_damage_potential(v: CollateralDamagePotential) -> f64 {
    match v {
        CollateralDamagePotential::None => 1.0,
        CollateralDamagePotential::Low => 1.25,
        CollateralDamagePotential::LowMedium => 1.5,
        CollateralDamagePotential::MediumHigh => 1.75,
        CollateralDamagePotential::High => 2.0,
        CollateralDamagePotential::NotDefined => 1.0,
    }
}

/// `f(Impact)`: zeroes the score when there is no impact at all.
pub fn f_impact(impact: f64) -> f64 {
    if impact == 0.0 {
        0.0
    } else {
        1.176
    }
}
