//! Metric identities, groups, and the fixed vector order.

use std::fmt;

use crate::constants::METRIC_COUNT;
use crate::values as v;

/// One of the three CCSS metric groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricGroup {
    /// Mandatory in every vector.
    Base,
    /// Optional, all-or-nothing.
    Temporal,
    /// Optional, all-or-nothing.
    Environmental,
}

impl MetricGroup {
    /// Groups in vector order.
    pub const ALL: [MetricGroup; 3] = [
        MetricGroup::Base,
        MetricGroup::Temporal,
        MetricGroup::Environmental,
    ];

    /// Metrics of this group, in the order they appear in a vector.
    pub fn metrics(self) -> &'static [Metric] {
        match self {
            Self::Base => &BASE,
            Self::Temporal => &TEMPORAL,
            Self::Environmental => &ENVIRONMENTAL,
        }
    }

    /// Whether the group may be left out of a vector.
    pub const fn is_optional(self) -> bool {
        !matches!(self, Self::Base)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Temporal => "temporal",
            Self::Environmental => "environmental",
        }
    }
}

impl fmt::Display for MetricGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single CCSS metric. Declaration order is the vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    AccessVector,
    AccessComplexity,
    Authentication,
    Confidentiality,
    Integrity,
    Availability,
    PrivilegeLevel,
    ExploitationMethod,
    GeneralExploitLevel,
    GeneralRemediationLevel,
    LocalVulnerabilityPrevalence,
    PerceivedTargetValue,
    LocalRemediationLevel,
    EnvironmentalConfidentiality,
    EnvironmentalIntegrity,
    EnvironmentalAvailability,
    CollateralDamagePotential,
    ConfidentialityRequirement,
    IntegrityRequirement,
    AvailabilityRequirement,
}

const BASE: [Metric; 8] = [
    Metric::AccessVector,
    Metric::AccessComplexity,
    Metric::Authentication,
    Metric::Confidentiality,
    Metric::Integrity,
    Metric::Availability,
    Metric::PrivilegeLevel,
    Metric::ExploitationMethod,
];

const TEMPORAL: [Metric; 2] = [Metric::GeneralExploitLevel, Metric::GeneralRemediationLevel];

const ENVIRONMENTAL: [Metric; 10] = [
    Metric::LocalVulnerabilityPrevalence,
    Metric::PerceivedTargetValue,
    Metric::LocalRemediationLevel,
    Metric::EnvironmentalConfidentiality,
    Metric::EnvironmentalIntegrity,
    Metric::EnvironmentalAvailability,
    Metric::CollateralDamagePotential,
    Metric::ConfidentialityRequirement,
    Metric::IntegrityRequirement,
    Metric::AvailabilityRequirement,
];

impl Metric {
    /// Every metric in vector order.
    pub const ALL: [Metric; METRIC_COUNT] = [
        Metric::AccessVector,
        Metric::AccessComplexity,
        Metric::Authentication,
        Metric::Confidentiality,
        Metric::Integrity,
        Metric::Availability,
        Metric::PrivilegeLevel,
        Metric::ExploitationMethod,
        Metric::GeneralExploitLevel,
        Metric::GeneralRemediationLevel,
        Metric::LocalVulnerabilityPrevalence,
        Metric::PerceivedTargetValue,
        Metric::LocalRemediationLevel,
        Metric::EnvironmentalConfidentiality,
        Metric::EnvironmentalIntegrity,
        Metric::EnvironmentalAvailability,
        Metric::CollateralDamagePotential,
        Metric::ConfidentialityRequirement,
        Metric::IntegrityRequirement,
        Metric::AvailabilityRequirement,
    ];

    /// Position of the metric in [`Metric::ALL`].
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Abbreviation used on the wire (`AV`, `Au`, `CDP`, ...).
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::AccessVector => "AV",
            Self::AccessComplexity => "AC",
            Self::Authentication => "Au",
            Self::Confidentiality => "C",
            Self::Integrity => "I",
            Self::Availability => "A",
            Self::PrivilegeLevel => "PL",
            Self::ExploitationMethod => "EM",
            Self::GeneralExploitLevel => "GEL",
            Self::GeneralRemediationLevel => "GRL",
            Self::LocalVulnerabilityPrevalence => "LVP",
            Self::PerceivedTargetValue => "PTV",
            Self::LocalRemediationLevel => "LRL",
            Self::EnvironmentalConfidentiality => "EC",
            Self::EnvironmentalIntegrity => "EI",
            Self::EnvironmentalAvailability => "EA",
            Self::CollateralDamagePotential => "CDP",
            Self::ConfidentialityRequirement => "CR",
            Self::IntegrityRequirement => "IR",
            Self::AvailabilityRequirement => "AR",
        }
    }

    /// Resolve a wire abbreviation. Case-sensitive: `Au` is not `AU`.
    pub fn from_abbreviation(abbreviation: &str) -> Option<Self> {
        Some(match abbreviation {
            "AV" => Self::AccessVector,
            "AC" => Self::AccessComplexity,
            "Au" => Self::Authentication,
            "C" => Self::Confidentiality,
            "I" => Self::Integrity,
            "A" => Self::Availability,
            "PL" => Self::PrivilegeLevel,
            "EM" => Self::ExploitationMethod,
            "GEL" => Self::GeneralExploitLevel,
            "GRL" => Self::GeneralRemediationLevel,
            "LVP" => Self::LocalVulnerabilityPrevalence,
            "PTV" => Self::PerceivedTargetValue,
            "LRL" => Self::LocalRemediationLevel,
            "EC" => Self::EnvironmentalConfidentiality,
            "EI" => Self::EnvironmentalIntegrity,
            "EA" => Self::EnvironmentalAvailability,
            "CDP" => Self::CollateralDamagePotential,
            "CR" => Self::ConfidentialityRequirement,
            "IR" => Self::IntegrityRequirement,
            "AR" => Self::AvailabilityRequirement,
            _ => return None,
        })
    }

    /// Human-readable metric name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AccessVector => "Access Vector",
            Self::AccessComplexity => "Access Complexity",
            Self::Authentication => "Authentication",
            Self::Confidentiality => "Confidentiality Impact",
            Self::Integrity => "Integrity Impact",
            Self::Availability => "Availability Impact",
            Self::PrivilegeLevel => "Privilege Level",
            Self::ExploitationMethod => "Exploitation Method",
            Self::GeneralExploitLevel => "General Exploit Level",
            Self::GeneralRemediationLevel => "General Remediation Level",
            Self::LocalVulnerabilityPrevalence => "Local Vulnerability Prevalence",
            Self::PerceivedTargetValue => "Perceived Target Value",
            Self::LocalRemediationLevel => "Local Remediation Level",
            Self::EnvironmentalConfidentiality => "Environmental Confidentiality Impact",
            Self::EnvironmentalIntegrity => "Environmental Integrity Impact",
            Self::EnvironmentalAvailability => "Environmental Availability Impact",
            Self::CollateralDamagePotential => "Collateral Damage Potential",
            Self::ConfidentialityRequirement => "Confidentiality Requirement",
            Self::IntegrityRequirement => "Integrity Requirement",
            Self::AvailabilityRequirement => "Availability Requirement",
        }
    }

    pub const fn group(self) -> MetricGroup {
        match self {
            Self::AccessVector
            | Self::AccessComplexity
            | Self::Authentication
            | Self::Confidentiality
            | Self::Integrity
            | Self::Availability
            | Self::PrivilegeLevel
            | Self::ExploitationMethod => MetricGroup::Base,
            Self::GeneralExploitLevel | Self::GeneralRemediationLevel => MetricGroup::Temporal,
            _ => MetricGroup::Environmental,
        }
    }

    /// Accepted wire values, in packed-index order.
    pub fn values(self) -> &'static [&'static str] {
        match self {
            Self::AccessVector => v::AccessVector::ABBREVIATIONS,
            Self::AccessComplexity => v::AccessComplexity::ABBREVIATIONS,
            Self::Authentication => v::Authentication::ABBREVIATIONS,
            Self::Confidentiality | Self::Integrity | Self::Availability => {
                v::ImpactLevel::ABBREVIATIONS
            }
            Self::PrivilegeLevel => v::PrivilegeLevel::ABBREVIATIONS,
            Self::ExploitationMethod => v::ExploitationMethod::ABBREVIATIONS,
            Self::GeneralExploitLevel
            | Self::LocalVulnerabilityPrevalence
            | Self::LocalRemediationLevel => v::Level::ABBREVIATIONS,
            Self::GeneralRemediationLevel => v::RemediationLevel::ABBREVIATIONS,
            Self::PerceivedTargetValue
            | Self::ConfidentialityRequirement
            | Self::IntegrityRequirement
            | Self::AvailabilityRequirement => v::Rating::ABBREVIATIONS,
            Self::EnvironmentalConfidentiality
            | Self::EnvironmentalIntegrity
            | Self::EnvironmentalAvailability => v::EnvironmentalImpact::ABBREVIATIONS,
            Self::CollateralDamagePotential => v::CollateralDamagePotential::ABBREVIATIONS,
        }
    }

    /// Packed index of `value`, or `None` if the metric does not accept it.
    pub fn value_index(self, value: &str) -> Option<u8> {
        self.values()
            .iter()
            .position(|candidate| *candidate == value)
            .and_then(|i| u8::try_from(i).ok())
    }

    /// Wire value stored at `index`.
    pub fn value_at(self, index: u8) -> Option<&'static str> {
        self.values().get(usize::from(index)).copied()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}
