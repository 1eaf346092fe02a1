//! Typed value enumerations for every CCSS metric.
//!
//! Variant order is the packed index of each value and must never change:
//! the bit layout in [`crate::record`] stores exactly `index()`. Every
//! enumeration of an optional metric keeps `NotDefined` (`ND`) at index 0,
//! so a zeroed field reads as "not assessed".

use std::fmt;

macro_rules! metric_value {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $abbr:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every value, in packed-index order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire abbreviations, in packed-index order.
            pub const ABBREVIATIONS: &'static [&'static str] = &[$($abbr),+];

            /// Packed index of this value.
            pub const fn index(self) -> u8 {
                self as u8
            }

            /// Value stored at `index`, if the index is inside the enumeration.
            pub fn from_index(index: u8) -> Option<Self> {
                Self::ALL.get(usize::from(index)).copied()
            }

            /// Wire abbreviation (`"N"`, `"ND"`, `"LM"`, ...).
            pub fn as_str(self) -> &'static str {
                Self::ABBREVIATIONS[usize::from(self.index())]
            }

            /// Parse a wire abbreviation. Matching is exact and case-sensitive.
            pub fn from_abbreviation(value: &str) -> Option<Self> {
                Self::ABBREVIATIONS
                    .iter()
                    .zip(Self::ALL)
                    .find_map(|(abbr, v)| (*abbr == value).then_some(*v))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ── Base ────────────────────────────────────────────────────────────────

metric_value!(
    /// `AV`: how the vulnerability is reached.
    AccessVector {
        Local => "L",
        AdjacentNetwork => "A",
        Network => "N",
    }
);

metric_value!(
    /// `AC`: complexity of the attack once access is gained.
    AccessComplexity {
        High => "H",
        Medium => "M",
        Low => "L",
    }
);

metric_value!(
    /// `Au`: number of authentications an attacker must pass.
    Authentication {
        Multiple => "M",
        Single => "S",
        None => "N",
    }
);

metric_value!(
    /// `C`, `I`, `A`: base impact on one CIA dimension.
    ImpactLevel {
        None => "N",
        Partial => "P",
        Complete => "C",
    }
);

metric_value!(
    /// `PL`: privileges obtained on successful exploitation.
    PrivilegeLevel {
        NotDefined => "ND",
        Root => "R",
        User => "U",
        Application => "A",
    }
);

metric_value!(
    /// `EM`: whether exploitation needs an active or passive attacker.
    ExploitationMethod {
        Active => "A",
        Passive => "P",
    }
);

// ── Temporal & Environmental ────────────────────────────────────────────

metric_value!(
    /// Five-point scale shared by `GEL`, `LVP` and `LRL`.
    Level {
        NotDefined => "ND",
        None => "N",
        Low => "L",
        Medium => "M",
        High => "H",
    }
);

metric_value!(
    /// `GRL`: general remediation level. Note the descending order.
    RemediationLevel {
        NotDefined => "ND",
        High => "H",
        Medium => "M",
        Low => "L",
        None => "N",
    }
);

metric_value!(
    /// Four-point scale shared by `PTV`, `CR`, `IR` and `AR`.
    Rating {
        NotDefined => "ND",
        Low => "L",
        Medium => "M",
        High => "H",
    }
);

metric_value!(
    /// `EC`, `EI`, `EA`: environment-specific override of a base impact.
    EnvironmentalImpact {
        NotDefined => "ND",
        None => "N",
        Partial => "P",
        Complete => "C",
    }
);

metric_value!(
    /// `CDP`: potential for loss of life, assets or revenue.
    CollateralDamagePotential {
        NotDefined => "ND",
        None => "N",
        Low => "L",
        LowMedium => "LM",
        MediumHigh => "MH",
        High => "H",
    }
);

impl EnvironmentalImpact {
    /// Effective impact: this override when defined, `base` otherwise.
    pub fn modify(self, base: ImpactLevel) -> ImpactLevel {
        match self {
            Self::NotDefined => base,
            Self::None => ImpactLevel::None,
            Self::Partial => ImpactLevel::Partial,
            Self::Complete => ImpactLevel::Complete,
        }
    }
}
