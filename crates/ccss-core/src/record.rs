//! The 6-byte packed CCSS record.
//!
//! ```text
//!    u0       u1       u2       u3       u4       u5
//! /------\ /------\ /------\ /------\ /------\ /------\
//! ........ ........ ........ ........ ........ ........
//! \/\/\/\/ \/\/\/|\__/\_/\_/ \/\_/\/\_/\/\_/\/ \/\/
//! AV |Au C  I A |EM | GRL | PTV | EC EI |CDP | IR |
//!   AC         PL  GEL   LVP   LRL     EA   CR   AR
//! ```
//!
//! Fields are packed MSB-first in metric order. GEL straddles u1/u2 and EI
//! straddles u3/u4; the low nibble of u5 is always zero.

use std::fmt;

use crate::constants::{METRIC_COUNT, PACKED_LEN};
use crate::errors::{VectorError, VectorResult};
use crate::metric::{Metric, MetricGroup};
use crate::values::{
    AccessComplexity, AccessVector, Authentication, CollateralDamagePotential,
    EnvironmentalImpact, ExploitationMethod, ImpactLevel, Level, PrivilegeLevel, Rating,
    RemediationLevel,
};

/// Bits of u5 that no field occupies.
const PADDING_MASK: u8 = 0b0000_1111;

/// Location of one field inside the 48-bit record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    /// Bit offset from the MSB of u0.
    pub offset: u8,
    /// Width in bits (1 to 3).
    pub width: u8,
}

impl BitField {
    const fn new(offset: u8, width: u8) -> Self {
        Self { offset, width }
    }

    fn byte(self) -> usize {
        usize::from(self.offset / 8)
    }

    /// Right shift that aligns the field to bit 0 of a big-endian u16 window
    /// starting at `byte()`.
    fn shift(self) -> u16 {
        16 - u16::from(self.offset % 8) - u16::from(self.width)
    }

    fn mask(self) -> u16 {
        (1 << self.width) - 1
    }
}

/// Field layout, indexed by [`Metric::ordinal`].
const LAYOUT: [BitField; METRIC_COUNT] = [
    BitField::new(0, 2),  // AV
    BitField::new(2, 2),  // AC
    BitField::new(4, 2),  // Au
    BitField::new(6, 2),  // C
    BitField::new(8, 2),  // I
    BitField::new(10, 2), // A
    BitField::new(12, 2), // PL
    BitField::new(14, 1), // EM
    BitField::new(15, 3), // GEL
    BitField::new(18, 3), // GRL
    BitField::new(21, 3), // LVP
    BitField::new(24, 2), // PTV
    BitField::new(26, 3), // LRL
    BitField::new(29, 2), // EC
    BitField::new(31, 2), // EI
    BitField::new(33, 2), // EA
    BitField::new(35, 3), // CDP
    BitField::new(38, 2), // CR
    BitField::new(40, 2), // IR
    BitField::new(42, 2), // AR
];

impl Metric {
    /// Where this metric lives in the packed record.
    pub fn bit_field(self) -> BitField {
        LAYOUT[self.ordinal()]
    }
}

/// A parsed, validated CCSS vector packed into 48 bits.
///
/// Built by [`CcssVector::parse`] or [`CcssVector::from_bytes`]; every
/// field index is guaranteed to lie inside its enumeration. The value is
/// `Copy` and immutable unless one of the validated setters is called.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CcssVector {
    bits: [u8; PACKED_LEN],
}

impl CcssVector {
    /// All fields at index 0: optional metrics read `ND`. Base fields hold a
    /// placeholder until the parser overwrites them.
    pub(crate) const fn blank() -> Self {
        Self {
            bits: [0; PACKED_LEN],
        }
    }

    /// Rebuild a record from its packed bytes, checking every field.
    pub fn from_bytes(bytes: [u8; PACKED_LEN]) -> VectorResult<Self> {
        let padding = bytes[PACKED_LEN - 1] & PADDING_MASK;
        if padding != 0 {
            return Err(VectorError::NonZeroPadding { bits: padding });
        }
        let record = Self { bits: bytes };
        for metric in Metric::ALL {
            let index = record.index_of(metric);
            if metric.value_at(index).is_none() {
                return Err(VectorError::CorruptEncoding { metric, index });
            }
        }
        Ok(record)
    }

    /// The packed form, suitable for compact storage.
    pub fn to_bytes(&self) -> [u8; PACKED_LEN] {
        self.bits
    }

    /// Raw packed index of `metric`.
    pub fn index_of(&self, metric: Metric) -> u8 {
        let field = metric.bit_field();
        let window = self.window(field.byte());
        ((window >> field.shift()) & field.mask()) as u8
    }

    /// Overwrite the packed index of `metric`. Callers validate `index`.
    pub(crate) fn write_index(&mut self, metric: Metric, index: u8) {
        let field = metric.bit_field();
        let byte = field.byte();
        let mask = field.mask() << field.shift();
        let window =
            (self.window(byte) & !mask) | ((u16::from(index) << field.shift()) & mask);
        let [hi, lo] = window.to_be_bytes();
        self.bits[byte] = hi;
        if let Some(next) = self.bits.get_mut(byte + 1) {
            *next = lo;
        }
    }

    /// Two consecutive bytes starting at `byte`, big-endian. Past the end of
    /// the record the low byte reads as zero.
    fn window(&self, byte: usize) -> u16 {
        let hi = u16::from(self.bits[byte]);
        let lo = self.bits.get(byte + 1).map_or(0, |b| u16::from(*b));
        (hi << 8) | lo
    }

    /// Whether any metric of `group` differs from `ND`. Base is always defined.
    pub fn is_group_defined(&self, group: MetricGroup) -> bool {
        match group {
            MetricGroup::Base => true,
            _ => group.metrics().iter().any(|m| self.index_of(*m) != 0),
        }
    }
}

pub(crate) fn unreachable_index(metric: Metric, index: u8) -> ! {
    unreachable!("packed {metric} index {index} is outside its enumeration")
}

macro_rules! typed_accessors {
    ($( $(#[$meta:meta])* $getter:ident, $setter:ident => $metric:ident : $ty:ident; )+) => {
        impl CcssVector {
            $(
                $(#[$meta])*
                pub fn $getter(&self) -> $ty {
                    let index = self.index_of(Metric::$metric);
                    $ty::from_index(index)
                        .unwrap_or_else(|| unreachable_index(Metric::$metric, index))
                }

                pub fn $setter(&mut self, value: $ty) {
                    self.write_index(Metric::$metric, value.index());
                }
            )+
        }
    };
}

typed_accessors! {
    /// `AV`
    access_vector, set_access_vector => AccessVector: AccessVector;
    /// `AC`
    access_complexity, set_access_complexity => AccessComplexity: AccessComplexity;
    /// `Au`
    authentication, set_authentication => Authentication: Authentication;
    /// `C`
    confidentiality, set_confidentiality => Confidentiality: ImpactLevel;
    /// `I`
    integrity, set_integrity => Integrity: ImpactLevel;
    /// `A`
    availability, set_availability => Availability: ImpactLevel;
    /// `PL`
    privilege_level, set_privilege_level => PrivilegeLevel: PrivilegeLevel;
    /// `EM`
    exploitation_method, set_exploitation_method => ExploitationMethod: ExploitationMethod;
    /// `GEL`
    general_exploit_level, set_general_exploit_level => GeneralExploitLevel: Level;
    /// `GRL`
    general_remediation_level, set_general_remediation_level => GeneralRemediationLevel: RemediationLevel;
    /// `LVP`
    local_vulnerability_prevalence, set_local_vulnerability_prevalence => LocalVulnerabilityPrevalence: Level;
    /// `PTV`
    perceived_target_value, set_perceived_target_value => PerceivedTargetValue: Rating;
    /// `LRL`
    local_remediation_level, set_local_remediation_level => LocalRemediationLevel: Level;
    /// `EC`
    environmental_confidentiality, set_environmental_confidentiality => EnvironmentalConfidentiality: EnvironmentalImpact;
    /// `EI`
    environmental_integrity, set_environmental_integrity => EnvironmentalIntegrity: EnvironmentalImpact;
    /// `EA`
    environmental_availability, set_environmental_availability => EnvironmentalAvailability: EnvironmentalImpact;
    /// `CDP`
    collateral_damage_potential, set_collateral_damage_potential => CollateralDamagePotential: CollateralDamagePotential;
    /// `CR`
    confidentiality_requirement, set_confidentiality_requirement => ConfidentialityRequirement: Rating;
    /// `IR`
    integrity_requirement, set_integrity_requirement => IntegrityRequirement: Rating;
    /// `AR`
    availability_requirement, set_availability_requirement => AvailabilityRequirement: Rating;
}

impl fmt::Debug for CcssVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CcssVector")
            .field(&format_args!("{self}"))
            .finish()
    }
}
