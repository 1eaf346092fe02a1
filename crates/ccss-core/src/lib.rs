//! # ccss-core
//!
//! Foundation crate for the CCSS toolkit.
//! Defines the metric enumerations, the 6-byte packed vector record and its
//! textual codec, errors, config, and tracing setup. The scoring crate
//! depends on this.

pub mod codec;
pub mod config;
pub mod constants;
pub mod errors;
pub mod metric;
pub mod record;
pub mod tracing;
pub mod values;

// Re-export the most commonly used types at the crate root.
pub use config::CcssConfig;
pub use errors::{CcssErrorCode, ConfigError, VectorError, VectorResult};
pub use metric::{Metric, MetricGroup};
pub use record::CcssVector;
pub use values::{
    AccessComplexity, AccessVector, Authentication, CollateralDamagePotential,
    EnvironmentalImpact, ExploitationMethod, ImpactLevel, Level, PrivilegeLevel, Rating,
    RemediationLevel,
};
