//! Vector codec errors.

use super::error_code::{self, CcssErrorCode};
use crate::metric::{Metric, MetricGroup};

/// Result alias for codec operations.
pub type VectorResult<T> = Result<T, VectorError>;

/// Errors raised while parsing, editing, or decoding a CCSS vector.
///
/// All of them are terminal for the call that produced them: the record
/// the caller holds is never left half-written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    #[error("unknown metric: {abbreviation:?}")]
    UnknownMetric { abbreviation: String },

    #[error("invalid value {value:?} for metric {metric}")]
    InvalidMetricValue { metric: Metric, value: String },

    #[error("invalid metric order: expected {expected}, found {found:?}")]
    InvalidMetricOrder { expected: String, found: String },

    #[error("vector too short: {group} group has {specified} of {required} metrics")]
    TooShortVector {
        group: MetricGroup,
        specified: usize,
        required: usize,
    },

    #[error("corrupt encoding: index {index} is outside the {metric} enumeration")]
    CorruptEncoding { metric: Metric, index: u8 },

    #[error("corrupt encoding: unused trailing bits are set ({bits:#06b})")]
    NonZeroPadding { bits: u8 },
}

impl VectorError {
    pub(crate) fn unknown_metric(abbreviation: &str) -> Self {
        Self::UnknownMetric {
            abbreviation: abbreviation.to_string(),
        }
    }
}

impl CcssErrorCode for VectorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownMetric { .. } => error_code::UNKNOWN_METRIC,
            Self::InvalidMetricValue { .. } => error_code::INVALID_METRIC_VALUE,
            Self::InvalidMetricOrder { .. } => error_code::INVALID_METRIC_ORDER,
            Self::TooShortVector { .. } => error_code::TOO_SHORT_VECTOR,
            Self::CorruptEncoding { .. } | Self::NonZeroPadding { .. } => {
                error_code::CORRUPT_ENCODING
            }
        }
    }
}
