//! CcssErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// that callers can match on without parsing messages.
pub trait CcssErrorCode {
    /// Returns the error code string (e.g., "UNKNOWN_METRIC").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNKNOWN_METRIC: &str = "UNKNOWN_METRIC";
pub const INVALID_METRIC_VALUE: &str = "INVALID_METRIC_VALUE";
pub const INVALID_METRIC_ORDER: &str = "INVALID_METRIC_ORDER";
pub const TOO_SHORT_VECTOR: &str = "TOO_SHORT_VECTOR";
pub const CORRUPT_ENCODING: &str = "CORRUPT_ENCODING";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
