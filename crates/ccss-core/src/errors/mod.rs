//! Error handling for CCSS.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod vector_error;

pub use config_error::{ConfigError, ConfigResult};
pub use error_code::CcssErrorCode;
pub use vector_error::{VectorError, VectorResult};
