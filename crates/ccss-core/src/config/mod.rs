//! Configuration system for CCSS.
//! TOML-based, 3-layer resolution: env > config file > defaults.

pub mod ccss_config;
pub mod logging_config;
pub mod severity_config;

pub use ccss_config::CcssConfig;
pub use logging_config::{LogFormat, LoggingConfig};
pub use severity_config::SeverityConfig;
