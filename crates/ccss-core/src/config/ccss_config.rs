//! Top-level CCSS configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, SeverityConfig};
use crate::constants::{DEFAULT_CONFIG_FILE, LOG_ENV_VAR, MAX_SCORE};
use crate::errors::{ConfigError, ConfigResult};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CCSS_LOG`, `CCSS_SEVERITY_*`)
/// 2. Config file (`ccss.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CcssConfig {
    pub severity: SeverityConfig,
    pub logging: LoggingConfig,
}

impl CcssConfig {
    /// Load configuration with layered resolution.
    ///
    /// `path` is the config file to read. A missing file falls back to
    /// defaults; a file that exists but does not parse is an error.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let mut config = Self::default();

        if path.exists() {
            let file_config = Self::from_file(path)?;
            Self::merge(&mut config, &file_config);
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load `ccss.toml` from `root` with layered resolution.
    pub fn load_from_dir(root: &Path) -> ConfigResult<Self> {
        Self::load(&root.join(DEFAULT_CONFIG_FILE))
    }

    /// Read and parse a TOML file without applying any other layer.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &CcssConfig) -> ConfigResult<()> {
        let medium = config.severity.effective_medium();
        let high = config.severity.effective_high();
        if !(medium > 0.0 && medium <= MAX_SCORE) {
            return Err(ConfigError::ValidationFailed {
                field: "severity.medium".to_string(),
                message: "must be greater than 0.0 and at most 10.0".to_string(),
            });
        }
        if !(high > 0.0 && high <= MAX_SCORE) {
            return Err(ConfigError::ValidationFailed {
                field: "severity.high".to_string(),
                message: "must be greater than 0.0 and at most 10.0".to_string(),
            });
        }
        if medium >= high {
            return Err(ConfigError::ValidationFailed {
                field: "severity".to_string(),
                message: format!("medium ({medium}) must be below high ({high})"),
            });
        }
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut CcssConfig, other: &CcssConfig) {
        if other.severity.medium.is_some() {
            base.severity.medium = other.severity.medium;
        }
        if other.severity.high.is_some() {
            base.severity.high = other.severity.high;
        }
        if other.logging.filter.is_some() {
            base.logging.filter = other.logging.filter.clone();
        }
        if other.logging.format.is_some() {
            base.logging.format = other.logging.format;
        }
    }

    /// Apply environment variable overrides. Unparsable values are ignored.
    fn apply_env_overrides(config: &mut CcssConfig) {
        if let Ok(val) = std::env::var("CCSS_SEVERITY_MEDIUM") {
            if let Ok(v) = val.parse::<f64>() {
                config.severity.medium = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CCSS_SEVERITY_HIGH") {
            if let Ok(v) = val.parse::<f64>() {
                config.severity.high = Some(v);
            }
        }
        if let Ok(val) = std::env::var(LOG_ENV_VAR) {
            if !val.trim().is_empty() {
                config.logging.filter = Some(val);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
