/// ccss-core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Size of a packed record in bytes.
pub const PACKED_LEN: usize = 6;

/// Number of metrics across all groups.
pub const METRIC_COUNT: usize = 20;

/// Separates `ABBR:VALUE` segments in a vector.
pub const SEGMENT_SEPARATOR: char = '/';

/// Separates a metric abbreviation from its value.
pub const VALUE_SEPARATOR: char = ':';

/// Wire value of an optional metric that was not assessed.
pub const NOT_DEFINED: &str = "ND";

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "ccss.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "CCSS_LOG";

/// Filter used when `CCSS_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "ccss=info";

/// Lowest score rated Medium.
pub const DEFAULT_SEVERITY_MEDIUM: f64 = 4.0;

/// Lowest score rated High.
pub const DEFAULT_SEVERITY_HIGH: f64 = 7.0;

/// Upper bound of every CCSS score.
pub const MAX_SCORE: f64 = 10.0;
