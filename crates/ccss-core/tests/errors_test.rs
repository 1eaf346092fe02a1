//! Tests for the CCSS error types and their stable codes.

use std::collections::HashSet;

use ccss_core::errors::error_code::{self, CcssErrorCode};
use ccss_core::errors::{ConfigError, VectorError};
use ccss_core::{CcssVector, Metric, MetricGroup};

fn vector_errors() -> Vec<VectorError> {
    vec![
        VectorError::UnknownMetric {
            abbreviation: "ZZ".into(),
        },
        VectorError::InvalidMetricValue {
            metric: Metric::AccessVector,
            value: "Z".into(),
        },
        VectorError::InvalidMetricOrder {
            expected: "AV".into(),
            found: "AC".into(),
        },
        VectorError::TooShortVector {
            group: MetricGroup::Temporal,
            specified: 1,
            required: 2,
        },
        VectorError::CorruptEncoding {
            metric: Metric::AccessVector,
            index: 3,
        },
        VectorError::NonZeroPadding { bits: 0b0001 },
    ]
}

#[test]
fn every_vector_error_has_a_code() {
    for err in vector_errors() {
        assert!(!err.error_code().is_empty(), "{err}");
    }
}

#[test]
fn parse_failures_map_to_distinct_codes() {
    let codes: HashSet<&str> = vector_errors()
        .iter()
        .take(4)
        .map(|e| e.error_code())
        .collect();
    assert_eq!(codes.len(), 4);
}

#[test]
fn decode_failures_share_the_corrupt_encoding_code() {
    let errors = vector_errors();
    assert_eq!(errors[4].error_code(), error_code::CORRUPT_ENCODING);
    assert_eq!(errors[5].error_code(), error_code::CORRUPT_ENCODING);
}

#[test]
fn coded_string_prefixes_the_code() {
    let err = CcssVector::parse("ZZ:L").unwrap_err();
    let coded = err.coded_string();
    assert!(coded.starts_with("[UNKNOWN_METRIC]"), "{coded}");
    assert!(coded.contains("ZZ"));
}

#[test]
fn messages_name_the_offending_metric() {
    let err = CcssVector::parse("AV:Q").unwrap_err();
    assert_eq!(err.to_string(), "invalid value \"Q\" for metric AV");

    let err = CcssVector::parse("AV:L/AC:L/Au:N/C:P/I:P/A:P/PL:U/EM:A/GEL:L").unwrap_err();
    assert_eq!(
        err.to_string(),
        "vector too short: temporal group has 1 of 2 metrics"
    );
}

#[test]
fn config_errors_use_config_code() {
    let errors = [
        ConfigError::FileNotFound {
            path: "/missing/ccss.toml".into(),
        },
        ConfigError::ParseError {
            path: "<string>".into(),
            message: "bad".into(),
        },
        ConfigError::ValidationFailed {
            field: "severity.high".into(),
            message: "out of range".into(),
        },
    ];
    for err in &errors {
        assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
        assert!(err.coded_string().starts_with("[CONFIG_ERROR]"));
    }
}

#[test]
fn vector_errors_are_send_sync_and_std_errors() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<VectorError>();
    assert_error::<ConfigError>();
}
