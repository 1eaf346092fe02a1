use ccss_core::{CcssVector, Metric, MetricGroup};
use proptest::prelude::*;

const SEED: &str = "AV:L/AC:H/Au:M/C:N/I:N/A:N/PL:ND/EM:A";

/// Any record reachable through the public setters.
fn arb_vector() -> impl Strategy<Value = CcssVector> {
    prop::array::uniform20(any::<u8>()).prop_map(|picks| {
        let mut record = CcssVector::parse(SEED).unwrap();
        for (metric, pick) in Metric::ALL.into_iter().zip(picks) {
            let values = metric.values();
            let value = values[usize::from(pick) % values.len()];
            record.set_metric(metric, value).unwrap();
        }
        record
    })
}

// ── Text round-trip ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn serialized_vector_parses_back(record in arb_vector()) {
        let text = record.to_vector_string();
        let parsed = CcssVector::parse(&text).unwrap();
        prop_assert_eq!(parsed, record);
        prop_assert_eq!(parsed.to_vector_string(), text.clone());
        prop_assert_eq!(record.encoded_len(), text.len());
    }
}

// ── Group omission ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn optional_group_appears_iff_defined(record in arb_vector()) {
        let text = record.to_vector_string();
        prop_assert_eq!(
            text.contains("GEL:"),
            record.is_group_defined(MetricGroup::Temporal)
        );
        prop_assert_eq!(
            text.contains("LVP:"),
            record.is_group_defined(MetricGroup::Environmental)
        );
        prop_assert!(text.starts_with("AV:"));
    }
}

// ── Field isolation ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn setting_one_metric_leaves_the_others(
        record in arb_vector(),
        target in 0usize..20,
        pick in any::<u8>(),
    ) {
        let metric = Metric::ALL[target];
        let values = metric.values();
        let value = values[usize::from(pick) % values.len()];

        let mut edited = record;
        edited.set_metric(metric, value).unwrap();

        prop_assert_eq!(edited.metric(metric), value);
        for other in Metric::ALL.into_iter().filter(|m| *m != metric) {
            prop_assert_eq!(edited.metric(other), record.metric(other));
        }
    }
}

// ── Packed form ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn bytes_round_trip(record in arb_vector()) {
        let bytes = record.to_bytes();
        prop_assert_eq!(bytes[5] & 0x0F, 0);
        prop_assert_eq!(CcssVector::from_bytes(bytes).unwrap(), record);
    }

    #[test]
    fn accepted_bytes_are_stable(bytes in prop::array::uniform6(any::<u8>())) {
        if let Ok(record) = CcssVector::from_bytes(bytes) {
            prop_assert_eq!(record.to_bytes(), bytes);
            let reparsed = CcssVector::parse(&record.to_vector_string()).unwrap();
            prop_assert_eq!(reparsed, record);
        }
    }
}

// ── Parser totality ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn parse_never_panics(input in "[A-Za-z:/]{0,64}") {
        if let Ok(record) = CcssVector::parse(&input) {
            let canonical = record.to_vector_string();
            prop_assert_eq!(CcssVector::parse(&canonical).unwrap(), record);
        }
    }
}
