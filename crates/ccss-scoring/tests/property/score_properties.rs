use ccss_core::{CcssVector, Metric, MetricGroup};
use ccss_scoring::{compute, compute_breakdown, round1, ScoreEngine};
use proptest::prelude::*;

const SEED: &str = "AV:L/AC:H/Au:M/C:N/I:N/A:N/PL:ND/EM:A";

/// A record whose metrics in `groups` are drawn at random; all others keep
/// their seed value.
fn arb_vector(groups: &'static [MetricGroup]) -> impl Strategy<Value = CcssVector> {
    prop::array::uniform20(any::<u8>()).prop_map(move |picks| {
        let mut record = CcssVector::parse(SEED).unwrap();
        for (metric, pick) in Metric::ALL.into_iter().zip(picks) {
            if !groups.contains(&metric.group()) {
                continue;
            }
            let values = metric.values();
            let value = values[usize::from(pick) % values.len()];
            record.set_metric(metric, value).unwrap();
        }
        record
    })
}

fn is_one_decimal(x: f64) -> bool {
    round1(x) == x
}

// ── Bounds ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn base_and_temporal_stay_in_range(record in arb_vector(&MetricGroup::ALL)) {
        let scores = compute(&record);
        prop_assert!((0.0..=10.0).contains(&scores.base), "base {}", scores.base);
        prop_assert!((0.0..=10.0).contains(&scores.temporal), "temporal {}", scores.temporal);
        prop_assert!(scores.environmental <= 10.0, "environmental {}", scores.environmental);
    }

    #[test]
    fn scores_have_one_decimal(record in arb_vector(&MetricGroup::ALL)) {
        let scores = compute(&record);
        prop_assert!(is_one_decimal(scores.base));
        prop_assert!(is_one_decimal(scores.temporal));
        prop_assert!(is_one_decimal(scores.environmental));
    }

    #[test]
    fn capped_subscores_never_exceed_ten(record in arb_vector(&MetricGroup::ALL)) {
        let breakdown = compute_breakdown(&record);
        prop_assert!(breakdown.temporal_exploitability <= 10.0);
        prop_assert!(breakdown.environmental_impact <= 10.0);
        prop_assert!(breakdown.environmental_exploitability <= 10.0);
    }
}

// ── Undefined optional groups ────────────────────────────────────────────

proptest! {
    #[test]
    fn undefined_temporal_group_leaves_base_unchanged(
        record in arb_vector(&[MetricGroup::Base]),
    ) {
        let scores = compute(&record);
        prop_assert_eq!(scores.temporal, scores.base);
        // The environmental impact is capped at 10 and the base impact is not,
        // so the two may differ by one step.
        prop_assert!((scores.environmental - scores.base).abs() <= 0.1 + 1e-9);
    }
}

// ── Consistency ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn breakdown_matches_compute(record in arb_vector(&MetricGroup::ALL)) {
        prop_assert_eq!(compute_breakdown(&record).scores, compute(&record));
    }

    #[test]
    fn batch_matches_single(records in prop::collection::vec(arb_vector(&MetricGroup::ALL), 0..16)) {
        let engine = ScoreEngine::new();
        let batch = engine.score_batch(&records);
        prop_assert_eq!(batch.len(), records.len());
        for (record, scores) in records.iter().zip(batch) {
            prop_assert_eq!(engine.score(record), scores);
        }
    }

    #[test]
    fn round1_is_idempotent(x in -20.0f64..20.0) {
        let once = round1(x);
        prop_assert_eq!(round1(once), once);
        prop_assert!((once - x).abs() <= 0.05 + 1e-9);
    }
}
