//! Property tests for the classification laws.

use proptest::prelude::*;

use wq_assess::{RawSamples, assess};
use wq_model::{ComplianceStatus, Limit};
use wq_standards::guidelines;

proptest! {
    // Scalar limit: OK iff mean <= max, inclusive at the boundary.
    #[test]
    fn scalar_status_matches_the_bound(value in -1000.0f64..1000.0, max in -1000.0f64..1000.0) {
        let limit = Limit::scalar(max);
        let expected = if value <= max {
            ComplianceStatus::Ok
        } else {
            ComplianceStatus::Exceeds
        };
        prop_assert_eq!(limit.check(value), expected);
    }

    // Range limit: OK iff min <= mean <= max, inclusive on both ends.
    #[test]
    fn range_status_matches_the_interval(
        value in -1000.0f64..1000.0,
        low in -1000.0f64..0.0,
        span in 0.0f64..1000.0,
    ) {
        let limit = Limit::range(low, low + span);
        let expected = if low <= value && value <= low + span {
            ComplianceStatus::Ok
        } else {
            ComplianceStatus::Exceeds
        };
        prop_assert_eq!(limit.check(value), expected);
    }

    // Exactly one status holds per (measurement, limit) pair.
    #[test]
    fn boundary_values_are_compliant(max in -1000.0f64..1000.0) {
        let limit = Limit::scalar(max);
        prop_assert_eq!(limit.check(max), ComplianceStatus::Ok);
    }

    // The comparator is a pure function of its inputs.
    #[test]
    fn assessment_is_idempotent(readings in proptest::collection::vec(-100.0f64..100.0, 1..=3)) {
        let mut raw = RawSamples::new();
        raw.insert(
            "Turbidity (NTU)".to_string(),
            readings.iter().map(ToString::to_string).collect(),
        );
        let first = assess(guidelines(), &raw).unwrap();
        let second = assess(guidelines(), &raw).unwrap();
        prop_assert_eq!(first, second);
    }
}
