use std::cmp::Ordering;

use proptest::prelude::*;
use seatcast_core::{ProbabilityMassFunction, SeatProjection};

/// Normalized distribution over consecutive seat counts starting at `first_key`.
fn arb_pmf(first_key: u32) -> impl Strategy<Value = ProbabilityMassFunction<u32>> {
    prop::collection::vec(0.01f64..1.0, 1..12).prop_map(move |weights| {
        let total: f64 = weights.iter().sum();
        ProbabilityMassFunction::new(
            weights.into_iter().enumerate().map(|(i, w)| (first_key + i as u32, w / total)),
        )
        .unwrap()
    })
}

/// Projection whose groups all have a median of at least one seat, so any
/// deficit within the group count can be reconciled in either direction.
fn arb_projection() -> impl Strategy<Value = SeatProjection> {
    prop::collection::vec(arb_pmf(1), 2..8).prop_map(|pmfs| {
        SeatProjection::new(
            pmfs.into_iter().enumerate().map(|(i, pmf)| (format!("Group {i}"), pmf)),
        )
        .unwrap()
    })
}

fn raw_total(projection: &SeatProjection) -> i64 {
    projection.groups().map(|g| i64::from(projection.median(g).unwrap())).sum()
}

// ── Median ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn median_is_smallest_key_reaching_half(pmf in arb_pmf(0)) {
        let median = pmf.median();
        prop_assert!(pmf.cumulative_probability(&median) >= 0.5);
        for key in pmf.keys().take_while(|k| **k < median) {
            prop_assert!(pmf.cumulative_probability(key) < 0.5);
        }
    }

    #[test]
    fn interval_contains_median(pmf in arb_pmf(0), confidence in 0.01f64..0.99) {
        let ci = pmf.confidence_interval(confidence).unwrap();
        let median = pmf.median();
        prop_assert!(ci.lower_bound <= median, "{:?} vs median {}", ci, median);
        prop_assert!(median <= ci.upper_bound, "{:?} vs median {}", ci, median);
    }

    #[test]
    fn interval_widens_with_confidence(
        pmf in arb_pmf(0),
        narrow in 0.01f64..0.98,
        extra in 0.0f64..1.0,
    ) {
        let wide = narrow + (0.99 - narrow) * extra;
        let narrow_ci = pmf.confidence_interval(narrow).unwrap();
        let wide_ci = pmf.confidence_interval(wide).unwrap();
        prop_assert!(wide_ci.lower_bound <= narrow_ci.lower_bound);
        prop_assert!(narrow_ci.upper_bound <= wide_ci.upper_bound);
    }
}

// ── Adjusted medians ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn adjusted_medians_hit_total(projection in arb_projection(), offset in -1.0f64..=1.0) {
        let groups = projection.group_count() as i64;
        let deficit = (offset * groups as f64).round() as i64;
        let total = raw_total(&projection) + deficit;

        let adjusted = projection.adjusted_medians(total).unwrap();
        let sum: i64 = adjusted.values().map(|&s| i64::from(s)).sum();
        prop_assert_eq!(sum, total);

        for (group, seats) in &adjusted {
            let raw = i64::from(projection.median(group).unwrap());
            prop_assert!((i64::from(*seats) - raw).abs() <= 1);
        }
    }

    #[test]
    fn adjusted_medians_identity_on_matching_total(projection in arb_projection()) {
        let adjusted = projection.adjusted_medians(raw_total(&projection)).unwrap();
        for (group, seats) in &adjusted {
            prop_assert_eq!(*seats, projection.median(group).unwrap());
        }
    }
}

// ── Group ordering ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn group_ordering_is_strict_weak(projection in arb_projection()) {
        let groups: Vec<&str> = projection.groups().collect();

        for a in &groups {
            prop_assert_eq!(projection.compare(a, a).unwrap(), Ordering::Equal);
            for b in &groups {
                let ab = projection.compare(a, b).unwrap();
                prop_assert_eq!(ab, projection.compare(b, a).unwrap().reverse());
                for c in &groups {
                    if ab == Ordering::Less && projection.compare(b, c).unwrap() == Ordering::Less {
                        prop_assert_eq!(projection.compare(a, c).unwrap(), Ordering::Less);
                    }
                }
            }
        }

        prop_assert_eq!(projection.ranked_groups(), projection.ranked_groups());
    }
}
