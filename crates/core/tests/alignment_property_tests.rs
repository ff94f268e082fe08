//! Property-based tests for series alignment and correlation.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::{Days, NaiveDate};
use metalpulse_core::analysis::{align, correlate};
use metalpulse_core::series::{Observation, TimeSeries};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

// =============================================================================
// Generators
// =============================================================================

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
}

/// Generates a series over ~3 months with sparse, unordered rows and
/// occasional duplicate dates.
fn arb_series() -> impl Strategy<Value = TimeSeries> {
    proptest::collection::vec((0u64..90, 1i64..1_000_000), 0..60).prop_map(|rows| {
        TimeSeries::new(
            rows.into_iter()
                .map(|(offset, cents)| {
                    Observation::new(base_date() + Days::new(offset), Decimal::new(cents, 2))
                })
                .collect(),
        )
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Construction yields strictly ascending dates.
    #[test]
    fn prop_series_strictly_ascending(series in arb_series()) {
        let obs = series.observations();
        prop_assert!(obs.windows(2).all(|w| w[0].date < w[1].date));
    }

    /// Aligned dates are strictly increasing and are exactly the intersection.
    #[test]
    fn prop_align_is_date_intersection(a in arb_series(), b in arb_series()) {
        let aligned = align(&a, &b);
        prop_assert!(aligned.windows(2).all(|w| w[0].date < w[1].date));

        let dates_a: BTreeSet<_> = a.iter().map(|o| o.date).collect();
        let dates_b: BTreeSet<_> = b.iter().map(|o| o.date).collect();
        let expected: Vec<_> = dates_a.intersection(&dates_b).copied().collect();
        let actual: Vec<_> = aligned.iter().map(|p| p.date).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Swapping the inputs swaps the columns and nothing else.
    #[test]
    fn prop_align_commutes(a in arb_series(), b in arb_series()) {
        let ab = align(&a, &b);
        let ba = align(&b, &a);
        prop_assert_eq!(ab.len(), ba.len());
        for (x, y) in ab.iter().zip(&ba) {
            prop_assert_eq!(x.date, y.date);
            prop_assert_eq!(x.a, y.b);
            prop_assert_eq!(x.b, y.a);
        }
    }

    /// A defined coefficient is always within [-1, 1] and counts every sample.
    #[test]
    fn prop_correlation_in_range(a in arb_series(), b in arb_series()) {
        let aligned = align(&a, &b);
        if let Some(result) = correlate(&aligned) {
            prop_assert!((-1.0..=1.0).contains(&result.coefficient));
            prop_assert_eq!(result.sample_size, aligned.len());
        } else {
            let constant = |f: fn(&metalpulse_core::analysis::AlignedPoint) -> Decimal| {
                aligned.iter().map(f).collect::<BTreeSet<_>>().len() <= 1
            };
            prop_assert!(aligned.len() < 2 || constant(|p| p.a) || constant(|p| p.b));
        }
    }

    /// A non-constant series correlates perfectly with itself.
    #[test]
    fn prop_self_correlation_is_one(series in arb_series()) {
        let distinct: BTreeSet<_> = series.iter().map(|o| o.price).collect();
        prop_assume!(distinct.len() >= 2);

        let result = correlate(&align(&series, &series)).unwrap();
        prop_assert!((result.coefficient - 1.0).abs() < 1e-9);
    }
}
