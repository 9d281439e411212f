//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{CityQuery, CompassDirection, Humidity, SamplingPolicy};
use proptest::prelude::*;

// ============================================================================
// CompassDirection Property Tests
// ============================================================================

mod compass_direction_tests {
    use super::*;

    proptest! {
        #[test]
        fn finite_bearings_always_resolve(degrees in -100_000.0f64..100_000.0f64) {
            prop_assert!(CompassDirection::from_degrees(degrees).is_ok());
        }

        #[test]
        fn full_turns_do_not_change_direction(
            degrees in 0.0f64..360.0f64,
            turns in -10i32..10i32
        ) {
            let base = CompassDirection::from_degrees(degrees).unwrap();
            let shifted = CompassDirection::from_degrees(degrees + f64::from(turns) * 360.0).unwrap();
            // Float error near a sector edge may move the shifted bearing across it
            let near_edge = ((degrees + 11.25) % 22.5).min(22.5 - (degrees + 11.25) % 22.5) < 1e-6;
            prop_assume!(!near_edge);
            prop_assert_eq!(base, shifted);
        }

        #[test]
        fn bearing_lies_within_half_sector(degrees in 0.0f64..360.0f64) {
            let dir = CompassDirection::from_degrees(degrees).unwrap();
            let diff = (degrees - dir.bearing()).rem_euclid(360.0);
            let distance = diff.min(360.0 - diff);
            prop_assert!(distance <= 11.25 + 1e-9);
        }

        #[test]
        fn mapping_is_deterministic(degrees in -720.0f64..720.0f64) {
            prop_assert_eq!(
                CompassDirection::from_degrees(degrees).unwrap(),
                CompassDirection::from_degrees(degrees).unwrap()
            );
        }
    }
}

// ============================================================================
// SamplingPolicy Property Tests
// ============================================================================

mod sampling_policy_tests {
    use super::*;

    proptest! {
        #[test]
        fn indices_are_strictly_ascending(
            offset in 0usize..100,
            stride in 1usize..50,
            count in 1usize..50
        ) {
            let policy = SamplingPolicy::new(offset, stride, count).unwrap();
            let indices: Vec<usize> = policy.indices().collect();
            prop_assert_eq!(indices.len(), count);
            prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn required_len_covers_last_index(
            offset in 0usize..100,
            stride in 1usize..50,
            count in 1usize..50
        ) {
            let policy = SamplingPolicy::new(offset, stride, count).unwrap();
            let last = policy.indices().last().unwrap();
            prop_assert_eq!(policy.required_len(), last + 1);
        }
    }
}

// ============================================================================
// Humidity Property Tests
// ============================================================================

mod humidity_tests {
    use super::*;

    proptest! {
        #[test]
        fn readings_always_in_range(reading in proptest::num::f64::ANY) {
            prop_assert!(Humidity::from_reading(reading).value() <= 100);
        }

        #[test]
        fn valid_values_accepted(value in 0u8..=100) {
            prop_assert!(Humidity::new(value).is_ok());
        }

        #[test]
        fn invalid_values_rejected(value in 101u8..=255) {
            prop_assert!(Humidity::new(value).is_err());
        }
    }
}

// ============================================================================
// CityQuery Property Tests
// ============================================================================

mod city_query_tests {
    use super::*;

    proptest! {
        #[test]
        fn query_param_roundtrips(
            city in "[A-Za-z][A-Za-z ]{0,20}[A-Za-z]",
            region in "[a-z]{2,3}"
        ) {
            let q = CityQuery::parse(&format!("{city}, {region}")).unwrap();
            prop_assert_eq!(q.city(), city.as_str());
            prop_assert_eq!(q.region(), Some(region.as_str()));
            prop_assert_eq!(q.to_query_param(), format!("{city},{region}"));
        }
    }
}
