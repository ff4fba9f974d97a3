//! Property tests for distance and region set algebra

use geowhere_core::geo::haversine_km;
use geowhere_core::{Code, Region, RegionSet};
use proptest::prelude::*;
use std::collections::HashSet;

fn region_strategy() -> impl Strategy<Value = Region> {
    // A small code alphabet forces overlaps between sets
    (
        "[a-f]",
        "[A-Za-z ]{0,12}",
        "[a-z]{0,6}",
        "[A-Z][a-z]{0,8}",
        -90.0f64..=90.0,
        -180.0f64..=180.0,
    )
        .prop_map(|(code, name, provider, country, latitude, longitude)| Region {
            code: Code::from(code),
            name,
            provider,
            country,
            latitude,
            longitude,
            ..Default::default()
        })
}

fn set_strategy() -> impl Strategy<Value = RegionSet> {
    prop::collection::vec(region_strategy(), 0..12).prop_map(RegionSet::from)
}

fn distinct_codes(set: &RegionSet) -> HashSet<Code> {
    set.iter().map(|r| r.code.clone()).collect()
}

proptest! {
    #[test]
    fn prop_distance_to_self_is_zero(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
        prop_assert_eq!(haversine_km(lat, lng, lat, lng), 0.0);
    }

    #[test]
    fn prop_distance_is_symmetric(
        lat1 in -90.0f64..=90.0,
        lng1 in -180.0f64..=180.0,
        lat2 in -90.0f64..=90.0,
        lng2 in -180.0f64..=180.0,
    ) {
        let ab = haversine_km(lat1, lng1, lat2, lng2);
        let ba = haversine_km(lat2, lng2, lat1, lng1);
        prop_assert!(ab >= 0.0);
        prop_assert!((ab - ba).abs() <= 1e-6 * ab.max(ba).max(1.0));
    }

    #[test]
    fn prop_union_has_each_code_once(a in set_strategy(), b in set_strategy()) {
        let union = a.union(&b);
        let codes = union.codes();
        let unique: HashSet<_> = codes.iter().cloned().collect();

        prop_assert_eq!(codes.len(), unique.len());

        // |A ∪ B| = |A| + |B| - |A ∩ B| over distinct codes
        let ca = distinct_codes(&a);
        let cb = distinct_codes(&b);
        prop_assert_eq!(union.len(), ca.len() + cb.len() - ca.intersection(&cb).count());
    }

    #[test]
    fn prop_intersect_and_difference_partition(a in set_strategy(), b in set_strategy()) {
        let inter = a.intersect(&b);
        let diff = a.difference(&b);

        prop_assert_eq!(inter.len() + diff.len(), a.len());

        let cb = distinct_codes(&b);
        prop_assert!(inter.iter().all(|r| cb.contains(&r.code)));
        prop_assert!(diff.iter().all(|r| !cb.contains(&r.code)));
    }

    #[test]
    fn prop_sort_by_name_is_non_decreasing(mut set in set_strategy()) {
        set.sort_by_name();
        let names = set.names();
        prop_assert!(names.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_sort_by_provider_is_non_decreasing(mut set in set_strategy()) {
        let before = set.len();
        set.sort_by_provider();
        let providers: Vec<&str> = set.iter().map(|r| r.provider.as_str()).collect();
        prop_assert!(providers.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(set.len(), before);
    }

    #[test]
    fn prop_sort_by_country_is_non_decreasing(mut set in set_strategy()) {
        let before = set.len();
        set.sort_by_country();
        let countries: Vec<&str> = set.iter().map(|r| r.country.as_str()).collect();
        prop_assert!(countries.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(set.len(), before);
    }

    #[test]
    fn prop_sort_by_distance_is_nearest_first(
        mut set in set_strategy(),
        lat in -90.0f64..=90.0,
        lng in -180.0f64..=180.0,
    ) {
        set.sort_by_distance(lat, lng);
        let distances: Vec<f64> = set.iter().map(|r| r.distance_to(lat, lng)).collect();
        prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_near_matches_distance(set in set_strategy(), radius in 0.0f64..20000.0) {
        let near = set.near(0.0, 0.0, radius);
        let expected = set.iter().filter(|r| r.distance_to(0.0, 0.0) <= radius).count();
        prop_assert_eq!(near.len(), expected);
    }
}
