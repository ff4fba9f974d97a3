use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::region::{Code, Region, Status};
use crate::error::{Result, WhereError};
use crate::geo::to_feature_collection;

/// Ordered collection of regions
///
/// Despite the algebra below this is not a mathematical set: duplicates are
/// allowed and insertion order is preserved unless a sort is applied. Union,
/// intersection and difference compare regions by [`Code`] only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionSet {
    regions: Vec<Region>,
}

impl RegionSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the regions matching a predicate, in original order
    pub fn filter<P>(&self, predicate: P) -> RegionSet
    where
        P: Fn(&Region) -> bool,
    {
        self.regions.iter().filter(|region| predicate(region)).cloned().collect()
    }

    /// Regions offered by a provider (case-insensitive)
    pub fn on_provider(&self, name: &str) -> RegionSet {
        self.filter(|r| eq_fold(&r.provider, name))
    }

    /// Regions in a country (case-insensitive)
    pub fn by_country(&self, name: &str) -> RegionSet {
        self.filter(|r| eq_fold(&r.country, name))
    }

    /// Regions in a city (case-insensitive)
    pub fn by_city(&self, name: &str) -> RegionSet {
        self.filter(|r| eq_fold(&r.city, name))
    }

    /// Regions on a continent (case-insensitive)
    pub fn by_continent(&self, name: &str) -> RegionSet {
        self.filter(|r| eq_fold(&r.continent, name))
    }

    /// Regions whose status is active
    pub fn active_only(&self) -> RegionSet {
        self.with_status(Status::Active)
    }

    /// Regions with exactly this status
    pub fn with_status(&self, status: Status) -> RegionSet {
        self.filter(|r| r.status == status)
    }

    /// Regions within `radius_km` of a coordinate, boundary included
    pub fn near(&self, lat: f64, lng: f64, radius_km: f64) -> RegionSet {
        self.filter(|r| r.is_near(lat, lng, radius_km))
    }

    /// First region, or [`WhereError::EmptySet`]
    pub fn first(&self) -> Result<Region> {
        self.regions.first().cloned().ok_or(WhereError::EmptySet)
    }

    /// Last region, or [`WhereError::EmptySet`]
    pub fn last(&self) -> Result<Region> {
        self.regions.last().cloned().ok_or(WhereError::EmptySet)
    }

    /// Regions of `self` then regions of `other`, each code kept once
    ///
    /// The first occurrence of a code wins.
    pub fn union(&self, other: &RegionSet) -> RegionSet {
        let mut seen: HashSet<&Code> = HashSet::with_capacity(self.len() + other.len());
        let mut result = Vec::with_capacity(self.len() + other.len());

        for region in self.regions.iter().chain(other.regions.iter()) {
            if seen.insert(&region.code) {
                result.push(region.clone());
            }
        }

        RegionSet::from(result)
    }

    /// Regions of `self` whose code appears in `other`
    pub fn intersect(&self, other: &RegionSet) -> RegionSet {
        let codes = other.code_set();
        self.filter(|r| codes.contains(&r.code))
    }

    /// Regions of `self` whose code does not appear in `other`
    pub fn difference(&self, other: &RegionSet) -> RegionSet {
        let codes = other.code_set();
        self.filter(|r| !codes.contains(&r.code))
    }

    /// Sort nearest-first from a coordinate
    pub fn sort_by_distance(&mut self, lat: f64, lng: f64) {
        self.regions.sort_by(|a, b| a.distance_to(lat, lng).total_cmp(&b.distance_to(lat, lng)));
    }

    /// Stable sort by display name
    pub fn sort_by_name(&mut self) {
        self.regions.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Stable sort by provider name
    pub fn sort_by_provider(&mut self) {
        self.regions.sort_by(|a, b| a.provider.cmp(&b.provider));
    }

    /// Stable sort by country name
    pub fn sort_by_country(&mut self) {
        self.regions.sort_by(|a, b| a.country.cmp(&b.country));
    }

    /// Keep only the first `n` regions; no-op when `n >= len`
    pub fn truncate(&mut self, n: usize) {
        self.regions.truncate(n);
    }

    /// Codes in set order
    pub fn codes(&self) -> Vec<Code> {
        self.regions.iter().map(|r| r.code.clone()).collect()
    }

    /// Display names in set order
    pub fn names(&self) -> Vec<String> {
        self.regions.iter().map(|r| r.name.clone()).collect()
    }

    /// Number of regions
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the set holds no regions
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Region at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    /// Iterate regions in set order
    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// Regions as a slice
    pub fn as_slice(&self) -> &[Region] {
        &self.regions
    }

    /// Consume the set, returning its regions
    pub fn into_vec(self) -> Vec<Region> {
        self.regions
    }

    /// Export as a GeoJSON FeatureCollection of points
    pub fn to_feature_collection(&self) -> FeatureCollection {
        to_feature_collection(&self.regions)
    }

    fn code_set(&self) -> HashSet<&Code> {
        self.regions.iter().map(|r| &r.code).collect()
    }
}

impl From<Vec<Region>> for RegionSet {
    fn from(regions: Vec<Region>) -> Self {
        Self { regions }
    }
}

impl FromIterator<Region> for RegionSet {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        Self { regions: iter.into_iter().collect() }
    }
}

impl Extend<Region> for RegionSet {
    fn extend<I: IntoIterator<Item = Region>>(&mut self, iter: I) {
        self.regions.extend(iter);
    }
}

impl IntoIterator for RegionSet {
    type Item = Region;
    type IntoIter = std::vec::IntoIter<Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.into_iter()
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

/// Case-insensitive exact match, Unicode aware
pub fn eq_fold(a: &str, b: &str) -> bool {
    a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase))
}
