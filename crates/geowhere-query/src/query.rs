//! Fluent region query builder
//!
//! A [`Query`] starts from a snapshot of the whole catalog and narrows it one
//! step at a time. Steps that need to resolve a region code record failures
//! instead of aborting, so a chain always runs to its terminal call:
//!
//! ```ignore
//! let regions = Query::new(&catalog)
//!     .in_country("Japan")
//!     .by_provider("aws")
//!     .active_only()
//!     .exec();
//! ```

use geowhere_core::error::{Result, WhereError};
use geowhere_core::models::{continents, eq_fold, providers};
use geowhere_core::{Catalog, Code, Region, RegionSet, Status};
use std::collections::BTreeSet;
use std::fmt;

/// Single-use query over a catalog snapshot
pub struct Query<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
    regions: RegionSet,
    errors: Vec<WhereError>,
}

impl<'a, C: Catalog + ?Sized> Query<'a, C> {
    /// Start a query from every region in the catalog
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog, regions: catalog.all_regions(), errors: Vec::new() }
    }

    /// Keep regions in a country (case-insensitive)
    pub fn in_country(mut self, name: &str) -> Self {
        self.regions = self.regions.by_country(name);
        self
    }

    /// Keep regions in a city (case-insensitive)
    pub fn in_city(mut self, name: &str) -> Self {
        self.regions = self.regions.by_city(name);
        self
    }

    /// Keep regions on a continent (case-insensitive)
    pub fn in_continent(mut self, name: &str) -> Self {
        self.regions = self.regions.by_continent(name);
        self
    }

    /// Keep regions in Asia
    pub fn in_asia(self) -> Self {
        self.in_continent(continents::ASIA)
    }

    /// Keep regions in Europe
    pub fn in_europe(self) -> Self {
        self.in_continent(continents::EUROPE)
    }

    /// North and South America
    pub fn in_americas(mut self) -> Self {
        self.regions = self.regions.filter(|r| {
            eq_fold(&r.continent, continents::NORTH_AMERICA)
                || eq_fold(&r.continent, continents::SOUTH_AMERICA)
        });
        self
    }

    /// Keep regions in Oceania
    pub fn in_oceania(self) -> Self {
        self.in_continent(continents::OCEANIA)
    }

    /// Keep regions in Africa
    pub fn in_africa(self) -> Self {
        self.in_continent(continents::AFRICA)
    }

    /// Keep regions offered by a provider (case-insensitive)
    pub fn by_provider(mut self, name: &str) -> Self {
        self.regions = self.regions.on_provider(name);
        self
    }

    /// Keep AWS regions
    pub fn by_aws(self) -> Self {
        self.by_provider(providers::AWS)
    }

    /// Keep Azure regions
    pub fn by_azure(self) -> Self {
        self.by_provider(providers::AZURE)
    }

    /// Keep Google Cloud regions
    pub fn by_gcp(self) -> Self {
        self.by_provider(providers::GCP)
    }

    /// Keep Yandex Cloud regions
    pub fn by_yandex(self) -> Self {
        self.by_provider(providers::YANDEX)
    }

    /// Keep VK Cloud regions
    pub fn by_vk(self) -> Self {
        self.by_provider(providers::VK)
    }

    /// Keep Alibaba Cloud regions
    pub fn by_alibaba(self) -> Self {
        self.by_provider(providers::ALIBABA)
    }

    /// Keep active regions
    pub fn active_only(self) -> Self {
        self.with_status(Status::Active)
    }

    /// Keep preview regions
    pub fn preview_only(self) -> Self {
        self.with_status(Status::Preview)
    }

    /// Keep deprecated regions
    pub fn deprecated_only(self) -> Self {
        self.with_status(Status::Deprecated)
    }

    /// Keep regions with exactly this status
    pub fn with_status(mut self, status: Status) -> Self {
        self.regions = self.regions.with_status(status);
        self
    }

    /// Keep regions within `radius_km` of a coordinate
    pub fn near(mut self, lat: f64, lng: f64, radius_km: f64) -> Self {
        self.regions = self.regions.near(lat, lng, radius_km);
        self
    }

    /// Keep regions within `radius_km` of the first region with `code`
    ///
    /// An unknown code is recorded as an error and leaves the current
    /// regions untouched.
    pub fn near_region(self, code: &str, radius_km: f64) -> Self {
        let anchor = self.catalog.lookup(code).first().map(|r| (r.latitude, r.longitude));

        match anchor {
            Some((lat, lng)) => self.near(lat, lng, radius_km),
            None => self.record_error(WhereError::RegionNotFound { code: Code::from(code) }),
        }
    }

    /// Keep regions within `radius_km` of the first catalog region in a city
    ///
    /// A city with no regions empties the query.
    pub fn near_city(mut self, city: &str, radius_km: f64) -> Self {
        let anchor = self
            .catalog
            .regions()
            .iter()
            .find(|r| eq_fold(&r.city, city))
            .map(|r| (r.latitude, r.longitude));

        match anchor {
            Some((lat, lng)) => self.near(lat, lng, radius_km),
            None => {
                self.regions = RegionSet::new();
                self
            }
        }
    }

    /// Keep regions matching a custom predicate
    pub fn filter<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&Region) -> bool,
    {
        self.regions = self.regions.filter(predicate);
        self
    }

    /// Order by distance from a coordinate, nearest first
    pub fn sort_by_distance(mut self, lat: f64, lng: f64) -> Self {
        self.regions.sort_by_distance(lat, lng);
        self
    }

    /// Order by display name
    pub fn sort_by_name(mut self) -> Self {
        self.regions.sort_by_name();
        self
    }

    /// Order by provider name
    pub fn sort_by_provider(mut self) -> Self {
        self.regions.sort_by_provider();
        self
    }

    /// Order by country name
    pub fn sort_by_country(mut self) -> Self {
        self.regions.sort_by_country();
        self
    }

    /// Keep at most `n` regions
    pub fn limit(mut self, n: usize) -> Self {
        self.regions.truncate(n);
        self
    }

    fn record_error(mut self, error: WhereError) -> Self {
        tracing::debug!(error = %error, "Query step failed; continuing with current regions");
        self.errors.push(error);
        self
    }

    /// Errors recorded so far
    pub fn errors(&self) -> &[WhereError] {
        &self.errors
    }

    /// Current regions, ignoring recorded errors
    pub fn exec(self) -> RegionSet {
        self.regions
    }

    /// Run the query, returning the result alongside every recorded error
    pub fn exec_with_errors(self) -> (RegionSet, Vec<WhereError>) {
        (self.regions, self.errors)
    }

    /// First region, or the first recorded error
    pub fn first(self) -> Result<Region> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => self.regions.first(),
        }
    }

    /// Last region, or the first recorded error
    pub fn last(self) -> Result<Region> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => self.regions.last(),
        }
    }

    /// Number of regions the query yields
    pub fn count(&self) -> usize {
        self.regions.len()
    }

    /// Whether the query yields any region
    pub fn has(&self) -> bool {
        !self.regions.is_empty()
    }

    /// Codes of the resulting regions, in result order
    pub fn codes(&self) -> Vec<Code> {
        self.regions.codes()
    }

    /// Display names of the resulting regions, in result order
    pub fn names(&self) -> Vec<String> {
        self.regions.names()
    }

    /// Distinct provider names, sorted
    pub fn providers(&self) -> Vec<String> {
        distinct(&self.regions, |r| &r.provider)
    }

    /// Distinct country names, sorted
    pub fn countries(&self) -> Vec<String> {
        distinct(&self.regions, |r| &r.country)
    }

    /// Distinct city names, sorted
    pub fn cities(&self) -> Vec<String> {
        distinct(&self.regions, |r| &r.city)
    }
}

impl<C: Catalog + ?Sized> fmt::Debug for Query<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("regions", &self.regions.len())
            .field("errors", &self.errors)
            .finish()
    }
}

pub(crate) fn distinct<'r, I, F>(regions: I, field: F) -> Vec<String>
where
    I: IntoIterator<Item = &'r Region>,
    F: Fn(&'r Region) -> &'r String,
{
    regions.into_iter().map(field).collect::<BTreeSet<_>>().into_iter().cloned().collect()
}
