//! Question-style facade over a catalog
//!
//! [`Where`] owns (or borrows, through the blanket [`Catalog`] impls) an
//! injected catalog and answers lookup, discovery and filtering questions
//! about it. It holds no other state.

use geowhere_core::config::LayeredConfig;
use geowhere_core::error::{Result, WhereError};
use geowhere_core::models::{continents, eq_fold, providers};
use geowhere_core::{Catalog, Code, Region, RegionSet, Status};
use geowhere_store::{load_catalog, MemoryCatalog};

use crate::matches::{RegionMatches, ResolvedRegions};
use crate::query::{distinct, Query};

/// Stateless query facade over an injected catalog
#[derive(Debug, Clone, Default)]
pub struct Where<C> {
    catalog: C,
}

impl Where<MemoryCatalog> {
    /// Facade over the built-in region table
    pub fn builtin() -> Result<Self> {
        Self::from_config(&LayeredConfig::with_defaults())
    }

    /// Facade over a catalog loaded according to the configuration
    pub fn from_config(config: &LayeredConfig) -> Result<Self> {
        Ok(Self::new(load_catalog(config)?))
    }
}

impl<C: Catalog> Where<C> {
    /// Facade over an already loaded catalog
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// The underlying catalog
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Start a query builder over the whole catalog
    pub fn new_query(&self) -> Query<'_, C> {
        Query::new(&self.catalog)
    }

    // Lookup

    /// Every region using `code`
    pub fn is(&self, code: &str) -> RegionMatches<'_> {
        RegionMatches::new(code, self.catalog.lookup(code))
    }

    /// First region using `code`
    ///
    /// # Panics
    ///
    /// Panics if no region uses the code.
    pub fn must_is(&self, code: &str) -> Region {
        match self.is(code).first() {
            Ok(region) => region,
            Err(e) => panic!("{}", e),
        }
    }

    /// Resolve several codes, collecting every unknown one
    pub fn are<I, S>(&self, codes: I) -> ResolvedRegions
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolved = ResolvedRegions::default();

        for code in codes {
            let code = code.as_ref();
            let regions = self.catalog.lookup(code);
            if regions.is_empty() {
                resolved.missing.push(Code::from(code));
            } else {
                resolved.regions.extend(regions.iter().cloned());
            }
        }

        resolved
    }

    /// Whether any region uses `code`
    pub fn has(&self, code: &str) -> bool {
        self.catalog.contains(code)
    }

    /// Whether any region using `code` is active
    pub fn is_active(&self, code: &str) -> bool {
        self.catalog.lookup(code).iter().any(Region::is_active)
    }

    /// Whether any region belongs to the provider (case-insensitive)
    pub fn has_provider(&self, name: &str) -> bool {
        self.catalog.regions().iter().any(|r| eq_fold(&r.provider, name))
    }

    // Discovery

    /// Distinct provider names, sorted
    pub fn providers(&self) -> Vec<String> {
        distinct(self.catalog.regions(), |r| &r.provider)
    }

    /// Distinct country names, sorted
    pub fn countries(&self) -> Vec<String> {
        distinct(self.catalog.regions(), |r| &r.country)
    }

    /// Distinct city names, sorted
    pub fn cities(&self) -> Vec<String> {
        distinct(self.catalog.regions(), |r| &r.city)
    }

    /// Distinct continent names, sorted
    pub fn continents(&self) -> Vec<String> {
        distinct(self.catalog.regions(), |r| &r.continent)
    }

    // Filtering

    /// Regions in a country (case-insensitive)
    pub fn in_country(&self, name: &str) -> RegionSet {
        self.catalog.all_regions().by_country(name)
    }

    /// Regions in a city (case-insensitive)
    pub fn in_city(&self, name: &str) -> RegionSet {
        self.catalog.all_regions().by_city(name)
    }

    /// Regions on a continent (case-insensitive)
    pub fn in_continent(&self, name: &str) -> RegionSet {
        self.catalog.all_regions().by_continent(name)
    }

    /// Regions offered by a provider (case-insensitive)
    pub fn on_provider(&self, name: &str) -> RegionSet {
        self.catalog.all_regions().on_provider(name)
    }

    /// Regions within `radius_km` of a coordinate
    pub fn near(&self, lat: f64, lng: f64, radius_km: f64) -> RegionSet {
        self.catalog.all_regions().near(lat, lng, radius_km)
    }

    /// Regions currently active
    pub fn active_regions(&self) -> RegionSet {
        self.catalog.all_regions().active_only()
    }

    /// Regions in preview
    pub fn preview_regions(&self) -> RegionSet {
        self.catalog.all_regions().with_status(Status::Preview)
    }

    /// Regions marked deprecated
    pub fn deprecated_regions(&self) -> RegionSet {
        self.catalog.all_regions().with_status(Status::Deprecated)
    }

    /// Regions in Asia
    pub fn asia(&self) -> RegionSet {
        self.in_continent(continents::ASIA)
    }

    /// Regions in Europe
    pub fn europe(&self) -> RegionSet {
        self.in_continent(continents::EUROPE)
    }

    /// North America followed by South America
    pub fn americas(&self) -> RegionSet {
        let mut americas = self.in_continent(continents::NORTH_AMERICA);
        americas.extend(self.in_continent(continents::SOUTH_AMERICA));
        americas
    }

    /// Regions in Oceania
    pub fn oceania(&self) -> RegionSet {
        self.in_continent(continents::OCEANIA)
    }

    /// Regions in Africa
    pub fn africa(&self) -> RegionSet {
        self.in_continent(continents::AFRICA)
    }

    /// AWS regions
    pub fn aws(&self) -> RegionSet {
        self.on_provider(providers::AWS)
    }

    /// Azure regions
    pub fn azure(&self) -> RegionSet {
        self.on_provider(providers::AZURE)
    }

    /// Google Cloud regions
    pub fn gcp(&self) -> RegionSet {
        self.on_provider(providers::GCP)
    }

    /// Yandex Cloud regions
    pub fn yandex(&self) -> RegionSet {
        self.on_provider(providers::YANDEX)
    }

    /// VK Cloud regions
    pub fn vk(&self) -> RegionSet {
        self.on_provider(providers::VK)
    }

    /// Alibaba Cloud regions
    pub fn alibaba(&self) -> RegionSet {
        self.on_provider(providers::ALIBABA)
    }

    // Proximity

    /// Alias of [`Where::near`]
    pub fn near_location(&self, lat: f64, lng: f64, radius_km: f64) -> RegionSet {
        self.near(lat, lng, radius_km)
    }

    /// Regions within `radius_km` of the first region using `code`
    pub fn near_region(&self, code: &str, radius_km: f64) -> Result<RegionSet> {
        let anchor = self.is(code).first()?;
        Ok(self.near(anchor.latitude, anchor.longitude, radius_km))
    }

    /// Regions within `radius_km` of the first region in a city; empty for
    /// an unknown city
    pub fn near_city(&self, city: &str, radius_km: f64) -> RegionSet {
        match self.catalog.regions().iter().find(|r| eq_fold(&r.city, city)) {
            Some(anchor) => self.near(anchor.latitude, anchor.longitude, radius_km),
            None => RegionSet::new(),
        }
    }

    // Derived

    /// Kilometers between the first regions using each code
    pub fn distance(&self, from: &str, to: &str) -> Result<f64> {
        let source = self.endpoint("source", from)?;
        let destination = self.endpoint("destination", to)?;
        Ok(source.distance(destination))
    }

    /// Nearest region with a different code
    pub fn closest(&self, code: &str) -> Result<Region> {
        let target = self.is(code).first()?;

        self.catalog
            .regions()
            .iter()
            .filter(|r| r.code != target.code)
            .map(|r| (target.distance(r), r))
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, r)| r.clone())
            .ok_or(WhereError::NoOtherRegions { code: target.code })
    }

    fn endpoint(&self, role: &'static str, code: &str) -> Result<&Region> {
        self.catalog
            .lookup(code)
            .first()
            .ok_or_else(|| WhereError::EndpointNotFound { role, code: Code::from(code) })
    }
}
