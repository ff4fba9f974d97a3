//! Results of resolving region codes against a catalog

use geowhere_core::error::{Result, WhereError};
use geowhere_core::models::{eq_fold, providers};
use geowhere_core::{Code, Region, RegionSet};

/// Every region sharing one code, in catalog order
///
/// A code such as `us-east-1` can be offered by several providers; the
/// provider accessors pick one of them.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionMatches<'a> {
    code: Code,
    regions: &'a [Region],
}

impl<'a> RegionMatches<'a> {
    /// Matches for `code` over the regions that use it
    pub fn new(code: impl Into<Code>, regions: &'a [Region]) -> Self {
        Self { code: code.into(), regions }
    }

    /// The code that was looked up
    pub fn code(&self) -> &Code {
        &self.code
    }

    /// First region for the code
    pub fn first(&self) -> Result<Region> {
        self.regions
            .first()
            .cloned()
            .ok_or_else(|| WhereError::RegionNotFound { code: self.code.clone() })
    }

    /// All regions for the code
    pub fn all(&self) -> &'a [Region] {
        self.regions
    }

    /// Number of providers offering the code
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no provider offers the code
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// The region offered by a provider (case-insensitive)
    pub fn on_provider(&self, provider: &str) -> Result<Region> {
        self.regions.iter().find(|r| eq_fold(&r.provider, provider)).cloned().ok_or_else(|| {
            WhereError::ProviderNotFound { code: self.code.clone(), provider: provider.to_string() }
        })
    }

    /// The AWS region using this code
    pub fn on_aws(&self) -> Result<Region> {
        self.on_provider(providers::AWS)
    }

    /// The Azure region using this code
    pub fn on_azure(&self) -> Result<Region> {
        self.on_provider(providers::AZURE)
    }

    /// The Google Cloud region using this code
    pub fn on_gcp(&self) -> Result<Region> {
        self.on_provider(providers::GCP)
    }

    /// The Alibaba Cloud region using this code
    pub fn on_alibaba(&self) -> Result<Region> {
        self.on_provider(providers::ALIBABA)
    }

    /// The Yandex Cloud region using this code
    pub fn on_yandex(&self) -> Result<Region> {
        self.on_provider(providers::YANDEX)
    }

    /// The VK Cloud region using this code
    pub fn on_vk(&self) -> Result<Region> {
        self.on_provider(providers::VK)
    }

    /// Copy the matches into an owned [`RegionSet`]
    pub fn to_set(&self) -> RegionSet {
        RegionSet::from(self.regions.to_vec())
    }
}

/// Outcome of resolving several codes at once
///
/// Resolution never stops at the first unknown code: `regions` holds every
/// region of every known code and `missing` lists each unknown code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedRegions {
    pub regions: RegionSet,
    pub missing: Vec<Code>,
}

impl ResolvedRegions {
    /// Whether every code resolved
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// A single not-found error naming every unknown code
    pub fn error(&self) -> Option<WhereError> {
        if self.missing.is_empty() {
            None
        } else {
            Some(WhereError::RegionsNotFound { codes: self.missing.clone() })
        }
    }

    /// The regions, or the not-found error if any code was unknown
    pub fn into_result(self) -> Result<RegionSet> {
        if self.missing.is_empty() {
            Ok(self.regions)
        } else {
            Err(WhereError::RegionsNotFound { codes: self.missing })
        }
    }
}
