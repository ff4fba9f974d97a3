//! In-memory catalog implementation.
//!
//! The catalog is built once and never mutated, so lookups borrow directly
//! from the owned records without any locking.

use geowhere_core::{Catalog, Code, Region};
use std::collections::{HashMap, HashSet};

use crate::loader;

/// In-memory implementation of Catalog
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    regions: Vec<Region>,
    by_code: HashMap<Code, Vec<Region>>,
}

impl MemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records in load order
    ///
    /// Records repeating an earlier (code, provider) pair are dropped.
    pub fn from_regions(regions: impl IntoIterator<Item = Region>) -> Self {
        let mut seen: HashSet<(Code, String)> = HashSet::new();
        let mut catalog = Self::new();

        for region in regions {
            let key = (region.code.clone(), region.provider.to_lowercase());
            if !seen.insert(key) {
                tracing::warn!(
                    code = %region.code,
                    provider = %region.provider,
                    "Dropping duplicate region record"
                );
                continue;
            }

            catalog.by_code.entry(region.code.clone()).or_default().push(region.clone());
            catalog.regions.push(region);
        }

        catalog
    }

    /// Catalog of the built-in region table
    pub fn builtin() -> geowhere_core::Result<Self> {
        Ok(Self::from_regions(loader::builtin_regions()?))
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Number of distinct codes
    pub fn code_count(&self) -> usize {
        self.by_code.len()
    }
}

impl Catalog for MemoryCatalog {
    fn lookup(&self, code: &str) -> &[Region] {
        self.by_code.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    fn regions(&self) -> &[Region] {
        &self.regions
    }
}

impl FromIterator<Region> for MemoryCatalog {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        Self::from_regions(iter)
    }
}
