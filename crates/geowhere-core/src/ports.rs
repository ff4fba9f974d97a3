//! Port trait definitions
//!
//! These traits define the interfaces that catalog adapters must implement.

use crate::models::{Region, RegionSet};

/// Read-only catalog of region records
///
/// A code may map to several regions when more than one provider uses it.
/// Implementations are populated once and never mutated, so shared readers
/// need no synchronization.
pub trait Catalog {
    /// Every region for a code, in catalog order
    fn lookup(&self, code: &str) -> &[Region];

    /// Every region in catalog order
    fn regions(&self) -> &[Region];

    /// Snapshot of the whole catalog as an owned set
    fn all_regions(&self) -> RegionSet {
        RegionSet::from(self.regions().to_vec())
    }

    /// Whether any region uses this code
    fn contains(&self, code: &str) -> bool {
        !self.lookup(code).is_empty()
    }
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn lookup(&self, code: &str) -> &[Region] {
        (**self).lookup(code)
    }

    fn regions(&self) -> &[Region] {
        (**self).regions()
    }
}

impl<C: Catalog + ?Sized> Catalog for std::sync::Arc<C> {
    fn lookup(&self, code: &str) -> &[Region] {
        (**self).lookup(code)
    }

    fn regions(&self) -> &[Region] {
        (**self).regions()
    }
}
