//! geowhere Query - Fluent region queries
//!
//! This crate implements the query builder, multi-provider code resolution,
//! and the [`Where`] facade answering questions about a catalog.

pub mod api;
pub mod matches;
pub mod query;

pub use api::Where;
pub use matches::{RegionMatches, ResolvedRegions};
pub use query::Query;
