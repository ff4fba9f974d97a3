//! Geo module for proximity computations
//!
//! This module provides the great-circle distance used by every proximity
//! filter and sort, plus GeoJSON export of region sets.

pub mod distance;
pub mod export;

// Re-export key items for convenience
pub use distance::{haversine_km, point_distance_km, EARTH_RADIUS_KM};
pub use export::{region_feature, to_feature_collection};
