//! Great-circle distance on a spherical Earth.

use geo::{Distance, HaversineMeasure, Point};

/// Mean Earth radius used for all distance computations, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Sphere of radius [`EARTH_RADIUS_KM`], measured in meters
const EARTH: HaversineMeasure = HaversineMeasure::new(EARTH_RADIUS_KM * 1000.0);

/// Longest possible great-circle distance on [`EARTH`], in kilometers
const HALF_CIRCUMFERENCE_KM: f64 = std::f64::consts::PI * EARTH_RADIUS_KM;

/// Great-circle distance between two coordinates in kilometers.
///
/// Coordinates are decimal degrees. Uses the haversine formula with a fixed
/// radius of [`EARTH_RADIUS_KM`]. Out-of-range inputs are not rejected.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    point_distance_km(Point::new(lng1, lat1), Point::new(lng2, lat2))
}

/// Distance in kilometers between two `geo` points (x = longitude, y = latitude)
pub fn point_distance_km(from: Point<f64>, to: Point<f64>) -> f64 {
    // Rounding near antipodes can push asin past its domain; `min` drops the NaN
    (EARTH.distance(from, to) / 1000.0).min(HALF_CIRCUMFERENCE_KM)
}
