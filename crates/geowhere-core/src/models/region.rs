use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::WhereError;
use crate::geo::point_distance_km;

/// Provider-specific region identifier (e.g. `us-east-1`, `westeurope`)
///
/// Codes are not unique across providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Code {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for Code {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl Borrow<str> for Code {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Operational status of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Status {
    /// Fully operational and generally available
    #[default]
    Active = 0,
    /// Being phased out; not for new resources
    Deprecated = 1,
    /// Limited availability, may lack services
    Preview = 2,
}

impl Status {
    /// Decode the numeric representation
    pub fn from_repr(value: u8) -> Option<Self> {
        match value {
            0 => Some(Status::Active),
            1 => Some(Status::Deprecated),
            2 => Some(Status::Preview),
            _ => None,
        }
    }

    /// Name for a numeric status, `"unknown"` when out of range
    pub fn name_of(value: u8) -> &'static str {
        Self::from_repr(value).map_or("unknown", |status| status.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Deprecated => "deprecated",
            Status::Preview => "preview",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = WhereError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Status::Active),
            "deprecated" => Ok(Status::Deprecated),
            "preview" => Ok(Status::Preview),
            _ => Err(WhereError::InvalidStatus { value: s.to_string() }),
        }
    }
}

/// Cloud provider region with location and lifecycle metadata
///
/// Regions are created once when the catalog loads and are passed around by
/// value afterwards, so pipeline stages never touch catalog-owned records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub code: Code,
    pub name: String,
    pub provider: String,
    pub country: String,
    pub city: String,
    pub continent: String,

    /// Decimal degrees, expected within [-90, 90]
    pub latitude: f64,

    /// Decimal degrees, expected within [-180, 180]
    pub longitude: f64,

    pub status: Status,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_date: Option<NaiveDate>,

    /// Availability zone identifiers in provider order
    #[serde(default)]
    pub zones: Vec<String>,
}

impl Region {
    /// Great-circle distance to another region in kilometers
    pub fn distance(&self, other: &Region) -> f64 {
        point_distance_km(self.location(), other.location())
    }

    /// Great-circle distance to a coordinate in kilometers
    pub fn distance_to(&self, lat: f64, lng: f64) -> f64 {
        point_distance_km(self.location(), geo::Point::new(lng, lat))
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    /// Whether the region lies within `radius_km` of the coordinate (inclusive)
    pub fn is_near(&self, lat: f64, lng: f64, radius_km: f64) -> bool {
        self.distance_to(lat, lng) <= radius_km
    }

    /// Location as a `geo` point (x = longitude, y = latitude)
    pub fn location(&self) -> geo::Point<f64> {
        geo::Point::new(self.longitude, self.latitude)
    }
}
