//! Well-known provider and continent names used by the catalog data.

/// Provider names as they appear in region records
pub mod providers {
    pub const AWS: &str = "aws";
    pub const AZURE: &str = "azure";
    pub const GCP: &str = "gcp";
    pub const YANDEX: &str = "yandex";
    pub const VK: &str = "vk";
    pub const ALIBABA: &str = "alibaba";
}

/// Continent names as they appear in region records
pub mod continents {
    pub const ASIA: &str = "Asia";
    pub const EUROPE: &str = "Europe";
    pub const NORTH_AMERICA: &str = "North America";
    pub const SOUTH_AMERICA: &str = "South America";
    pub const OCEANIA: &str = "Oceania";
    pub const AFRICA: &str = "Africa";
}
