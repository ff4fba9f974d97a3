//! GeoJSON export of regions as Point features.

use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::{Map, Value as JsonValue};

use crate::models::Region;

/// Build a GeoJSON Point feature for a region, keyed by its code
pub fn region_feature(region: &Region) -> Feature {
    let mut properties = Map::new();
    properties.insert("code".to_string(), JsonValue::from(region.code.as_str()));
    properties.insert("name".to_string(), JsonValue::from(region.name.clone()));
    properties.insert("provider".to_string(), JsonValue::from(region.provider.clone()));
    properties.insert("country".to_string(), JsonValue::from(region.country.clone()));
    properties.insert("city".to_string(), JsonValue::from(region.city.clone()));
    properties.insert("continent".to_string(), JsonValue::from(region.continent.clone()));
    properties.insert("status".to_string(), JsonValue::from(region.status.as_str()));

    if let Some(launch_date) = region.launch_date {
        properties.insert("launch_date".to_string(), JsonValue::from(launch_date.to_string()));
    }

    properties.insert("zones".to_string(), JsonValue::from(region.zones.clone()));

    Feature {
        geometry: Some(Geometry::new(Value::Point(vec![region.longitude, region.latitude]))),
        properties: Some(properties),
        id: Some(geojson::feature::Id::String(region.code.to_string())),
        bbox: None,
        foreign_members: None,
    }
}

/// Build a FeatureCollection preserving region order
pub fn to_feature_collection(regions: &[Region]) -> FeatureCollection {
    FeatureCollection {
        features: regions.iter().map(region_feature).collect(),
        bbox: None,
        foreign_members: None,
    }
}
