//! Catalog loading
//!
//! Records come either from the table embedded at compile time or from a
//! catalog file. JSON files hold `{ "regions": [...] }`, TOML files hold
//! `[[regions]]` tables; the format is picked by file extension.

use geowhere_core::config::{LayeredConfig, ValidityMode};
use geowhere_core::error::{Result, WhereError};
use geowhere_core::{Region, Status};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::memory::MemoryCatalog;
use crate::validation::validate_region;

/// Built-in region table
pub const BUILTIN_CATALOG: &str = include_str!("../data/regions.json");

/// On-disk catalog document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub regions: Vec<Region>,
}

/// Parse a JSON catalog document
pub fn parse_json(content: &str) -> Result<Vec<Region>> {
    let file: CatalogFile = serde_json::from_str(content).map_err(|e| {
        WhereError::CatalogParse { reason: format!("Failed to parse JSON: {}", e) }
    })?;
    Ok(file.regions)
}

/// Parse a TOML catalog document
pub fn parse_toml(content: &str) -> Result<Vec<Region>> {
    let file: CatalogFile = toml::from_str(content).map_err(|e| {
        WhereError::CatalogParse { reason: format!("Failed to parse TOML: {}", e) }
    })?;
    Ok(file.regions)
}

/// Read catalog records from a file
pub fn read_catalog_file<P: AsRef<Path>>(path: P) -> Result<Vec<Region>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        parse_toml(&content)
    } else {
        parse_json(&content)
    }
}

/// Records of the built-in table, unfiltered
pub fn builtin_regions() -> Result<Vec<Region>> {
    parse_json(BUILTIN_CATALOG)
}

/// Load a catalog according to the configuration
pub fn load_catalog(config: &LayeredConfig) -> Result<MemoryCatalog> {
    let (source, records) = match &config.catalog_path.value {
        Some(path) => (path.display().to_string(), read_catalog_file(path)?),
        None => ("builtin".to_string(), builtin_regions()?),
    };

    let catalog = build_catalog(records, config)?;

    tracing::info!(
        source = %source,
        regions = catalog.len(),
        codes = catalog.code_count(),
        "Loaded region catalog"
    );

    Ok(catalog)
}

/// Validate and filter records, then index them
pub fn build_catalog(records: Vec<Region>, config: &LayeredConfig) -> Result<MemoryCatalog> {
    let total = records.len();
    let mut kept = Vec::with_capacity(total);

    for region in records {
        let validation = validate_region(&region);
        if !validation.is_valid {
            match config.validity.value {
                ValidityMode::Strict => {
                    return Err(WhereError::InvalidRegion {
                        code: region.code.clone(),
                        reason: validation.summary(),
                    });
                }
                ValidityMode::Lenient => {
                    tracing::warn!(
                        code = %region.code,
                        provider = %region.provider,
                        "Invalid region record: {}",
                        validation.summary()
                    );
                }
            }
        }

        if !config.allows_provider(&region.provider) {
            continue;
        }

        if !config.include_deprecated.value && region.status == Status::Deprecated {
            continue;
        }

        kept.push(region);
    }

    tracing::debug!(total, kept = kept.len(), "Filtered catalog records");

    Ok(MemoryCatalog::from_regions(kept))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geowhere_core::config::{ConfigOverrides, LayeredConfig};
    use geowhere_core::{Catalog, Code};

    fn region(code: &str, provider: &str, status: Status) -> Region {
        Region { code: Code::from(code), provider: provider.to_string(), status, ..Default::default() }
    }

    fn config_with(overrides: ConfigOverrides) -> LayeredConfig {
        let mut config = LayeredConfig::with_defaults();
        config.apply_overrides(overrides);
        config
    }

    #[test]
    fn test_builtin_table_parses() {
        let regions = builtin_regions().unwrap();
        assert!(regions.len() > 50);
        assert!(regions.iter().all(|r| validate_region(r).is_valid));
        assert!(regions.iter().any(|r| r.status == Status::Preview));
        assert!(regions.iter().any(|r| r.status == Status::Deprecated));
    }

    #[test]
    fn test_parse_json_contract() {
        let json = r#"{
            "regions": [{
                "code": "eu-west-1",
                "name": "Europe (Ireland)",
                "provider": "aws",
                "country": "Ireland",
                "city": "Dublin",
                "continent": "Europe",
                "latitude": 53.3498,
                "longitude": -6.2603,
                "status": "preview",
                "launch_date": "2007-12-10"
            }]
        }"#;

        let regions = parse_json(json).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].status, Status::Preview);
        assert!(regions[0].zones.is_empty());
        assert_eq!(regions[0].launch_date.unwrap().to_string(), "2007-12-10");
    }

    #[test]
    fn test_parse_json_rejects_unknown_status() {
        let json = r#"{ "regions": [{ "code": "x", "name": "", "provider": "aws",
            "country": "", "city": "", "continent": "", "latitude": 0.0,
            "longitude": 0.0, "status": "retired" }] }"#;

        let err = parse_json(json).unwrap_err();
        assert!(matches!(err, WhereError::CatalogParse { .. }));
    }

    #[test]
    fn test_parse_toml() {
        let content = r#"
[[regions]]
code = "ru-central1"
name = "Russia Central"
provider = "yandex"
country = "Russia"
city = "Moscow"
continent = "Europe"
latitude = 55.7558
longitude = 37.6173
status = "active"
zones = ["ru-central1-a", "ru-central1-b"]
"#;

        let regions = parse_toml(content).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].zones, vec!["ru-central1-a", "ru-central1-b"]);
        assert_eq!(regions[0].launch_date, None);
    }

    #[test]
    fn test_provider_allow_list() {
        let config = config_with(ConfigOverrides {
            providers: Some(vec!["AWS".to_string()]),
            ..Default::default()
        });

        let catalog = build_catalog(
            vec![region("a", "aws", Status::Active), region("b", "gcp", Status::Active)],
            &config,
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("a"));
    }

    #[test]
    fn test_exclude_deprecated() {
        let config = config_with(ConfigOverrides {
            include_deprecated: Some(false),
            ..Default::default()
        });

        let catalog = build_catalog(
            vec![region("a", "aws", Status::Deprecated), region("b", "aws", Status::Preview)],
            &config,
        )
        .unwrap();

        assert!(!catalog.contains("a"));
        assert!(catalog.contains("b"));
    }

    #[test]
    fn test_strict_mode_rejects_invalid_record() {
        let config = config_with(ConfigOverrides {
            validity: Some(ValidityMode::Strict),
            ..Default::default()
        });

        let mut bad = region("bad", "aws", Status::Active);
        bad.latitude = 120.0;

        let err = build_catalog(vec![region("ok", "aws", Status::Active), bad], &config)
            .unwrap_err();

        match err {
            WhereError::InvalidRegion { code, reason } => {
                assert_eq!(code.as_str(), "bad");
                assert!(reason.contains("latitude"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lenient_mode_keeps_invalid_record() {
        let mut bad = region("bad", "aws", Status::Active);
        bad.longitude = f64::INFINITY;

        let catalog = build_catalog(vec![bad], &LayeredConfig::with_defaults()).unwrap();
        assert!(catalog.contains("bad"));
    }
}
