//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! Overrides > Environment variables > Config file > Defaults

use geowhere_core::config::{ConfigOverrides, ConfigSource, LayeredConfig, ValidityMode};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

const ENV_VARS: [&str; 4] = [
    "GEOWHERE_CATALOG",
    "GEOWHERE_PROVIDERS",
    "GEOWHERE_INCLUDE_DEPRECATED",
    "GEOWHERE_VALIDITY",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_partial_file_configuration() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
include_deprecated = false
# Only override the deprecated filter, leave others as defaults
"#
    )
    .unwrap();

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

    assert!(!config.include_deprecated.value);
    assert_eq!(config.include_deprecated.source, ConfigSource::File);
    // These should still be defaults
    assert_eq!(config.catalog_path.value, None);
    assert_eq!(config.catalog_path.source, ConfigSource::Default);
    assert_eq!(config.validity.source, ConfigSource::Default);
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();

    env::set_var("GEOWHERE_CATALOG", "/env/regions.toml");
    env::set_var("GEOWHERE_PROVIDERS", "aws,Azure");
    env::set_var("GEOWHERE_VALIDITY", "strict");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
catalog_path = "/file/regions.json"
providers = ["gcp"]
validity = "Lenient"
"#
    )
    .unwrap();

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();

    assert_eq!(config.catalog_path.value, Some(PathBuf::from("/env/regions.toml")));
    assert_eq!(config.catalog_path.source, ConfigSource::Environment);
    assert_eq!(config.providers.value, vec!["aws", "azure"]);
    assert_eq!(config.providers.source, ConfigSource::Environment);
    assert_eq!(config.validity.value, ValidityMode::Strict);
    assert_eq!(config.validity.source, ConfigSource::Environment);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_environment_values_are_ignored() {
    clear_env();

    env::set_var("GEOWHERE_INCLUDE_DEPRECATED", "sometimes");
    env::set_var("GEOWHERE_VALIDITY", "pedantic");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert!(config.include_deprecated.value);
    assert_eq!(config.include_deprecated.source, ConfigSource::Default);
    assert_eq!(config.validity.value, ValidityMode::Lenient);
    assert_eq!(config.validity.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_full_configuration_workflow() {
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("geowhere.toml");
    fs::write(
        &config_path,
        r#"
catalog_path = "regions.json"
providers = ["aws", "gcp"]
include_deprecated = false
validity = "Strict"
"#,
    )
    .unwrap();

    env::set_var("GEOWHERE_INCLUDE_DEPRECATED", "true");

    let mut config =
        LayeredConfig::with_defaults().load_from_file(&config_path).unwrap().load_from_env();

    assert_eq!(config.catalog_path.value, Some(PathBuf::from("regions.json")));
    assert_eq!(config.catalog_path.source, ConfigSource::File);
    assert!(config.include_deprecated.value);
    assert_eq!(config.include_deprecated.source, ConfigSource::Environment);
    assert_eq!(config.validity.value, ValidityMode::Strict);

    config.apply_overrides(ConfigOverrides {
        providers: Some(vec!["alibaba".to_string()]),
        include_deprecated: Some(false),
        ..Default::default()
    });

    assert_eq!(config.providers.value, vec!["alibaba"]);
    assert_eq!(config.providers.source, ConfigSource::Override);
    assert!(!config.include_deprecated.value);
    assert_eq!(config.include_deprecated.source, ConfigSource::Override);
    // Still from file
    assert_eq!(config.catalog_path.source, ConfigSource::File);

    let inspection_map = config.to_inspection_map();
    assert_eq!(inspection_map["providers"], ("alibaba".to_string(), ConfigSource::Override));
    assert_eq!(inspection_map["catalog_path"].0, "regions.json");

    clear_env();
}

#[test]
fn test_invalid_toml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "invalid toml content [[[").unwrap();

    let result = LayeredConfig::with_defaults().load_from_file(file.path());

    assert!(result.is_err());
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let non_existent = temp_dir.path().join("does_not_exist.toml");

    let result = LayeredConfig::with_defaults().load_from_file(&non_existent);

    assert!(result.is_err());
}
