use crate::error::{Result, WhereError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Set programmatically by the embedding application
    Override,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Override => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// How catalog loading treats records that fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValidityMode {
    /// Reject the whole catalog on the first invalid record
    Strict,
    /// Log invalid records and keep them
    #[default]
    Lenient,
}

/// Layered configuration for catalog loading
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Catalog file; `None` selects the built-in table
    pub catalog_path: ConfigValue<Option<PathBuf>>,
    /// Provider allow-list; empty keeps every provider
    pub providers: ConfigValue<Vec<String>>,
    pub include_deprecated: ConfigValue<bool>,
    pub validity: ConfigValue<ValidityMode>,
}

impl Default for LayeredConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            catalog_path: ConfigValue::new(None, ConfigSource::Default),
            providers: ConfigValue::new(Vec::new(), ConfigSource::Default),
            include_deprecated: ConfigValue::new(true, ConfigSource::Default),
            validity: ConfigValue::new(ValidityMode::Lenient, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| WhereError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| WhereError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(catalog_path) = file_config.catalog_path {
            self.catalog_path.update(Some(catalog_path), ConfigSource::File);
        }

        if let Some(providers) = file_config.providers {
            self.providers.update(normalize_providers(providers), ConfigSource::File);
        }

        if let Some(include_deprecated) = file_config.include_deprecated {
            self.include_deprecated.update(include_deprecated, ConfigSource::File);
        }

        if let Some(validity) = file_config.validity {
            self.validity.update(validity, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // GEOWHERE_CATALOG
        if let Ok(path) = env::var("GEOWHERE_CATALOG") {
            if path.trim().is_empty() {
                tracing::warn!("Ignoring empty GEOWHERE_CATALOG value");
            } else {
                self.catalog_path.update(Some(PathBuf::from(path)), ConfigSource::Environment);
            }
        }

        // GEOWHERE_PROVIDERS
        if let Ok(providers) = env::var("GEOWHERE_PROVIDERS") {
            self.providers.update(parse_provider_list(&providers), ConfigSource::Environment);
        }

        // GEOWHERE_INCLUDE_DEPRECATED
        if let Ok(flag) = env::var("GEOWHERE_INCLUDE_DEPRECATED") {
            match parse_bool(&flag) {
                Ok(include) => self.include_deprecated.update(include, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEOWHERE_INCLUDE_DEPRECATED value '{}': expected true or false",
                    flag
                ),
            }
        }

        // GEOWHERE_VALIDITY
        if let Ok(validity_str) = env::var("GEOWHERE_VALIDITY") {
            match parse_validity_mode(&validity_str) {
                Ok(validity) => self.validity.update(validity, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEOWHERE_VALIDITY value '{}': expected strict or lenient",
                    validity_str
                ),
            }
        }

        self
    }

    /// Apply programmatic overrides, which win over every other layer
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(catalog_path) = overrides.catalog_path {
            self.catalog_path.update(Some(catalog_path), ConfigSource::Override);
        }

        if let Some(providers) = overrides.providers {
            self.providers.update(normalize_providers(providers), ConfigSource::Override);
        }

        if let Some(include_deprecated) = overrides.include_deprecated {
            self.include_deprecated.update(include_deprecated, ConfigSource::Override);
        }

        if let Some(validity) = overrides.validity {
            self.validity.update(validity, ConfigSource::Override);
        }
    }

    /// Whether a provider passes the allow-list
    pub fn allows_provider(&self, provider: &str) -> bool {
        self.providers.value.is_empty()
            || self.providers.value.iter().any(|p| crate::models::eq_fold(p, provider))
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        let catalog = match &self.catalog_path.value {
            Some(path) => path.display().to_string(),
            None => "builtin".to_string(),
        };
        map.insert("catalog_path".to_string(), (catalog, self.catalog_path.source));

        let providers = if self.providers.value.is_empty() {
            "all".to_string()
        } else {
            self.providers.value.join(",")
        };
        map.insert("providers".to_string(), (providers, self.providers.source));

        map.insert(
            "include_deprecated".to_string(),
            (self.include_deprecated.value.to_string(), self.include_deprecated.source),
        );

        map.insert(
            "validity".to_string(),
            (format!("{:?}", self.validity.value), self.validity.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    catalog_path: Option<PathBuf>,
    providers: Option<Vec<String>>,
    include_deprecated: Option<bool>,
    validity: Option<ValidityMode>,
}

/// Programmatic configuration overrides
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub catalog_path: Option<PathBuf>,
    pub providers: Option<Vec<String>>,
    pub include_deprecated: Option<bool>,
    pub validity: Option<ValidityMode>,
}

/// Parse validity mode from string
pub fn parse_validity_mode(s: &str) -> Result<ValidityMode> {
    match s.to_lowercase().as_str() {
        "strict" => Ok(ValidityMode::Strict),
        "lenient" => Ok(ValidityMode::Lenient),
        _ => Err(WhereError::ConfigInvalid {
            key: "validity".to_string(),
            reason: format!("Invalid validity mode: {}. Use strict or lenient", s),
        }),
    }
}

/// Parse a comma-separated provider list, dropping blanks
pub fn parse_provider_list(s: &str) -> Vec<String> {
    normalize_providers(s.split(',').map(str::to_string).collect())
}

fn normalize_providers(providers: Vec<String>) -> Vec<String> {
    providers
        .into_iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect()
}

fn parse_bool(s: &str) -> Result<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(WhereError::ConfigInvalid {
            key: "include_deprecated".to_string(),
            reason: format!("Invalid boolean: {}", s),
        }),
    }
}
