//! Error types for geowhere

use crate::models::Code;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WhereError {
    // Lookup errors
    #[error("region not found: {code}")]
    RegionNotFound { code: Code },

    #[error("region not found: {}", join_codes(.codes))]
    RegionsNotFound { codes: Vec<Code> },

    #[error("region not found: no region {code} for provider {provider}")]
    ProviderNotFound { code: Code, provider: String },

    #[error("{role} region not found: {code}")]
    EndpointNotFound { role: &'static str, code: Code },

    #[error("no regions found")]
    EmptySet,

    #[error("no other regions found near {code}")]
    NoOtherRegions { code: Code },

    // Catalog errors
    #[error("Invalid region {code}: {reason}")]
    InvalidRegion { code: Code, reason: String },

    #[error("Invalid status {value}: expected active, deprecated, or preview")]
    InvalidStatus { value: String },

    #[error("Failed to parse catalog: {reason}")]
    CatalogParse { reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WhereError {
    /// Whether this error means a required match was missing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            WhereError::RegionNotFound { .. }
                | WhereError::RegionsNotFound { .. }
                | WhereError::ProviderNotFound { .. }
                | WhereError::EndpointNotFound { .. }
                | WhereError::EmptySet
                | WhereError::NoOtherRegions { .. }
        )
    }
}

fn join_codes(codes: &[Code]) -> String {
    let names: Vec<&str> = codes.iter().map(Code::as_str).collect();
    format!("[{}]", names.join(", "))
}

pub type Result<T> = std::result::Result<T, WhereError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_codes_are_all_listed() {
        let err = WhereError::RegionsNotFound { codes: vec![Code::from("bogus"), Code::from("nope")] };
        assert_eq!(err.to_string(), "region not found: [bogus, nope]");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_errors_are_not_not_found() {
        let err = WhereError::CatalogParse { reason: "eof".to_string() };
        assert!(!err.is_not_found());
        assert!(WhereError::EmptySet.is_not_found());
    }
}
