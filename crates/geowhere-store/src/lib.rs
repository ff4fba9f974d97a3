//! geowhere Store - Region catalog adapters
//!
//! This crate provides the in-memory catalog, catalog loading from the
//! built-in table or from files, record validation, and the per-provider
//! region code constants.

pub mod loader;
pub mod memory;
pub mod providers;
pub mod validation;

pub use loader::{load_catalog, read_catalog_file, CatalogFile};
pub use memory::MemoryCatalog;
pub use validation::{validate_region, ValidationError, ValidationResult};
