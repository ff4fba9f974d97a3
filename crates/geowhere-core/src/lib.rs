//! geowhere Core - Region model, collection algebra, and configuration
//!
//! This crate contains the domain types, the great-circle distance function,
//! and the catalog port consumed by the query engine.

pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod ports;

pub use error::{Result, WhereError};
pub use models::{Code, Region, RegionSet, Status};
pub use ports::Catalog;
