//! Core types, errors, config, and tracing for the gapscan comparison engine.
//!
//! gapscan compares a subject device's attribute set against one or more
//! predicate devices across an ordered dimension taxonomy and emits
//! severity-scored gap records. This crate holds everything the analysis
//! crate builds on: the data model, per-subsystem error enums, TOML
//! configuration, and tracing setup.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::GapscanConfig;
pub use errors::{CatalogError, ConfigError, PipelineError, ValidationError};
pub use types::{
    AttributeValue, ComparatorKind, ComparisonVerdict, DeviceAttributeSet, DimensionCategory,
    DimensionDefinition, DimensionTemplate, GapRecord, GapStatus, GapType, RiskTier,
    SeverityCategory, StandardCriticality,
};
