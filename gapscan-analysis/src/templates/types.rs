//! Raw catalog definitions and their compiled forms.
//!
//! The TOML layer stays stringly-typed so catalogs can be authored without
//! recompiling; compilation validates every name against the closed enums
//! and rejects bad catalogs at load time.

use serde::{Deserialize, Serialize};

use gapscan_core::types::DimensionDefinition;

/// A TOML-defined dimension entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlDimensionDef {
    pub name: String,
    pub category: String,
    pub comparator: String,
    pub unit: Option<String>,
    pub tolerance_pct: Option<f64>,
    #[serde(default)]
    pub critical: bool,
}

/// A TOML-defined template for one device category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlTemplateDef {
    pub category: String,
    #[serde(default)]
    pub dimensions: Vec<TomlDimensionDef>,
}

/// A TOML-defined conditional augmentation group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlAugmentationDef {
    pub id: String,
    pub keywords: Vec<String>,
    pub anchor: String,
    #[serde(default)]
    pub dimensions: Vec<TomlDimensionDef>,
}

/// A TOML-defined regulatory profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlProfileDef {
    pub category: String,
    #[serde(default)]
    pub mandated_standards: Vec<String>,
}

/// The whole catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlCatalogFile {
    pub version: String,
    #[serde(default)]
    pub templates: Vec<TomlTemplateDef>,
    #[serde(default)]
    pub augmentations: Vec<TomlAugmentationDef>,
    #[serde(default)]
    pub profiles: Vec<TomlProfileDef>,
}

/// A compiled augmentation group, ready for trigger matching.
#[derive(Debug, Clone)]
pub struct Augmentation {
    pub id: String,
    /// Normalized trigger keywords, matched as substrings of the
    /// subject's normalized attribute text.
    pub keywords: Vec<String>,
    /// Dimension the group is inserted after; appended when absent.
    pub anchor: String,
    pub dimensions: Vec<DimensionDefinition>,
}

/// Standards mandated for a device category.
#[derive(Debug, Clone)]
pub struct RegulatoryProfile {
    pub category: String,
    pub mandated_standards: Vec<String>,
}
