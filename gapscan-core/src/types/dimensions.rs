//! Dimension definitions and templates.
//!
//! A template is an ordered, immutable catalog of the dimensions compared
//! for one device category. Templates are static configuration compiled
//! from the TOML catalog, loaded once and shared read-only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Engineering/regulatory category of a dimension.
///
/// Drives the quantitative tolerance lookup and the standard criticality
/// lookup, and tells the textual comparator which gap class applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DimensionCategory {
    Indications,
    Technological,
    Performance,
    Materials,
    Sterilization,
    Biocompatibility,
    Electrical,
    Mechanical,
    Software,
    ShelfLife,
    Standards,
    Labeling,
}

impl DimensionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Indications => "indications",
            Self::Technological => "technological",
            Self::Performance => "performance",
            Self::Materials => "materials",
            Self::Sterilization => "sterilization",
            Self::Biocompatibility => "biocompatibility",
            Self::Electrical => "electrical",
            Self::Mechanical => "mechanical",
            Self::Software => "software",
            Self::ShelfLife => "shelf-life",
            Self::Standards => "standards",
            Self::Labeling => "labeling",
        }
    }

    /// Parse a catalog category name. Returns `None` for unknown names so
    /// the catalog loader can report them as load errors.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "indications" => Some(Self::Indications),
            "technological" => Some(Self::Technological),
            "performance" => Some(Self::Performance),
            "materials" => Some(Self::Materials),
            "sterilization" => Some(Self::Sterilization),
            "biocompatibility" => Some(Self::Biocompatibility),
            "electrical" => Some(Self::Electrical),
            "mechanical" => Some(Self::Mechanical),
            "software" => Some(Self::Software),
            "shelf-life" => Some(Self::ShelfLife),
            "standards" => Some(Self::Standards),
            "labeling" => Some(Self::Labeling),
            _ => None,
        }
    }
}

impl fmt::Display for DimensionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The comparator family a dimension is evaluated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComparatorKind {
    Textual,
    FeatureSet,
    Quantitative,
    StandardsList,
    NovelClaim,
}

impl ComparatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Textual => "textual",
            Self::FeatureSet => "feature-set",
            Self::Quantitative => "quantitative",
            Self::StandardsList => "standards-list",
            Self::NovelClaim => "novel-claim",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "textual" => Some(Self::Textual),
            "feature-set" => Some(Self::FeatureSet),
            "quantitative" => Some(Self::Quantitative),
            "standards-list" => Some(Self::StandardsList),
            "novel-claim" => Some(Self::NovelClaim),
            _ => None,
        }
    }
}

impl fmt::Display for ComparatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dimension of the comparison taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionDefinition {
    pub name: String,
    pub category: DimensionCategory,
    pub comparator: ComparatorKind,
    /// Expected unit, informational only.
    pub unit: Option<String>,
    /// Per-dimension tolerance override (percent) for the quantitative
    /// comparator. Wins over config and category defaults.
    pub tolerance_pct: Option<f64>,
    /// Critical dimensions escalate missing-feature findings.
    pub critical: bool,
}

/// An ordered, immutable dimension list for one device category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionTemplate {
    pub category: String,
    pub version: String,
    pub dimensions: Vec<DimensionDefinition>,
}

impl DimensionTemplate {
    pub fn dimension(&self, name: &str) -> Option<&DimensionDefinition> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}
