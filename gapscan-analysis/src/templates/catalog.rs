//! Catalog loading and compilation.
//!
//! The shipped catalog is embedded at compile time; alternate catalogs can
//! be loaded from a TOML string or file without recompiling.

use tracing::debug;

use gapscan_core::errors::CatalogError;
use gapscan_core::types::{
    ComparatorKind, DimensionCategory, DimensionDefinition, DimensionTemplate, FxHashMap,
    FxHashSet,
};

use super::types::{
    Augmentation, RegulatoryProfile, TomlAugmentationDef, TomlCatalogFile, TomlDimensionDef,
};
use crate::comparators::normalize;

/// The dimension catalog shipped with the crate.
const EMBEDDED_CATALOG: &str = include_str!("catalog.toml");

/// Compiled dimension catalog: per-category templates, conditional
/// augmentation groups, and regulatory profiles. Loaded once, shared
/// read-only for the lifetime of the engine.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    version: String,
    templates: FxHashMap<String, DimensionTemplate>,
    augmentations: Vec<Augmentation>,
    profiles: FxHashMap<String, RegulatoryProfile>,
}

impl TemplateCatalog {
    /// Load the embedded catalog.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::load_from_str(EMBEDDED_CATALOG)
    }

    /// Load a catalog from a TOML string.
    pub fn load_from_str(toml_str: &str) -> Result<Self, CatalogError> {
        let file: TomlCatalogFile =
            toml::from_str(toml_str).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::compile(file)
    }

    /// Load a catalog from a file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::load_from_str(&content)
    }

    /// Compile raw definitions into validated immutable structures.
    fn compile(file: TomlCatalogFile) -> Result<Self, CatalogError> {
        let mut templates = FxHashMap::default();
        for def in &file.templates {
            if def.dimensions.is_empty() {
                return Err(CatalogError::EmptyTemplate(def.category.clone()));
            }
            let mut seen = FxHashSet::default();
            let mut dimensions = Vec::with_capacity(def.dimensions.len());
            for dim in &def.dimensions {
                if !seen.insert(dim.name.clone()) {
                    return Err(CatalogError::DuplicateDimension {
                        template: def.category.clone(),
                        name: dim.name.clone(),
                    });
                }
                dimensions.push(compile_dimension(&def.category, dim)?);
            }
            templates.insert(
                def.category.clone(),
                DimensionTemplate {
                    category: def.category.clone(),
                    version: file.version.clone(),
                    dimensions,
                },
            );
        }

        if !templates.contains_key("default") {
            return Err(CatalogError::MissingDefault);
        }

        let mut augmentations = Vec::with_capacity(file.augmentations.len());
        for def in &file.augmentations {
            augmentations.push(compile_augmentation(def)?);
        }

        let mut profiles = FxHashMap::default();
        for def in &file.profiles {
            profiles.insert(
                def.category.clone(),
                RegulatoryProfile {
                    category: def.category.clone(),
                    mandated_standards: def.mandated_standards.clone(),
                },
            );
        }

        debug!(
            templates = templates.len(),
            augmentations = augmentations.len(),
            profiles = profiles.len(),
            version = %file.version,
            "catalog compiled"
        );

        Ok(Self {
            version: file.version,
            templates,
            augmentations,
            profiles,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn template(&self, category: &str) -> Option<&DimensionTemplate> {
        self.templates.get(category)
    }

    /// The fallback template for unrecognized categories. Compilation
    /// guarantees it exists.
    pub fn default_template(&self) -> &DimensionTemplate {
        &self.templates["default"]
    }

    pub fn augmentations(&self) -> &[Augmentation] {
        &self.augmentations
    }

    pub fn profile(&self, category: &str) -> Option<&RegulatoryProfile> {
        self.profiles.get(category)
    }

    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn compile_dimension(
    template: &str,
    def: &TomlDimensionDef,
) -> Result<DimensionDefinition, CatalogError> {
    let category =
        DimensionCategory::parse_str(&def.category).ok_or_else(|| CatalogError::UnknownCategory {
            template: template.to_string(),
            name: def.category.clone(),
        })?;
    let comparator = ComparatorKind::parse_str(&def.comparator).ok_or_else(|| {
        CatalogError::UnknownComparator {
            template: template.to_string(),
            name: def.comparator.clone(),
        }
    })?;
    Ok(DimensionDefinition {
        name: def.name.clone(),
        category,
        comparator,
        unit: def.unit.clone(),
        tolerance_pct: def.tolerance_pct,
        critical: def.critical,
    })
}

fn compile_augmentation(def: &TomlAugmentationDef) -> Result<Augmentation, CatalogError> {
    let mut dimensions = Vec::with_capacity(def.dimensions.len());
    for dim in &def.dimensions {
        dimensions.push(compile_dimension(&def.id, dim)?);
    }
    Ok(Augmentation {
        id: def.id.clone(),
        keywords: def.keywords.iter().map(|k| normalize::normalize(k)).collect(),
        anchor: def.anchor.clone(),
        dimensions,
    })
}
