//! Comparison configuration.

use serde::{Deserialize, Serialize};

use crate::types::DimensionCategory;

/// Configuration for the comparison rule engine.
///
/// Severity band thresholds, the burden scale, and the precedent cap are
/// fixed invariants of the scorer and deliberately not configurable.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Normalized similarity ratio at or above which two texts are
    /// considered equivalent. Default: 0.85.
    pub similarity_threshold: Option<f64>,
    /// Evaluate dimension/reference pairs on parallel workers. Default: true.
    pub parallel: Option<bool>,
    /// Per-category tolerance overrides (percent) for the quantitative
    /// comparator, keyed by category name.
    #[serde(default)]
    pub tolerance_overrides: std::collections::HashMap<String, f64>,
}

impl ComparisonConfig {
    /// Returns the effective similarity threshold, defaulting to 0.85.
    pub fn effective_similarity_threshold(&self) -> f64 {
        self.similarity_threshold.unwrap_or(0.85)
    }

    /// Returns whether parallel evaluation is enabled, defaulting to true.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    /// Configured tolerance override for a category, if any.
    pub fn tolerance_for(&self, category: DimensionCategory) -> Option<f64> {
        self.tolerance_overrides.get(category.as_str()).copied()
    }
}
