//! Top-level gapscan configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ComparisonConfig, ReportConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Project config (`gapscan.toml` in the given root)
/// 2. Compiled defaults
///
/// A missing project file is not an error; invalid TOML in one is.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GapscanConfig {
    pub comparison: ComparisonConfig,
    pub report: ReportConfig,
}

impl GapscanConfig {
    /// Load configuration from `gapscan.toml` under `root`, falling back
    /// to compiled defaults when the file is absent.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join("gapscan.toml");
        if !path.exists() {
            tracing::debug!(root = %root.display(), "no project config, using defaults");
            return Ok(Self::default());
        }
        tracing::debug!(path = %path.display(), "loading project config");
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let config = GapscanConfig::from_toml_str("", "inline").unwrap();
        assert!((config.comparison.effective_similarity_threshold() - 0.85).abs() < f64::EPSILON);
        assert!(config.comparison.effective_parallel());
        assert_eq!(config.report.effective_format(), "console");
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let toml_str = r#"
            [comparison]
            similarity_threshold = 0.9
        "#;
        let config = GapscanConfig::from_toml_str(toml_str, "inline").unwrap();
        assert!((config.comparison.effective_similarity_threshold() - 0.9).abs() < f64::EPSILON);
        assert!(config.comparison.effective_parallel());
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let result = GapscanConfig::from_toml_str("not = [valid", "inline");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }
}
