//! Pipeline errors.

use super::error_code::{self, GapscanErrorCode};
use super::{CatalogError, ConfigError, ValidationError};

/// Errors that can surface from a full analysis run.
/// Aggregates subsystem errors via `From` conversions. Input defects and
/// comparator degradation recover locally and never reach this enum; only
/// catalog/config load failures and validation failures do.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl GapscanErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Validation(e) => e.error_code(),
        }
    }
}
