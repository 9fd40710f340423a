//! Template catalog errors.

use super::error_code::{self, GapscanErrorCode};

/// Errors that can occur while loading or compiling the dimension catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid catalog TOML: {0}")]
    Parse(String),

    #[error("Failed to read catalog file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Unknown dimension category '{name}' in template '{template}'")]
    UnknownCategory { template: String, name: String },

    #[error("Unknown comparator '{name}' in template '{template}'")]
    UnknownComparator { template: String, name: String },

    #[error("Duplicate dimension '{name}' in template '{template}'")]
    DuplicateDimension { template: String, name: String },

    #[error("Template '{0}' defines no dimensions")]
    EmptyTemplate(String),

    #[error("Catalog has no 'default' template to fall back to")]
    MissingDefault,
}

impl GapscanErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
