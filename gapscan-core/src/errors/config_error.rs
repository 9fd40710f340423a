//! Configuration errors.

use super::error_code::{self, GapscanErrorCode};

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Failed to read config {path}: {message}")]
    Io { path: String, message: String },
}

impl GapscanErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
