//! Error handling for gapscan.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod pipeline_error;
pub mod validation_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::GapscanErrorCode;
pub use pipeline_error::PipelineError;
pub use validation_error::{ValidationDefect, ValidationError};
