//! GapscanErrorCode trait for structured error reporting.

/// Trait for attaching a stable code to gapscan errors.
/// Every error enum implements this so callers embedding the engine can
/// branch on a structured code instead of parsing messages.
pub trait GapscanErrorCode {
    /// Returns the error code string (e.g., "CATALOG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const PIPELINE_ERROR: &str = "PIPELINE_ERROR";
