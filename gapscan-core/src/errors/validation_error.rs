//! Validation errors. The only fatal failure class in the engine: a gap
//! set that fails its consistency checks is rejected, never emitted.

use serde::Serialize;

use super::error_code::{self, GapscanErrorCode};

/// A single invariant defect found during validation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDefect {
    /// The offending record id, when the defect is tied to one record.
    pub record_id: Option<String>,
    pub message: String,
}

impl ValidationDefect {
    pub fn new(record_id: Option<String>, message: impl Into<String>) -> Self {
        Self {
            record_id,
            message: message.into(),
        }
    }
}

/// Internal consistency check failure. Carries every defect found so the
/// caller sees the full picture, not just the first problem.
#[derive(Debug, thiserror::Error)]
#[error("gap analysis could not be completed: internal consistency check failed ({} defect(s))", .defects.len())]
pub struct ValidationError {
    pub defects: Vec<ValidationDefect>,
}

impl ValidationError {
    pub fn new(defects: Vec<ValidationDefect>) -> Self {
        Self { defects }
    }
}

impl GapscanErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
