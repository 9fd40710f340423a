//! Reporters: output formats for a gap analysis.
//!
//! 4 reporter formats: CSV row file, console, narrative markdown, JSON.
//! Rendering is a pure projection of the analysis; it never alters
//! classification or score.

pub mod console;
pub mod csv;
pub mod json;
pub mod narrative;

use crate::engine::GapAnalysis;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, analysis: &GapAnalysis) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "csv" => Some(Box::new(csv::CsvReporter)),
        "console" => Some(Box::new(console::ConsoleReporter::default())),
        "narrative" => Some(Box::new(narrative::NarrativeReporter)),
        "json" => Some(Box::new(json::JsonReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["csv", "console", "narrative", "json"]
}
