//! JSON reporter: the full analysis as a machine-readable document.

use crate::engine::GapAnalysis;

use super::Reporter;

/// JSON reporter.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, analysis: &GapAnalysis) -> Result<String, String> {
        serde_json::to_string_pretty(analysis).map_err(|e| e.to_string())
    }
}
