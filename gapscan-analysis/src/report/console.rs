//! Console reporter: human-readable output with color codes.

use gapscan_core::types::SeverityCategory;

use crate::engine::GapAnalysis;

use super::Reporter;

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn color_start(&self, severity: SeverityCategory) -> &'static str {
        if !self.use_color {
            return "";
        }
        match severity {
            SeverityCategory::Major => "\x1b[31m",    // red
            SeverityCategory::Moderate => "\x1b[33m", // yellow
            SeverityCategory::Minor => "\x1b[36m",    // cyan
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, analysis: &GapAnalysis) -> Result<String, String> {
        let mut output = String::new();

        output.push_str("╔══════════════════════════════════════════╗\n");
        output.push_str("║        gapscan Comparison Report         ║\n");
        output.push_str("╚══════════════════════════════════════════╝\n\n");
        output.push_str(&format!(
            "Subject {} vs {} predicate(s), template '{}' v{}\n\n",
            analysis.subject_id,
            reference_count(analysis),
            analysis.template_category,
            analysis.catalog_version,
        ));

        for record in &analysis.records {
            let cs = self.color_start(record.severity);
            let ce = self.color_end();
            output.push_str(&format!(
                "{cs}{}{ce} [{}] {} vs {}: {} (score {})\n",
                record.severity, record.id, record.dimension, record.reference_id,
                record.gap_type, record.severity_score,
            ));
            output.push_str(&format!("    subject:   {}\n", record.subject_value));
            output.push_str(&format!("    reference: {}\n", record.reference_value));
            output.push_str(&format!("    remediation: {}\n\n", record.remediation));
        }

        for note in &analysis.degraded {
            output.push_str(&format!("  ⚠ {note}\n"));
        }
        if !analysis.degraded.is_empty() {
            output.push('\n');
        }

        output.push_str(&format!(
            "{} gap(s): {} major, {} moderate, {} minor; est. effort {:.1} weeks\n",
            analysis.summary.total_gaps,
            analysis.summary.major,
            analysis.summary.moderate,
            analysis.summary.minor,
            analysis.summary.estimated_effort_weeks,
        ));

        Ok(output)
    }
}

fn reference_count(analysis: &GapAnalysis) -> usize {
    let mut ids: Vec<&str> = analysis
        .records
        .iter()
        .map(|r| r.reference_id.as_str())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    ids.len()
}
