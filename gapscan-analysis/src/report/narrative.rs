//! Narrative reporter: markdown summary grouped by severity with counts
//! and the estimated-effort roll-up.

use gapscan_core::types::{GapRecord, SeverityCategory};

use crate::engine::GapAnalysis;
use crate::records::effort_weeks;

use super::Reporter;

/// Narrative markdown reporter.
pub struct NarrativeReporter;

impl Reporter for NarrativeReporter {
    fn name(&self) -> &'static str {
        "narrative"
    }

    fn generate(&self, analysis: &GapAnalysis) -> Result<String, String> {
        let mut out = String::new();
        out.push_str(&format!(
            "# Gap Analysis: {}\n\n",
            analysis.subject_id
        ));
        out.push_str(&format!(
            "Device category `{}`, compared with template `{}` (catalog v{}).\n\n",
            analysis.device_category, analysis.template_category, analysis.catalog_version,
        ));
        out.push_str(&format!(
            "**{} gap(s) identified**: {} major, {} moderate, {} minor. \
             Estimated effort to close: **{:.1} weeks**.\n\n",
            analysis.summary.total_gaps,
            analysis.summary.major,
            analysis.summary.moderate,
            analysis.summary.minor,
            analysis.summary.estimated_effort_weeks,
        ));

        for severity in [
            SeverityCategory::Major,
            SeverityCategory::Moderate,
            SeverityCategory::Minor,
        ] {
            let group: Vec<&GapRecord> = analysis
                .records
                .iter()
                .filter(|r| r.severity == severity)
                .collect();
            if group.is_empty() {
                continue;
            }
            out.push_str(&format!(
                "## {} ({})\n\n",
                heading(severity),
                group.len()
            ));
            for record in group {
                out.push_str(&format!(
                    "- **{}** ({}, vs {}): {} gap, score {}. {}\n",
                    record.dimension,
                    record.id,
                    record.reference_id,
                    record.gap_type,
                    record.severity_score,
                    record.regulatory_risk,
                ));
                out.push_str(&format!(
                    "  - Recommended action: {} (~{:.0} weeks)\n",
                    record.remediation,
                    effort_weeks(record.gap_type),
                ));
            }
            out.push('\n');
        }

        if !analysis.summary.by_type.is_empty() {
            out.push_str("## Gap counts by type\n\n");
            for (gap_type, count) in &analysis.summary.by_type {
                out.push_str(&format!("- {gap_type}: {count}\n"));
            }
            out.push('\n');
        }

        if !analysis.degraded.is_empty() {
            out.push_str("## Data quality notes\n\n");
            for note in &analysis.degraded {
                out.push_str(&format!("- {note}\n"));
            }
            out.push('\n');
        }

        Ok(out)
    }
}

fn heading(severity: SeverityCategory) -> &'static str {
    match severity {
        SeverityCategory::Major => "Major gaps",
        SeverityCategory::Moderate => "Moderate gaps",
        SeverityCategory::Minor => "Minor gaps",
    }
}
