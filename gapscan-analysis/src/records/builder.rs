//! Gap record construction from scored verdicts.

use std::time::{SystemTime, UNIX_EPOCH};

use gapscan_core::types::{
    ComparisonVerdict, DimensionCategory, GapRecord, GapStatus, GapType, StandardCriticality,
};

use super::remediation::remediation_for;
use crate::severity::{score, ScoringSignals};

/// Current unix timestamp in seconds.
pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Build gap records from deterministically ordered non-Same verdicts.
///
/// `signals_for` resolves the scoring signals for a dimension (per-run
/// defaults with per-dimension overrides). Identifiers are sequential in
/// input order, so ordering verdicts first keeps output deterministic.
pub fn build_records(
    verdicts: &[(&ComparisonVerdict, DimensionCategory)],
    signals_for: impl Fn(&str) -> ScoringSignals,
    created_at: i64,
) -> Vec<GapRecord> {
    let mut records = Vec::new();
    for (verdict, category) in verdicts {
        if !verdict.gap_detected {
            continue;
        }
        let signals = signals_for(&verdict.dimension);
        let (severity_score, severity) = score(verdict, &signals);
        records.push(GapRecord {
            id: format!("GAP-{:04}", records.len() + 1),
            dimension: verdict.dimension.clone(),
            category: *category,
            subject_value: verdict.subject_display.clone(),
            reference_id: verdict.reference_id.clone(),
            reference_value: verdict.reference_display.clone(),
            gap_type: verdict.gap_type,
            severity_score,
            severity,
            regulatory_risk: risk_note(verdict, *category),
            remediation: remediation_for(verdict.gap_type).to_string(),
            status: GapStatus::Open,
            created_at,
        });
    }
    records
}

/// Compose the regulatory-risk note from the verdict and its context.
fn risk_note(verdict: &ComparisonVerdict, category: DimensionCategory) -> String {
    let mut note = format!("{} gap in the {} category", verdict.gap_type, category);
    if let Some(tier) = verdict.risk_tier {
        note.push_str(&format!(", {tier} risk tier"));
    }
    if matches!(
        verdict.gap_type,
        GapType::MissingStandard | GapType::RequiredStandardMissing
    ) {
        let criticality = StandardCriticality::for_category(category);
        note.push_str(&format!(", standard criticality {criticality}"));
    }
    note.push_str(&format!("; {}", verdict.explanation));
    note
}
