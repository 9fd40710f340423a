//! Internal consistency checks run before a gap set is returned.
//!
//! Every defect is collected; any defect blocks emission. Recoverable
//! conditions never reach this point, so a failure here is an engine
//! bug surfacing, not bad input.

use tracing::error;

use gapscan_core::errors::{ValidationDefect, ValidationError};
use gapscan_core::types::{ComparisonVerdict, FxHashSet, GapRecord, SeverityCategory};

/// Validate the gap set and its source verdicts.
pub fn validate(
    records: &[GapRecord],
    verdicts: &[ComparisonVerdict],
) -> Result<(), ValidationError> {
    let mut defects = Vec::new();

    let mut ids = FxHashSet::default();
    for record in records {
        if !ids.insert(record.id.as_str()) {
            defects.push(ValidationDefect::new(
                Some(record.id.clone()),
                "duplicate record identifier",
            ));
        }
        if SeverityCategory::from_score(record.severity_score) != record.severity {
            defects.push(ValidationDefect::new(
                Some(record.id.clone()),
                format!(
                    "severity category {} inconsistent with score {}",
                    record.severity, record.severity_score
                ),
            ));
        }
        if record.severity == SeverityCategory::Major && record.remediation.trim().is_empty() {
            defects.push(ValidationDefect::new(
                Some(record.id.clone()),
                "major gap without remediation text",
            ));
        }
    }

    let mut pairs = FxHashSet::default();
    for verdict in verdicts {
        if !pairs.insert((verdict.dimension.as_str(), verdict.reference_id.as_str())) {
            defects.push(ValidationDefect::new(
                None,
                format!(
                    "more than one verdict for dimension '{}' against reference '{}'",
                    verdict.dimension, verdict.reference_id
                ),
            ));
        }
        if !(0.0..=1.0).contains(&verdict.confidence) {
            defects.push(ValidationDefect::new(
                None,
                format!(
                    "confidence {} out of range for dimension '{}'",
                    verdict.confidence, verdict.dimension
                ),
            ));
        }
    }

    if defects.is_empty() {
        Ok(())
    } else {
        error!(defects = defects.len(), "gap set rejected by validation");
        Err(ValidationError::new(defects))
    }
}
