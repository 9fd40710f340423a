//! Per-comparison verdicts. Transient: produced by the rule engine,
//! consumed by the scorer and record builder, then discarded.

use serde::{Deserialize, Serialize};

use super::gap::{GapType, RiskTier};

/// Confidence assigned to verdicts built from unparseable or absent data.
pub const MISSING_DATA_CONFIDENCE: f64 = 0.2;

/// Outcome of comparing one dimension against one reference device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonVerdict {
    pub dimension: String,
    pub reference_id: String,
    pub gap_detected: bool,
    pub gap_type: GapType,
    /// In [0, 1].
    pub confidence: f64,
    pub explanation: String,
    pub subject_display: String,
    pub reference_display: String,
    pub risk_tier: Option<RiskTier>,
}

impl ComparisonVerdict {
    /// A no-gap verdict.
    pub fn same(
        dimension: impl Into<String>,
        reference_id: impl Into<String>,
        confidence: f64,
        explanation: impl Into<String>,
        subject_display: impl Into<String>,
        reference_display: impl Into<String>,
    ) -> Self {
        Self {
            dimension: dimension.into(),
            reference_id: reference_id.into(),
            gap_detected: false,
            gap_type: GapType::Same,
            confidence,
            explanation: explanation.into(),
            subject_display: subject_display.into(),
            reference_display: reference_display.into(),
            risk_tier: None,
        }
    }

    /// A detected-gap verdict.
    pub fn gap(
        dimension: impl Into<String>,
        reference_id: impl Into<String>,
        gap_type: GapType,
        confidence: f64,
        explanation: impl Into<String>,
        subject_display: impl Into<String>,
        reference_display: impl Into<String>,
    ) -> Self {
        Self {
            dimension: dimension.into(),
            reference_id: reference_id.into(),
            gap_detected: true,
            gap_type,
            confidence,
            explanation: explanation.into(),
            subject_display: subject_display.into(),
            reference_display: reference_display.into(),
            risk_tier: None,
        }
    }

    /// A degraded verdict for unparseable or absent values. Low confidence,
    /// never aborts the run.
    pub fn missing_data(
        dimension: impl Into<String>,
        reference_id: impl Into<String>,
        explanation: impl Into<String>,
        subject_display: impl Into<String>,
        reference_display: impl Into<String>,
    ) -> Self {
        Self {
            dimension: dimension.into(),
            reference_id: reference_id.into(),
            gap_detected: true,
            gap_type: GapType::MissingData,
            confidence: MISSING_DATA_CONFIDENCE,
            explanation: explanation.into(),
            subject_display: subject_display.into(),
            reference_display: reference_display.into(),
            risk_tier: None,
        }
    }

    pub fn with_risk_tier(mut self, tier: RiskTier) -> Self {
        self.risk_tier = Some(tier);
        self
    }
}
