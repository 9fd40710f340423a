//! Engine request and result types.

use std::collections::BTreeMap;

use serde::Serialize;

use gapscan_core::types::{DeviceAttributeSet, FxHashMap, GapRecord};

use crate::severity::ScoringSignals;

/// One comparison run: one subject, one device category, N references.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub subject: DeviceAttributeSet,
    pub references: Vec<DeviceAttributeSet>,
    pub device_category: String,
    /// Restrict the selected template to these dimensions.
    pub dimension_override: Option<Vec<String>>,
    /// Run-wide scoring signals.
    pub signals: ScoringSignals,
    /// Per-dimension signal overrides, keyed by dimension name.
    pub signal_overrides: FxHashMap<String, ScoringSignals>,
}

impl AnalysisRequest {
    pub fn new(
        subject: DeviceAttributeSet,
        references: Vec<DeviceAttributeSet>,
        device_category: impl Into<String>,
    ) -> Self {
        Self {
            subject,
            references,
            device_category: device_category.into(),
            dimension_override: None,
            signals: ScoringSignals::default(),
            signal_overrides: FxHashMap::default(),
        }
    }

    pub fn with_signals(mut self, signals: ScoringSignals) -> Self {
        self.signals = signals;
        self
    }

    pub fn with_signal_override(
        mut self,
        dimension: impl Into<String>,
        signals: ScoringSignals,
    ) -> Self {
        self.signal_overrides.insert(dimension.into(), signals);
        self
    }

    pub fn with_dimension_override(mut self, dimensions: Vec<String>) -> Self {
        self.dimension_override = Some(dimensions);
        self
    }

    /// Signals for one dimension: the override when present, else the
    /// run-wide defaults.
    pub fn signals_for(&self, dimension: &str) -> ScoringSignals {
        self.signal_overrides
            .get(dimension)
            .copied()
            .unwrap_or(self.signals)
    }
}

/// Aggregate counts and the effort roll-up for one analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub total_gaps: usize,
    pub minor: usize,
    pub moderate: usize,
    pub major: usize,
    /// Gap counts keyed by gap-type name, deterministically ordered.
    pub by_type: BTreeMap<String, usize>,
    /// Estimated weeks of testing/documentation to close all gaps.
    pub estimated_effort_weeks: f64,
}

/// The durable result of one comparison run.
#[derive(Debug, Clone, Serialize)]
pub struct GapAnalysis {
    pub subject_id: String,
    pub device_category: String,
    /// Category of the template actually used (the default template's
    /// name when the device category was unrecognized).
    pub template_category: String,
    pub catalog_version: String,
    pub records: Vec<GapRecord>,
    pub summary: AnalysisSummary,
    /// Non-fatal degradation notes (unparseable or absent values).
    pub degraded: Vec<String>,
}
