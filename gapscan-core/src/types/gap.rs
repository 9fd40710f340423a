//! Gap taxonomy and the durable gap record.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::dimensions::DimensionCategory;

/// Classification of a detected divergence. Closed enumeration; every
/// verdict and record carries exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapType {
    /// No divergence.
    Same,
    /// Value could not be parsed or was absent on one side.
    MissingData,
    /// Textual divergence that fits no sharper class.
    Different,
    NewIndication,
    NewClaim,
    NovelClaim,
    NewFeature,
    MissingFeature,
    QuantitativeMismatch,
    SmallerThanRange,
    LargerThanRange,
    ExtendedShelfLife,
    MissingStandard,
    RequiredStandardMissing,
    DifferentMethodology,
}

impl GapType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Same => "same",
            Self::MissingData => "missing-data",
            Self::Different => "different",
            Self::NewIndication => "new-indication",
            Self::NewClaim => "new-claim",
            Self::NovelClaim => "novel-claim",
            Self::NewFeature => "new-feature",
            Self::MissingFeature => "missing-feature",
            Self::QuantitativeMismatch => "quantitative-mismatch",
            Self::SmallerThanRange => "smaller-than-range",
            Self::LargerThanRange => "larger-than-range",
            Self::ExtendedShelfLife => "extended-shelf-life",
            Self::MissingStandard => "missing-standard",
            Self::RequiredStandardMissing => "required-standard-missing",
            Self::DifferentMethodology => "different-methodology",
        }
    }

    pub fn all() -> &'static [GapType] {
        &[
            Self::Same,
            Self::MissingData,
            Self::Different,
            Self::NewIndication,
            Self::NewClaim,
            Self::NovelClaim,
            Self::NewFeature,
            Self::MissingFeature,
            Self::QuantitativeMismatch,
            Self::SmallerThanRange,
            Self::LargerThanRange,
            Self::ExtendedShelfLife,
            Self::MissingStandard,
            Self::RequiredStandardMissing,
            Self::DifferentMethodology,
        ]
    }
}

impl fmt::Display for GapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity band derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityCategory {
    Minor,
    Moderate,
    Major,
}

impl SeverityCategory {
    /// The single source of the score-to-band mapping: 0-30 minor,
    /// 31-70 moderate, 71-100 major. Validation re-checks every record
    /// against this function.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=30 => Self::Minor,
            31..=70 => Self::Moderate,
            _ => Self::Major,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Major => "major",
        }
    }
}

impl fmt::Display for SeverityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk tier attached by the feature-parity and novel-claim comparators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How strongly a consensus standard is expected for a dimension category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardCriticality {
    Optional,
    Required,
    Critical,
}

impl StandardCriticality {
    /// Fixed lookup by dimension category.
    pub fn for_category(category: DimensionCategory) -> Self {
        match category {
            DimensionCategory::Sterilization
            | DimensionCategory::Biocompatibility
            | DimensionCategory::Electrical => Self::Critical,
            DimensionCategory::Performance
            | DimensionCategory::Mechanical
            | DimensionCategory::Software
            | DimensionCategory::Standards => Self::Required,
            _ => Self::Optional,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Optional => "optional",
            Self::Required => "required",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for StandardCriticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a gap record. The engine always emits `Open`;
/// later transitions belong to external trackers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapStatus {
    Open,
    InReview,
    Resolved,
    Accepted,
}

impl GapStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InReview => "in_review",
            Self::Resolved => "resolved",
            Self::Accepted => "accepted",
        }
    }
}

impl fmt::Display for GapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable output unit of one comparison run. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapRecord {
    /// Generated identifier, unique within the run ("GAP-0001" style).
    pub id: String,
    pub dimension: String,
    pub category: DimensionCategory,
    pub subject_value: String,
    pub reference_id: String,
    pub reference_value: String,
    pub gap_type: GapType,
    /// Clamped 0-100.
    pub severity_score: u8,
    pub severity: SeverityCategory,
    pub regulatory_risk: String,
    pub remediation: String,
    pub status: GapStatus,
    /// Unix timestamp (seconds).
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_band_boundaries() {
        assert_eq!(SeverityCategory::from_score(0), SeverityCategory::Minor);
        assert_eq!(SeverityCategory::from_score(30), SeverityCategory::Minor);
        assert_eq!(SeverityCategory::from_score(31), SeverityCategory::Moderate);
        assert_eq!(SeverityCategory::from_score(70), SeverityCategory::Moderate);
        assert_eq!(SeverityCategory::from_score(71), SeverityCategory::Major);
        assert_eq!(SeverityCategory::from_score(100), SeverityCategory::Major);
    }

    #[test]
    fn gap_type_listing_is_closed() {
        assert_eq!(GapType::all().len(), 15);
        for gap_type in GapType::all() {
            assert!(!gap_type.as_str().is_empty());
        }
    }
}
