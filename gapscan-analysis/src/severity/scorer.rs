//! The severity scorer. Deterministic, side-effect-free.

use serde::{Deserialize, Serialize};

use gapscan_core::types::{ComparisonVerdict, GapType, SeverityCategory};

use super::base_risk::base_risk;

/// Each burden point adds this many score points (0-10 scales to 0-40).
pub const BURDEN_SCALE: u8 = 4;

/// Strong precedent reduces the score by up to this many points.
pub const MAX_PRECEDENT_REDUCTION: f64 = 30.0;

/// External scoring signals: the estimated testing burden of closing a
/// gap and how well-established the divergence is across prior
/// clearances. Both are opaque inputs; their derivation is the caller's
/// concern.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct ScoringSignals {
    /// 0-10; values above 10 are clamped.
    pub testing_burden: u8,
    /// 0.0-1.0; out-of-range values are clamped.
    pub precedent_strength: f64,
}

impl ScoringSignals {
    pub fn new(testing_burden: u8, precedent_strength: f64) -> Self {
        Self {
            testing_burden,
            precedent_strength,
        }
    }
}

/// Score one verdict. Same always scores 0/Minor. Mandated-standard gaps
/// skip the precedent reduction so they always land in the Major band.
pub fn score(verdict: &ComparisonVerdict, signals: &ScoringSignals) -> (u8, SeverityCategory) {
    if verdict.gap_type == GapType::Same {
        return (0, SeverityCategory::Minor);
    }

    let base = base_risk(verdict.gap_type) as f64;
    let burden = signals.testing_burden.min(10) as f64 * BURDEN_SCALE as f64;
    let precedent = if verdict.gap_type == GapType::RequiredStandardMissing {
        0.0
    } else {
        signals.precedent_strength.clamp(0.0, 1.0) * MAX_PRECEDENT_REDUCTION
    };

    let raw = (base + burden - precedent).round();
    let clamped = raw.clamp(0.0, 100.0) as u8;
    (clamped, SeverityCategory::from_score(clamped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gapscan_core::types::ComparisonVerdict;

    fn verdict(gap_type: GapType) -> ComparisonVerdict {
        ComparisonVerdict::gap("dim", "ref", gap_type, 0.9, "", "a", "b")
    }

    #[test]
    fn same_scores_zero_minor() {
        let v = ComparisonVerdict::same("dim", "ref", 1.0, "", "a", "a");
        assert_eq!(score(&v, &ScoringSignals::default()), (0, SeverityCategory::Minor));
    }

    #[test]
    fn extended_shelf_life_with_burden_five_is_moderate() {
        let signals = ScoringSignals::new(5, 0.0);
        let (s, band) = score(&verdict(GapType::ExtendedShelfLife), &signals);
        assert_eq!(s, 52);
        assert_eq!(band, SeverityCategory::Moderate);
    }

    #[test]
    fn new_indication_band_depends_on_precedent() {
        let weak = score(&verdict(GapType::NewIndication), &ScoringSignals::new(0, 0.0));
        let strong = score(&verdict(GapType::NewIndication), &ScoringSignals::new(0, 1.0));
        assert_eq!(weak, (85, SeverityCategory::Major));
        assert_eq!(strong, (55, SeverityCategory::Moderate));
    }

    #[test]
    fn mandated_standard_gap_ignores_precedent() {
        for precedent in [0.0, 0.5, 1.0] {
            let signals = ScoringSignals::new(0, precedent);
            let (s, band) = score(&verdict(GapType::RequiredStandardMissing), &signals);
            assert!(s >= 90);
            assert_eq!(band, SeverityCategory::Major);
        }
    }

    #[test]
    fn score_is_clamped_to_100() {
        let signals = ScoringSignals::new(10, 0.0);
        let (s, band) = score(&verdict(GapType::RequiredStandardMissing), &signals);
        assert_eq!(s, 100);
        assert_eq!(band, SeverityCategory::Major);
    }

    #[test]
    fn burden_above_ten_is_clamped() {
        let signals = ScoringSignals::new(200, 0.0);
        let (s, _) = score(&verdict(GapType::MissingFeature), &signals);
        assert_eq!(s, 60);
    }
}
