//! Severity scorer property tests.

use gapscan_analysis::severity::{base_risk, score, ScoringSignals};
use gapscan_core::types::{ComparisonVerdict, GapType, SeverityCategory};
use proptest::prelude::*;

fn verdict(gap_type: GapType) -> ComparisonVerdict {
    if gap_type == GapType::Same {
        ComparisonVerdict::same("dim", "ref", 1.0, "", "a", "a")
    } else {
        ComparisonVerdict::gap("dim", "ref", gap_type, 0.9, "", "a", "b")
    }
}

fn any_gap_type() -> impl Strategy<Value = GapType> {
    prop::sample::select(GapType::all().to_vec())
}

proptest! {
    /// Score and band always satisfy the fixed mapping, for every gap
    /// type and any signal combination.
    #[test]
    fn score_and_band_are_consistent(
        gap_type in any_gap_type(),
        burden in 0u8..=10,
        precedent in 0.0f64..=1.0,
    ) {
        let signals = ScoringSignals::new(burden, precedent);
        let (s, band) = score(&verdict(gap_type), &signals);
        prop_assert!(s <= 100);
        prop_assert_eq!(band, SeverityCategory::from_score(s));
    }

    /// Mandated-standard gaps stay in the Major band across the whole
    /// signal space.
    #[test]
    fn required_standard_missing_is_always_major(
        burden in 0u8..=10,
        precedent in 0.0f64..=1.0,
    ) {
        let signals = ScoringSignals::new(burden, precedent);
        let (_, band) = score(&verdict(GapType::RequiredStandardMissing), &signals);
        prop_assert_eq!(band, SeverityCategory::Major);
    }

    /// Stronger precedent never raises a score.
    #[test]
    fn precedent_is_monotonic(gap_type in any_gap_type(), burden in 0u8..=10) {
        let weak = score(&verdict(gap_type), &ScoringSignals::new(burden, 0.0)).0;
        let strong = score(&verdict(gap_type), &ScoringSignals::new(burden, 1.0)).0;
        prop_assert!(strong <= weak);
    }
}

#[test]
fn base_risk_covers_every_gap_type() {
    for gap_type in GapType::all() {
        let base = base_risk(*gap_type);
        assert!(base <= 100);
        if *gap_type == GapType::Same {
            assert_eq!(base, 0);
        }
    }
}

#[test]
fn scoring_is_deterministic() {
    let signals = ScoringSignals::new(7, 0.3);
    let v = verdict(GapType::NewFeature);
    assert_eq!(score(&v, &signals), score(&v, &signals));
}
