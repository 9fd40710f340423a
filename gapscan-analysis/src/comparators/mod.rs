//! The comparison rule engine: five comparator families selected by
//! dimension type, one winning verdict per (dimension, reference) pair.
//!
//! Comparators are pure functions over immutable inputs; a comparator that
//! cannot parse a value returns a low-confidence missing-data verdict and
//! never aborts the run.

pub mod feature_set;
pub mod normalize;
pub mod novel_claims;
pub mod quantitative;
pub mod standards;
pub mod textual;
pub mod units;

use gapscan_core::types::{ComparatorKind, ComparisonVerdict};

/// Tie-break precedence when comparators fire at equal confidence:
/// standards > quantitative > feature > textual > novel-claim.
pub fn precedence(kind: ComparatorKind) -> u8 {
    match kind {
        ComparatorKind::StandardsList => 5,
        ComparatorKind::Quantitative => 4,
        ComparatorKind::FeatureSet => 3,
        ComparatorKind::Textual => 2,
        ComparatorKind::NovelClaim => 1,
    }
}

/// Pick the winning verdict among candidates from multiple comparators.
/// Highest confidence wins; equal confidence falls back to the documented
/// precedence order.
pub fn best_verdict(
    mut candidates: Vec<(ComparatorKind, ComparisonVerdict)>,
) -> Option<ComparisonVerdict> {
    candidates.sort_by(|(ak, av), (bk, bv)| {
        av.confidence
            .partial_cmp(&bv.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| precedence(*ak).cmp(&precedence(*bk)))
    });
    candidates.pop().map(|(_, verdict)| verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gapscan_core::types::GapType;

    #[test]
    fn equal_confidence_falls_back_to_precedence() {
        let textual = ComparisonVerdict::gap("d", "r", GapType::Different, 0.7, "", "a", "b");
        let standards =
            ComparisonVerdict::gap("d", "r", GapType::MissingStandard, 0.7, "", "a", "b");
        let winner = best_verdict(vec![
            (ComparatorKind::Textual, textual),
            (ComparatorKind::StandardsList, standards),
        ])
        .unwrap();
        assert_eq!(winner.gap_type, GapType::MissingStandard);
    }

    #[test]
    fn higher_confidence_wins_regardless_of_precedence() {
        let textual = ComparisonVerdict::gap("d", "r", GapType::NewClaim, 0.9, "", "a", "b");
        let standards =
            ComparisonVerdict::gap("d", "r", GapType::MissingStandard, 0.7, "", "a", "b");
        let winner = best_verdict(vec![
            (ComparatorKind::StandardsList, standards),
            (ComparatorKind::Textual, textual),
        ])
        .unwrap();
        assert_eq!(winner.gap_type, GapType::NewClaim);
    }
}
