//! Fixed remediation and effort tables keyed by gap type.

use gapscan_core::types::GapType;

/// Remediation recommendation for a gap type. Every non-Same type carries
/// non-empty text; validation requires it for Major gaps.
pub fn remediation_for(gap_type: GapType) -> &'static str {
    match gap_type {
        GapType::Same => "",
        GapType::MissingData => {
            "Obtain the missing specification from design documentation and re-run the comparison"
        }
        GapType::Different => {
            "Review the divergent wording with regulatory affairs and align or justify the difference"
        }
        GapType::NewIndication => {
            "Provide clinical evidence supporting the expanded indication, or narrow the indications statement to match the predicate"
        }
        GapType::NewClaim => {
            "Substantiate the additional claim with performance data, or remove it from labeling"
        }
        GapType::NovelClaim => {
            "Support the novel claim with verification and validation evidence; unsupported marketing language invites deficiency questions"
        }
        GapType::NewFeature => {
            "Document the added feature's risk analysis and verification testing; assess whether it raises new questions of safety or effectiveness"
        }
        GapType::MissingFeature => {
            "Confirm the omitted predicate feature is not safety-relevant and document the rationale"
        }
        GapType::QuantitativeMismatch => {
            "Justify the performance difference with side-by-side bench testing against the predicate"
        }
        GapType::SmallerThanRange => {
            "Provide performance data at the lower bound, or restrict the specification to the predicate range"
        }
        GapType::LargerThanRange => {
            "Provide performance data at the upper bound, or restrict the specification to the predicate range"
        }
        GapType::ExtendedShelfLife => {
            "Complete real-time or accelerated aging studies covering the full labeled shelf life"
        }
        GapType::MissingStandard => {
            "Test to the predicate's consensus standard or document an equivalent method"
        }
        GapType::RequiredStandardMissing => {
            "Testing to the mandated consensus standard is required before submission; schedule it with a qualified laboratory"
        }
        GapType::DifferentMethodology => {
            "Bridge the methodological difference with comparative data or adopt the predicate's test method"
        }
    }
}

/// Estimated effort (weeks of testing/documentation) to close a gap of
/// this type. Feeds the narrative roll-up only; never the score.
pub fn effort_weeks(gap_type: GapType) -> f64 {
    match gap_type {
        GapType::Same => 0.0,
        GapType::MissingData => 1.0,
        GapType::Different => 1.0,
        GapType::MissingFeature => 1.0,
        GapType::NewClaim => 3.0,
        GapType::NovelClaim => 4.0,
        GapType::QuantitativeMismatch => 4.0,
        GapType::SmallerThanRange => 4.0,
        GapType::LargerThanRange => 4.0,
        GapType::DifferentMethodology => 5.0,
        GapType::MissingStandard => 6.0,
        GapType::NewFeature => 8.0,
        GapType::ExtendedShelfLife => 12.0,
        GapType::RequiredStandardMissing => 10.0,
        GapType::NewIndication => 16.0,
    }
}
