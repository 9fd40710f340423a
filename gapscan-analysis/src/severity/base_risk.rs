//! Fixed base-risk lookup keyed by gap type.

use gapscan_core::types::GapType;

/// Base regulatory risk of a gap type, before burden and precedent
/// adjustment. Immutable; the score/band invariants in the test suite
/// depend on these values.
pub fn base_risk(gap_type: GapType) -> u8 {
    match gap_type {
        GapType::Same => 0,
        GapType::MissingData => 10,
        GapType::MissingFeature => 20,
        GapType::Different => 25,
        GapType::ExtendedShelfLife => 32,
        GapType::SmallerThanRange => 40,
        GapType::LargerThanRange => 40,
        GapType::QuantitativeMismatch => 45,
        GapType::DifferentMethodology => 50,
        GapType::MissingStandard => 55,
        GapType::NewClaim => 60,
        GapType::NovelClaim => 70,
        GapType::NewFeature => 75,
        GapType::NewIndication => 85,
        GapType::RequiredStandardMissing => 90,
    }
}
