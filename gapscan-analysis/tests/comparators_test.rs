//! Comparator family tests.

use gapscan_analysis::comparators::{feature_set, novel_claims, quantitative, standards, textual};
use gapscan_core::types::{
    AttributeValue, ComparatorKind, DimensionCategory, DimensionDefinition, GapType, RiskTier,
};

fn dim(name: &str, category: DimensionCategory, comparator: ComparatorKind) -> DimensionDefinition {
    DimensionDefinition {
        name: name.to_string(),
        category,
        comparator,
        unit: None,
        tolerance_pct: None,
        critical: false,
    }
}

fn text(s: &str) -> AttributeValue {
    AttributeValue::Text(s.to_string())
}

fn set(items: &[&str]) -> AttributeValue {
    AttributeValue::Set(items.iter().map(|s| s.to_string()).collect())
}

// ── textual ──────────────────────────────────────────────────────────

#[test]
fn identical_text_is_same_with_full_confidence() {
    let d = dim("sterilization-method", DimensionCategory::Sterilization, ComparatorKind::Textual);
    let v = textual::compare(&d, &text("Ethylene oxide"), &text("Ethylene oxide"), "K1", 0.85);
    assert!(!v.gap_detected);
    assert_eq!(v.gap_type, GapType::Same);
    assert!((v.confidence - 1.0).abs() < f64::EPSILON);
}

#[test]
fn case_and_punctuation_differences_never_gap() {
    let d = dim("sterilization-method", DimensionCategory::Sterilization, ComparatorKind::Textual);
    let v = textual::compare(&d, &text("ETHYLENE-OXIDE."), &text("ethylene oxide"), "K1", 0.85);
    assert!(!v.gap_detected);
    assert!((v.confidence - 1.0).abs() < f64::EPSILON);
}

#[test]
fn subject_only_terms_on_indications_are_a_new_indication() {
    let d = dim("indications-for-use", DimensionCategory::Indications, ComparatorKind::Textual);
    let v = textual::compare(
        &d,
        &text("For the management of type 1 diabetes and type 2 diabetes"),
        &text("For the management of type 1 diabetes"),
        "K1",
        0.85,
    );
    assert_eq!(v.gap_type, GapType::NewIndication);
    assert!(v.gap_detected);
    assert!(v.explanation.contains('2'));
}

#[test]
fn reference_only_terms_are_narrower_use_not_a_gap() {
    let d = dim("indications-for-use", DimensionCategory::Indications, ComparatorKind::Textual);
    let v = textual::compare(
        &d,
        &text("For the management of type 1 diabetes"),
        &text("For the management of type 1 diabetes and gestational diabetes"),
        "K1",
        0.85,
    );
    assert!(!v.gap_detected);
    assert!(v.explanation.contains("narrower"));
}

#[test]
fn subject_only_terms_outside_indications_are_a_new_claim() {
    let d = dim("measurement-technology", DimensionCategory::Technological, ComparatorKind::Textual);
    let v = textual::compare(
        &d,
        &text("Electrochemical biosensor with capillary draw"),
        &text("Electrochemical biosensor"),
        "K1",
        0.85,
    );
    assert_eq!(v.gap_type, GapType::NewClaim);
}

// ── feature set ──────────────────────────────────────────────────────

#[test]
fn missing_noncritical_feature_is_minor_class() {
    let d = dim("display-features", DimensionCategory::Technological, ComparatorKind::FeatureSet);
    let v = feature_set::compare(
        &d,
        &set(&["backlit display"]),
        &set(&["backlit display", "memory storage"]),
        "K1",
    );
    assert_eq!(v.gap_type, GapType::MissingFeature);
    assert_eq!(v.risk_tier, Some(RiskTier::Low));
}

#[test]
fn missing_feature_on_critical_dimension_is_high_tier() {
    let mut d = dim("alarm-features", DimensionCategory::Technological, ComparatorKind::FeatureSet);
    d.critical = true;
    let v = feature_set::compare(
        &d,
        &set(&["occlusion alarm"]),
        &set(&["occlusion alarm", "air-in-line alarm"]),
        "K1",
    );
    assert_eq!(v.gap_type, GapType::MissingFeature);
    assert_eq!(v.risk_tier, Some(RiskTier::High));
    assert!(v.explanation.contains("critical"));
}

#[test]
fn subject_only_feature_is_risk_tiered_by_lookup() {
    let d = dim("connectivity-features", DimensionCategory::Software, ComparatorKind::FeatureSet);
    let v = feature_set::compare(
        &d,
        &set(&["bluetooth connectivity", "usb port"]),
        &set(&["usb port"]),
        "K1",
    );
    assert_eq!(v.gap_type, GapType::NewFeature);
    assert_eq!(v.risk_tier, Some(RiskTier::High));
}

#[test]
fn equal_feature_sets_are_same() {
    let d = dim("display-features", DimensionCategory::Technological, ComparatorKind::FeatureSet);
    let v = feature_set::compare(
        &d,
        &set(&["Backlit Display"]),
        &set(&["backlit display"]),
        "K1",
    );
    assert!(!v.gap_detected);
}

// ── quantitative ─────────────────────────────────────────────────────

fn quant_dim(name: &str, category: DimensionCategory) -> DimensionDefinition {
    dim(name, category, ComparatorKind::Quantitative)
}

#[test]
fn value_at_tolerance_boundary_is_equivalent_inclusive() {
    let d = quant_dim("battery-life", DimensionCategory::Electrical);
    // Electrical tolerance is 5%: 105 vs 100 is exactly at the boundary.
    let v = quantitative::compare(&d, &text("105 h"), &text("100 h"), "K1", 5.0);
    assert!(!v.gap_detected, "boundary must be inclusive: {}", v.explanation);
}

#[test]
fn one_unit_past_the_boundary_is_a_gap() {
    let d = quant_dim("battery-life", DimensionCategory::Electrical);
    let v = quantitative::compare(&d, &text("106 h"), &text("100 h"), "K1", 5.0);
    assert_eq!(v.gap_type, GapType::QuantitativeMismatch);
}

#[test]
fn values_convert_within_a_unit_family() {
    let d = quant_dim("shelf-life", DimensionCategory::ShelfLife);
    let v = quantitative::compare(&d, &text("60 months"), &text("5 years"), "K1", 10.0);
    assert!(!v.gap_detected, "60 months equals 5 years: {}", v.explanation);
}

#[test]
fn longer_shelf_life_is_extended_shelf_life_gap() {
    let d = quant_dim("shelf-life", DimensionCategory::ShelfLife);
    let v = quantitative::compare(&d, &text("5 years"), &text("3 years"), "K1", 10.0);
    assert_eq!(v.gap_type, GapType::ExtendedShelfLife);
}

#[test]
fn subject_below_reference_range_is_flagged() {
    let d = quant_dim("measurement-range", DimensionCategory::Performance);
    let v = quantitative::compare(&d, &text("10 mg/dl"), &text("20-600 mg/dl"), "K1", 15.0);
    assert_eq!(v.gap_type, GapType::SmallerThanRange);
}

#[test]
fn subject_within_reference_range_is_same() {
    let d = quant_dim("measurement-range", DimensionCategory::Performance);
    let v = quantitative::compare(&d, &text("100 mg/dl"), &text("20-600 mg/dl"), "K1", 15.0);
    assert!(!v.gap_detected);
}

#[test]
fn huge_divergence_degrades_to_low_confidence() {
    let d = quant_dim("test-time", DimensionCategory::Performance);
    let v = quantitative::compare(&d, &text("500"), &text("5"), "K1", 15.0);
    assert_eq!(v.gap_type, GapType::QuantitativeMismatch);
    assert!(v.confidence <= 0.4, "confidence {} too high", v.confidence);
}

#[test]
fn unparseable_value_degrades_to_missing_data() {
    let d = quant_dim("test-time", DimensionCategory::Performance);
    let v = quantitative::compare(&d, &text("instantaneous"), &text("5 s"), "K1", 15.0);
    assert_eq!(v.gap_type, GapType::MissingData);
    assert!(v.confidence < 0.5);
}

#[test]
fn incompatible_unit_families_degrade_to_missing_data() {
    let d = quant_dim("sample-volume", DimensionCategory::Performance);
    let v = quantitative::compare(&d, &text("5 ml"), &text("5 mm"), "K1", 15.0);
    assert_eq!(v.gap_type, GapType::MissingData);
}

// ── standards ────────────────────────────────────────────────────────

fn std_dim(category: DimensionCategory) -> DimensionDefinition {
    dim("testing-standards", category, ComparatorKind::StandardsList)
}

#[test]
fn reference_only_standard_is_missing_standard() {
    let d = std_dim(DimensionCategory::Biocompatibility);
    let v = standards::compare(
        &d,
        &set(&["ISO 10993-5 cytotoxicity"]),
        &set(&["ISO 10993-5 cytotoxicity", "ISO 10993-10 sensitization"]),
        "K1",
        &[],
    );
    assert_eq!(v.gap_type, GapType::MissingStandard);
    assert!(v.explanation.contains("ISO 10993-10"));
    assert!(v.explanation.contains("critical"));
}

#[test]
fn mandated_standard_missing_dominates_regardless_of_reference() {
    let d = std_dim(DimensionCategory::Standards);
    let mandated = vec!["ISO 15197".to_string()];
    // The reference also lacks the mandated standard; the gap fires anyway.
    let v = standards::compare(
        &d,
        &set(&["ISO 10993-1 biological evaluation"]),
        &set(&["ISO 10993-1 biological evaluation"]),
        "K1",
        &mandated,
    );
    assert_eq!(v.gap_type, GapType::RequiredStandardMissing);
    assert!(v.explanation.contains("ISO 15197"));
}

#[test]
fn shared_standard_with_divergent_method_is_different_methodology() {
    let d = std_dim(DimensionCategory::Biocompatibility);
    let v = standards::compare(
        &d,
        &set(&["tested per ISO 10993-5 using MEM elution"]),
        &set(&["ISO 10993-5 agar diffusion overlay method"]),
        "K1",
        &[],
    );
    assert_eq!(v.gap_type, GapType::DifferentMethodology);
}

#[test]
fn matching_standard_lists_are_same() {
    let d = std_dim(DimensionCategory::Standards);
    let v = standards::compare(
        &d,
        &set(&["IEC 60601-1", "IEC 60601-1-2"]),
        &set(&["IEC 60601-1", "IEC 60601-1-2"]),
        "K1",
        &[],
    );
    assert!(!v.gap_detected);
}

#[test]
fn edition_years_are_not_part_of_standard_identity() {
    let d = std_dim(DimensionCategory::Standards);
    let v = standards::compare(
        &d,
        &set(&["ISO 14971:2019"]),
        &set(&["ISO 14971:2007"]),
        "K1",
        &[],
    );
    assert!(!v.gap_detected, "{}", v.explanation);
}

// ── novel claims ─────────────────────────────────────────────────────

#[test]
fn unsupported_claim_is_novel_and_tiered() {
    let d = dim("labeling-claims", DimensionCategory::Labeling, ComparatorKind::NovelClaim);
    let reference = text("Results in 5 seconds");
    let corpus = "results in 5 seconds";
    let v = novel_claims::compare(
        &d,
        &text("First-in-class AI-powered glucose prediction. Results in 5 seconds."),
        &reference,
        "K1",
        corpus,
    );
    assert_eq!(v.gap_type, GapType::NovelClaim);
    assert_eq!(v.risk_tier, Some(RiskTier::High));
}

#[test]
fn claims_present_in_the_reference_corpus_are_not_novel() {
    let d = dim("labeling-claims", DimensionCategory::Labeling, ComparatorKind::NovelClaim);
    let reference = text("Clinically proven accuracy. Results in 5 seconds.");
    let corpus = "clinically proven accuracy results in 5 seconds";
    let v = novel_claims::compare(
        &d,
        &text("Clinically proven accuracy"),
        &reference,
        "K1",
        corpus,
    );
    assert!(!v.gap_detected, "{}", v.explanation);
}

#[test]
fn plain_descriptions_carry_no_novel_claims() {
    let d = dim("labeling-claims", DimensionCategory::Labeling, ComparatorKind::NovelClaim);
    let v = novel_claims::compare(
        &d,
        &text("Measures blood glucose in capillary whole blood"),
        &text("Measures blood glucose"),
        "K1",
        "measures blood glucose",
    );
    assert!(!v.gap_detected);
}
