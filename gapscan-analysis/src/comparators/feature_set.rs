//! Feature-set parity comparator.
//!
//! Both sides reduce to normalized feature phrases; the set difference
//! drives the verdict. Findings aggregate into a single verdict per
//! reference so one dimension never yields more than one verdict.

use gapscan_core::types::{
    AttributeValue, ComparisonVerdict, DimensionDefinition, FxHashSet, GapType, RiskTier,
};

use super::normalize;

/// Fixed keyword lookup for new-feature risk tiers. First match wins;
/// unmatched features default to Medium.
const FEATURE_RISK: &[(&str, RiskTier)] = &[
    ("wireless", RiskTier::High),
    ("bluetooth", RiskTier::High),
    ("wifi", RiskTier::High),
    ("cloud", RiskTier::High),
    ("connectivity", RiskTier::High),
    ("algorithm", RiskTier::High),
    ("automated", RiskTier::High),
    ("automatic", RiskTier::High),
    ("predictive", RiskTier::High),
    ("dosing", RiskTier::High),
    ("alarm", RiskTier::Medium),
    ("alert", RiskTier::Medium),
    ("sensor", RiskTier::Medium),
    ("monitoring", RiskTier::Medium),
    ("display", RiskTier::Medium),
    ("memory", RiskTier::Low),
    ("backlight", RiskTier::Low),
    ("backlit", RiskTier::Low),
    ("case", RiskTier::Low),
    ("strap", RiskTier::Low),
    ("handle", RiskTier::Low),
    ("grip", RiskTier::Low),
    ("color", RiskTier::Low),
];

/// Compare a feature-set dimension against one reference.
pub fn compare(
    dim: &DimensionDefinition,
    subject: &AttributeValue,
    reference: &AttributeValue,
    reference_id: &str,
) -> ComparisonVerdict {
    let subject_display = subject.text_content();
    let reference_display = reference.text_content();
    let subject_features = feature_tokens(subject);
    let reference_features = feature_tokens(reference);

    let subject_only = normalize::sorted(
        &subject_features
            .difference(&reference_features)
            .cloned()
            .collect(),
    );
    let reference_only = normalize::sorted(
        &reference_features
            .difference(&subject_features)
            .cloned()
            .collect(),
    );

    if !subject_only.is_empty() {
        let tier = subject_only
            .iter()
            .map(|f| risk_tier(f))
            .max()
            .unwrap_or(RiskTier::Medium);
        return ComparisonVerdict::gap(
            &dim.name,
            reference_id,
            GapType::NewFeature,
            0.85,
            format!(
                "subject-only features ({} risk): {}",
                tier,
                subject_only.join(", ")
            ),
            &subject_display,
            &reference_display,
        )
        .with_risk_tier(tier);
    }

    if !reference_only.is_empty() {
        let tier = if dim.critical { RiskTier::High } else { RiskTier::Low };
        let qualifier = if dim.critical { "critical" } else { "non-critical" };
        return ComparisonVerdict::gap(
            &dim.name,
            reference_id,
            GapType::MissingFeature,
            if dim.critical { 0.9 } else { 0.85 },
            format!(
                "predicate features absent from subject ({qualifier} dimension): {}",
                reference_only.join(", ")
            ),
            &subject_display,
            &reference_display,
        )
        .with_risk_tier(tier);
    }

    ComparisonVerdict::same(
        &dim.name,
        reference_id,
        0.9,
        "feature sets match",
        &subject_display,
        &reference_display,
    )
}

/// Reduce an attribute to normalized feature phrases.
fn feature_tokens(value: &AttributeValue) -> FxHashSet<String> {
    match value.as_set() {
        Some(items) => items.iter().map(|i| normalize::normalize(i)).filter(|i| !i.is_empty()).collect(),
        None => normalize::phrases(&value.text_content()).into_iter().collect(),
    }
}

/// Fixed risk tier lookup for one feature phrase.
fn risk_tier(feature: &str) -> RiskTier {
    for (keyword, tier) in FEATURE_RISK {
        if feature.contains(keyword) {
            return *tier;
        }
    }
    RiskTier::Medium
}
