//! Textual equivalence comparator.
//!
//! Exact match after normalization, then similarity ratio, then keyword
//! set difference. Case and punctuation differences never produce a gap.

use gapscan_core::types::{
    AttributeValue, ComparisonVerdict, DimensionCategory, DimensionDefinition, GapType,
};

use super::normalize;

/// Compare a textual dimension against one reference.
pub fn compare(
    dim: &DimensionDefinition,
    subject: &AttributeValue,
    reference: &AttributeValue,
    reference_id: &str,
    similarity_threshold: f64,
) -> ComparisonVerdict {
    let subject_text = subject.text_content();
    let reference_text = reference.text_content();
    let a = normalize::normalize(&subject_text);
    let b = normalize::normalize(&reference_text);

    if a == b {
        return ComparisonVerdict::same(
            &dim.name,
            reference_id,
            1.0,
            "identical after normalization",
            &subject_text,
            &reference_text,
        );
    }

    let ratio = normalize::similarity(&a, &b);
    if ratio >= similarity_threshold {
        return ComparisonVerdict::same(
            &dim.name,
            reference_id,
            ratio,
            format!("equivalent wording (similarity {ratio:.2})"),
            &subject_text,
            &reference_text,
        );
    }

    let subject_terms = normalize::keywords(&a);
    let reference_terms = normalize::keywords(&b);
    let subject_only = normalize::sorted(&subject_terms.difference(&reference_terms).cloned().collect());
    let reference_only = normalize::sorted(&reference_terms.difference(&subject_terms).cloned().collect());

    if !subject_only.is_empty() {
        let gap_type = if dim.category == DimensionCategory::Indications {
            GapType::NewIndication
        } else {
            GapType::NewClaim
        };
        return ComparisonVerdict::gap(
            &dim.name,
            reference_id,
            gap_type,
            0.75,
            format!("subject adds terms not in the predicate: {}", subject_only.join(", ")),
            &subject_text,
            &reference_text,
        );
    }

    if !reference_only.is_empty() {
        return ComparisonVerdict::same(
            &dim.name,
            reference_id,
            0.7,
            format!(
                "narrower than the predicate; predicate-only terms: {}",
                reference_only.join(", ")
            ),
            &subject_text,
            &reference_text,
        );
    }

    if !subject_terms.is_empty() && subject_terms == reference_terms {
        // Same key terms, different phrasing or word order.
        return ComparisonVerdict::same(
            &dim.name,
            reference_id,
            0.8,
            "same key terms with different phrasing",
            &subject_text,
            &reference_text,
        );
    }

    ComparisonVerdict::gap(
        &dim.name,
        reference_id,
        GapType::Different,
        0.4,
        format!("text differs (similarity {ratio:.2}) with no distinguishing terms"),
        &subject_text,
        &reference_text,
    )
}
