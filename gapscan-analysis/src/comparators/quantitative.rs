//! Quantitative range comparator.
//!
//! Reference values that parse as a range bound the subject directly;
//! single values compare under a category tolerance. The tolerance
//! boundary is inclusive. Large divergences and unit mismatches degrade
//! to low confidence instead of hard gaps, since they are more often
//! unit-parsing ambiguity than real differences.

use gapscan_core::types::{
    AttributeValue, ComparisonVerdict, DimensionCategory, DimensionDefinition, GapType,
};

use super::units::{self, Alignment};

/// Confidence applied when a divergence is so large it likely reflects a
/// parsing problem rather than a real gap.
const AMBIGUITY_CONFIDENCE: f64 = 0.4;

/// Divergence past the tolerance (in percentage points) beyond which the
/// ambiguity confidence applies.
const AMBIGUITY_MARGIN_PCT: f64 = 50.0;

/// Fixed default tolerance (percent) per dimension category.
pub fn default_tolerance_pct(category: DimensionCategory) -> f64 {
    match category {
        DimensionCategory::Electrical => 5.0,
        DimensionCategory::Mechanical => 10.0,
        DimensionCategory::Performance => 15.0,
        _ => 10.0,
    }
}

/// Compare a quantitative dimension against one reference.
pub fn compare(
    dim: &DimensionDefinition,
    subject: &AttributeValue,
    reference: &AttributeValue,
    reference_id: &str,
    tolerance_pct: f64,
) -> ComparisonVerdict {
    let subject_display = subject.text_content();
    let reference_display = reference.text_content();

    let Some(subject_q) = units::parse_quantity(&subject_display) else {
        return ComparisonVerdict::missing_data(
            &dim.name,
            reference_id,
            "subject value is not numeric",
            &subject_display,
            &reference_display,
        );
    };

    // A reference interval bounds the subject directly.
    if let Some(reference_range) = units::parse_range(&reference_display) {
        return compare_against_range(
            dim,
            &subject_q,
            &reference_range,
            reference_id,
            &subject_display,
            &reference_display,
        );
    }

    let Some(reference_q) = units::parse_quantity(&reference_display) else {
        return ComparisonVerdict::missing_data(
            &dim.name,
            reference_id,
            "reference value is not numeric",
            &subject_display,
            &reference_display,
        );
    };

    let (s, r, confidence_cap) = match units::align(&subject_q, &reference_q) {
        Alignment::Comparable(s, r) => (s, r, 1.0),
        Alignment::AssumedSameUnit(s, r) => (s, r, 0.6),
        Alignment::Incomparable => {
            return ComparisonVerdict::missing_data(
                &dim.name,
                reference_id,
                format!(
                    "units are not comparable ({} vs {})",
                    subject_q.unit.as_deref().unwrap_or("none"),
                    reference_q.unit.as_deref().unwrap_or("none"),
                ),
                &subject_display,
                &reference_display,
            );
        }
    };

    // Multiply before dividing so round-number boundaries stay exact
    // ("105 vs 100 at 5%" must be inclusive).
    let divergence_pct = if r != 0.0 {
        ((s - r).abs() * 100.0) / r.abs()
    } else if s == 0.0 {
        0.0
    } else {
        f64::INFINITY
    };

    if divergence_pct <= tolerance_pct {
        return ComparisonVerdict::same(
            &dim.name,
            reference_id,
            0.9_f64.min(confidence_cap),
            format!("within tolerance (±{tolerance_pct}%, divergence {divergence_pct:.1}%)"),
            &subject_display,
            &reference_display,
        );
    }

    // Longer subject shelf life is its own gap class with its own
    // stability-testing burden.
    if dim.category == DimensionCategory::ShelfLife && s > r {
        return ComparisonVerdict::gap(
            &dim.name,
            reference_id,
            GapType::ExtendedShelfLife,
            0.85_f64.min(confidence_cap),
            format!("subject shelf life exceeds the predicate by {divergence_pct:.0}%"),
            &subject_display,
            &reference_display,
        );
    }

    let direction = if s > r { "above" } else { "below" };
    let confidence = if divergence_pct > tolerance_pct + AMBIGUITY_MARGIN_PCT {
        AMBIGUITY_CONFIDENCE
    } else {
        0.8_f64.min(confidence_cap)
    };
    ComparisonVerdict::gap(
        &dim.name,
        reference_id,
        GapType::QuantitativeMismatch,
        confidence,
        format!(
            "subject is {divergence_pct:.1}% {direction} the predicate (tolerance ±{tolerance_pct}%)"
        ),
        &subject_display,
        &reference_display,
    )
}

fn compare_against_range(
    dim: &DimensionDefinition,
    subject_q: &units::Quantity,
    reference_range: &units::QuantityRange,
    reference_id: &str,
    subject_display: &str,
    reference_display: &str,
) -> ComparisonVerdict {
    // The subject may itself be a range; bound both ends.
    let subject_range = units::parse_range(subject_display);
    let (s_low_raw, s_high_raw, s_unit) = match &subject_range {
        Some(sr) => (sr.low, sr.high, sr.unit.clone()),
        None => (subject_q.value, subject_q.value, subject_q.unit.clone()),
    };

    // Convert both sides to a common base when the units call for it;
    // equal or absent units compare raw.
    let (s_low, s_high, low, high) = match (s_unit.as_deref(), reference_range.unit.as_deref()) {
        (Some(su), Some(ru)) if su != ru => {
            match (
                units::to_base(s_low_raw, Some(su)),
                units::to_base(s_high_raw, Some(su)),
                units::to_base(reference_range.low, Some(ru)),
                units::to_base(reference_range.high, Some(ru)),
            ) {
                (Some((sf, sl)), Some((_, sh)), Some((rf, rl)), Some((_, rh))) if sf == rf => {
                    (sl, sh, rl, rh)
                }
                _ => {
                    return ComparisonVerdict::missing_data(
                        &dim.name,
                        reference_id,
                        "subject and reference range use incompatible units",
                        subject_display,
                        reference_display,
                    );
                }
            }
        }
        _ => (
            s_low_raw,
            s_high_raw,
            reference_range.low,
            reference_range.high,
        ),
    };

    if s_low < low {
        ComparisonVerdict::gap(
            &dim.name,
            reference_id,
            GapType::SmallerThanRange,
            0.85,
            format!("subject extends below the predicate range ({s_low} < {low})"),
            subject_display,
            reference_display,
        )
    } else if s_high > high {
        ComparisonVerdict::gap(
            &dim.name,
            reference_id,
            GapType::LargerThanRange,
            0.85,
            format!("subject extends above the predicate range ({s_high} > {high})"),
            subject_display,
            reference_display,
        )
    } else {
        ComparisonVerdict::same(
            &dim.name,
            reference_id,
            0.9,
            "within the predicate range",
            subject_display,
            reference_display,
        )
    }
}
