//! Standards/testing-list comparator.
//!
//! Both sides parse into consensus-standard designation sets. Findings
//! aggregate into one verdict per reference; a mandated standard missing
//! from the subject dominates everything else.

use std::sync::OnceLock;

use regex::Regex;
use smallvec::SmallVec;

use gapscan_core::types::{
    AttributeValue, ComparisonVerdict, DimensionDefinition, FxHashMap, GapType,
    StandardCriticality,
};

use super::normalize;

fn designation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(ISO|IEC|ASTM|EN|AAMI|ANSI|USP|ICH)[\s-]*([A-Z]?\d{2,6}(?:-\d{1,3})*)(?::(\d{4}))?")
            .unwrap_or_else(|e| panic!("designation regex: {e}"))
    })
}

/// A standard reference extracted from one list entry.
#[derive(Debug, Clone)]
pub struct StandardRef {
    /// Canonical designation, e.g. "ISO 10993-5". Edition years are not
    /// part of the identity.
    pub designation: String,
    /// Normalized remainder of the entry the designation appeared in,
    /// treated as the test-method descriptor.
    pub descriptor: String,
}

/// Extract standard references from an attribute value.
pub fn extract_standards(value: &AttributeValue) -> Vec<StandardRef> {
    let entries: Vec<String> = match value.as_set() {
        Some(items) => items.to_vec(),
        None => value
            .text_content()
            .split([',', ';', '\n'])
            .map(str::to_string)
            .collect(),
    };

    let mut refs = Vec::new();
    for entry in &entries {
        for caps in designation_re().captures_iter(entry) {
            let org = caps[1].to_uppercase();
            let number = caps[2].to_uppercase();
            let designation = format!("{org} {number}");
            let descriptor = normalize::normalize(&designation_re().replace_all(entry, " "));
            refs.push(StandardRef {
                designation,
                descriptor,
            });
        }
    }
    refs
}

/// Compare a standards-list dimension against one reference.
///
/// `mandated` carries the regulatory profile's required designations; the
/// pipeline passes them on one standards dimension per run so the finding
/// is not duplicated across every standards list in the template.
pub fn compare(
    dim: &DimensionDefinition,
    subject: &AttributeValue,
    reference: &AttributeValue,
    reference_id: &str,
    mandated: &[String],
) -> ComparisonVerdict {
    let subject_display = subject.text_content();
    let reference_display = reference.text_content();
    let subject_refs = extract_standards(subject);
    let reference_refs = extract_standards(reference);

    if subject_refs.is_empty() && reference_refs.is_empty() && mandated.is_empty() {
        return ComparisonVerdict::missing_data(
            &dim.name,
            reference_id,
            "no standard designations found on either side",
            &subject_display,
            &reference_display,
        );
    }

    let subject_map: FxHashMap<&str, &StandardRef> = subject_refs
        .iter()
        .map(|r| (r.designation.as_str(), r))
        .collect();
    let reference_map: FxHashMap<&str, &StandardRef> = reference_refs
        .iter()
        .map(|r| (r.designation.as_str(), r))
        .collect();

    // Mandated standards absent from the subject dominate: they apply
    // regardless of what any reference reports.
    let mandated_missing: SmallVec<[&str; 4]> = mandated
        .iter()
        .map(String::as_str)
        .filter(|m| !subject_map.contains_key(m))
        .collect();
    if !mandated_missing.is_empty() {
        return ComparisonVerdict::gap(
            &dim.name,
            reference_id,
            GapType::RequiredStandardMissing,
            0.95,
            format!(
                "mandated standards absent from subject: {}",
                mandated_missing.join(", ")
            ),
            &subject_display,
            &reference_display,
        );
    }

    let mut reference_only: Vec<&str> = reference_map
        .keys()
        .filter(|d| !subject_map.contains_key(**d))
        .copied()
        .collect();
    reference_only.sort_unstable();
    if !reference_only.is_empty() {
        let criticality = StandardCriticality::for_category(dim.category);
        return ComparisonVerdict::gap(
            &dim.name,
            reference_id,
            GapType::MissingStandard,
            0.85,
            format!(
                "predicate standards absent from subject ({criticality} for {} dimensions): {}",
                dim.category,
                reference_only.join(", ")
            ),
            &subject_display,
            &reference_display,
        );
    }

    // Shared standards with divergent method descriptors.
    let mut divergent: Vec<&str> = Vec::new();
    for (designation, subject_ref) in &subject_map {
        if let Some(reference_ref) = reference_map.get(designation) {
            if !subject_ref.descriptor.is_empty()
                && !reference_ref.descriptor.is_empty()
                && normalize::similarity(&subject_ref.descriptor, &reference_ref.descriptor) < 0.5
            {
                divergent.push(*designation);
            }
        }
    }
    divergent.sort_unstable();
    if !divergent.is_empty() {
        return ComparisonVerdict::gap(
            &dim.name,
            reference_id,
            GapType::DifferentMethodology,
            0.7,
            format!(
                "shared standards with divergent test methods: {}",
                divergent.join(", ")
            ),
            &subject_display,
            &reference_display,
        );
    }

    ComparisonVerdict::same(
        &dim.name,
        reference_id,
        0.9,
        "standards coverage matches the predicate",
        &subject_display,
        &reference_display,
    )
}
