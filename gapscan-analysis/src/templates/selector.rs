//! Template selection and conditional augmentation.
//!
//! Selection is pure and deterministic: identical category and subject
//! signals always produce an identical ordered dimension list.

use tracing::{debug, warn};

use gapscan_core::types::{DeviceAttributeSet, DimensionTemplate, FxHashSet};

use super::catalog::TemplateCatalog;
use crate::comparators::normalize;

/// Select the dimension template for a device category, augmented by the
/// subject's conditional signals. Unknown categories resolve to the
/// default template, never a failure.
pub fn select_template(
    catalog: &TemplateCatalog,
    category: &str,
    subject: &DeviceAttributeSet,
) -> DimensionTemplate {
    let base = match catalog.template(category) {
        Some(template) => template,
        None => {
            warn!(category, "unknown device category, using default template");
            catalog.default_template()
        }
    };

    let mut template = base.clone();
    let subject_text = subject_corpus(subject);

    for augmentation in catalog.augmentations() {
        if !augmentation
            .keywords
            .iter()
            .any(|k| subject_text.contains(k.as_str()))
        {
            continue;
        }
        let existing: FxHashSet<&str> =
            template.dimensions.iter().map(|d| d.name.as_str()).collect();
        let added: Vec<_> = augmentation
            .dimensions
            .iter()
            .filter(|d| !existing.contains(d.name.as_str()))
            .cloned()
            .collect();
        if added.is_empty() {
            continue;
        }
        debug!(
            augmentation = %augmentation.id,
            dimensions = added.len(),
            "augmentation triggered"
        );
        // Insert after the anchor dimension, or append when the selected
        // template does not carry the anchor.
        let insert_at = template
            .dimensions
            .iter()
            .position(|d| d.name == augmentation.anchor)
            .map(|i| i + 1)
            .unwrap_or(template.dimensions.len());
        for (offset, dim) in added.into_iter().enumerate() {
            template.dimensions.insert(insert_at + offset, dim);
        }
    }

    template
}

/// Restrict a template to an explicit dimension list, preserving template
/// order. Names the template does not carry are skipped with a warning.
pub fn apply_override(template: &DimensionTemplate, names: &[String]) -> DimensionTemplate {
    let wanted: FxHashSet<&str> = names.iter().map(String::as_str).collect();
    for name in names {
        if template.dimension(name).is_none() {
            warn!(dimension = %name, "override names a dimension the template does not carry");
        }
    }
    DimensionTemplate {
        category: template.category.clone(),
        version: template.version.clone(),
        dimensions: template
            .dimensions
            .iter()
            .filter(|d| wanted.contains(d.name.as_str()))
            .cloned()
            .collect(),
    }
}

/// Normalized concatenation of every subject attribute, used for
/// augmentation trigger matching.
fn subject_corpus(subject: &DeviceAttributeSet) -> String {
    let mut keys: Vec<&String> = subject.attributes.keys().collect();
    keys.sort();
    let joined = keys
        .iter()
        .map(|k| subject.attributes[*k].text_content())
        .collect::<Vec<_>>()
        .join(" ");
    normalize::normalize(&joined)
}
