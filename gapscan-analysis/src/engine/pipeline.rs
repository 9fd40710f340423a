//! The analysis pipeline: parallel map over the dimension/reference
//! cross-product, then a single-threaded deterministic sort, score,
//! build, and validate phase.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, info};

use gapscan_core::config::GapscanConfig;
use gapscan_core::errors::PipelineError;
use gapscan_core::types::{
    AttributeValue, ComparatorKind, ComparisonVerdict, DeviceAttributeSet, DimensionCategory,
    DimensionDefinition, GapRecord, GapType, SeverityCategory,
};

use super::types::{AnalysisRequest, AnalysisSummary, GapAnalysis};
use crate::comparators::{
    self, feature_set, normalize, novel_claims, quantitative, standards, textual,
};
use crate::records::{build_records, effort_weeks, unix_now};
use crate::templates::{apply_override, select_template, TemplateCatalog};
use crate::validation::validate;

/// The comparison engine. Owns the immutable catalog and configuration,
/// loaded once; `analyze` is stateless across runs and safe to call from
/// multiple threads.
pub struct ComparisonEngine {
    catalog: TemplateCatalog,
    config: GapscanConfig,
}

impl ComparisonEngine {
    /// Engine over the embedded catalog with default configuration.
    pub fn new() -> Result<Self, PipelineError> {
        Ok(Self {
            catalog: TemplateCatalog::embedded()?,
            config: GapscanConfig::default(),
        })
    }

    /// Engine over the embedded catalog with the given configuration.
    pub fn with_config(config: GapscanConfig) -> Result<Self, PipelineError> {
        Ok(Self {
            catalog: TemplateCatalog::embedded()?,
            config,
        })
    }

    /// Engine over a custom catalog.
    pub fn with_catalog(catalog: TemplateCatalog, config: GapscanConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Run one comparison: subject against every reference across the
    /// selected template. Returns a validated gap set or the validation
    /// failure; input defects and unparseable values degrade locally and
    /// never fail the run.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<GapAnalysis, PipelineError> {
        let mut template = select_template(&self.catalog, &request.device_category, &request.subject);
        if let Some(names) = &request.dimension_override {
            template = apply_override(&template, names);
        }
        info!(
            subject = %request.subject.device_id,
            category = %request.device_category,
            template = %template.category,
            dimensions = template.len(),
            references = request.references.len(),
            "starting comparison"
        );

        let reference_corpus = reference_corpus(&request.references);
        let mandated = self
            .catalog
            .profile(&request.device_category)
            .map(|p| p.mandated_standards.as_slice())
            .unwrap_or(&[]);
        // The mandated-standard check runs on the first standards
        // dimension only, so one run reports each mandated gap once.
        let mandated_dimension = template
            .dimensions
            .iter()
            .find(|d| d.comparator == ComparatorKind::StandardsList)
            .map(|d| d.name.clone());

        let pairs: Vec<(usize, &DimensionDefinition, &DeviceAttributeSet)> = template
            .dimensions
            .iter()
            .enumerate()
            .flat_map(|(i, dim)| request.references.iter().map(move |r| (i, dim, r)))
            .collect();

        let compare = |(position, dim, reference): &(usize, &DimensionDefinition, &DeviceAttributeSet)| {
            let mandated_here = if mandated_dimension.as_deref() == Some(dim.name.as_str()) {
                mandated
            } else {
                &[]
            };
            (
                *position,
                self.compare_pair(dim, &request.subject, reference, &reference_corpus, mandated_here),
            )
        };

        let mut indexed: Vec<(usize, ComparisonVerdict)> =
            if self.config.comparison.effective_parallel() {
                pairs.par_iter().map(compare).collect()
            } else {
                pairs.iter().map(compare).collect()
            };

        // Deterministic emission order regardless of worker scheduling.
        indexed.sort_by(|(ap, av), (bp, bv)| {
            ap.cmp(bp).then_with(|| av.reference_id.cmp(&bv.reference_id))
        });
        let verdicts: Vec<ComparisonVerdict> = indexed.into_iter().map(|(_, v)| v).collect();

        let degraded: Vec<String> = verdicts
            .iter()
            .filter(|v| v.gap_type == GapType::MissingData)
            .map(|v| {
                format!(
                    "{} vs {}: {}",
                    v.dimension, v.reference_id, v.explanation
                )
            })
            .collect();
        debug!(
            verdicts = verdicts.len(),
            degraded = degraded.len(),
            "comparison phase complete"
        );

        let with_categories: Vec<(&ComparisonVerdict, DimensionCategory)> = verdicts
            .iter()
            .map(|v| {
                let category = template
                    .dimension(&v.dimension)
                    .map(|d| d.category)
                    .unwrap_or(DimensionCategory::Technological);
                (v, category)
            })
            .collect();
        let records = build_records(
            &with_categories,
            |dimension| request.signals_for(dimension),
            unix_now(),
        );

        validate(&records, &verdicts)?;

        let summary = summarize(&records);
        info!(
            gaps = summary.total_gaps,
            major = summary.major,
            moderate = summary.moderate,
            minor = summary.minor,
            "analysis complete"
        );

        Ok(GapAnalysis {
            subject_id: request.subject.device_id.clone(),
            device_category: request.device_category.clone(),
            template_category: template.category.clone(),
            catalog_version: template.version.clone(),
            records,
            summary,
            degraded,
        })
    }

    /// Compare one dimension against one reference device.
    fn compare_pair(
        &self,
        dim: &DimensionDefinition,
        subject: &DeviceAttributeSet,
        reference: &DeviceAttributeSet,
        reference_corpus: &str,
        mandated: &[String],
    ) -> ComparisonVerdict {
        let empty = AttributeValue::Text(String::new());
        let subject_value = subject.get(&dim.name);
        let reference_value = reference.get(&dim.name);

        // Standards dimensions tolerate absent attributes: mandated
        // standards are missing precisely when the subject reports
        // nothing.
        if dim.comparator == ComparatorKind::StandardsList {
            return standards::compare(
                dim,
                subject_value.unwrap_or(&empty),
                reference_value.unwrap_or(&empty),
                &reference.device_id,
                mandated,
            );
        }

        let Some(subject_value) = subject_value else {
            return ComparisonVerdict::missing_data(
                &dim.name,
                &reference.device_id,
                "subject does not report this dimension",
                "",
                reference_value.map(|v| v.text_content()).unwrap_or_default(),
            );
        };

        match dim.comparator {
            ComparatorKind::Textual => {
                let Some(reference_value) = reference_value else {
                    return self.missing_reference(dim, subject_value, reference);
                };
                let mut candidates = vec![(
                    ComparatorKind::Textual,
                    textual::compare(
                        dim,
                        subject_value,
                        reference_value,
                        &reference.device_id,
                        self.config.comparison.effective_similarity_threshold(),
                    ),
                )];
                // Claim-bearing text also runs the novel-claim extractor.
                if matches!(
                    dim.category,
                    DimensionCategory::Indications | DimensionCategory::Labeling
                ) {
                    candidates.push((
                        ComparatorKind::NovelClaim,
                        novel_claims::compare(
                            dim,
                            subject_value,
                            reference_value,
                            &reference.device_id,
                            reference_corpus,
                        ),
                    ));
                }
                comparators::best_verdict(candidates).unwrap_or_else(|| {
                    ComparisonVerdict::missing_data(
                        &dim.name,
                        &reference.device_id,
                        "no comparator produced a verdict",
                        subject_value.text_content(),
                        reference_value.text_content(),
                    )
                })
            }
            ComparatorKind::FeatureSet => {
                let Some(reference_value) = reference_value else {
                    return self.missing_reference(dim, subject_value, reference);
                };
                feature_set::compare(dim, subject_value, reference_value, &reference.device_id)
            }
            ComparatorKind::Quantitative => {
                let Some(reference_value) = reference_value else {
                    return self.missing_reference(dim, subject_value, reference);
                };
                quantitative::compare(
                    dim,
                    subject_value,
                    reference_value,
                    &reference.device_id,
                    self.tolerance_for(dim),
                )
            }
            ComparatorKind::NovelClaim => novel_claims::compare(
                dim,
                subject_value,
                reference_value.unwrap_or(&empty),
                &reference.device_id,
                reference_corpus,
            ),
            // Handled above.
            ComparatorKind::StandardsList => unreachable!("standards dimensions short-circuit"),
        }
    }

    fn missing_reference(
        &self,
        dim: &DimensionDefinition,
        subject_value: &AttributeValue,
        reference: &DeviceAttributeSet,
    ) -> ComparisonVerdict {
        ComparisonVerdict::missing_data(
            &dim.name,
            &reference.device_id,
            "reference does not report this dimension",
            subject_value.text_content(),
            "",
        )
    }

    /// Effective quantitative tolerance for a dimension: per-dimension
    /// catalog override, then config override, then the category default.
    fn tolerance_for(&self, dim: &DimensionDefinition) -> f64 {
        dim.tolerance_pct
            .or_else(|| self.config.comparison.tolerance_for(dim.category))
            .unwrap_or_else(|| quantitative::default_tolerance_pct(dim.category))
    }
}

/// Normalized union of every reference description, for novel-claim
/// matching. Key order is sorted so the corpus is deterministic.
fn reference_corpus(references: &[DeviceAttributeSet]) -> String {
    let mut parts = Vec::new();
    for reference in references {
        let mut keys: Vec<&String> = reference.attributes.keys().collect();
        keys.sort();
        for key in keys {
            parts.push(normalize::normalize(&reference.attributes[key].text_content()));
        }
    }
    parts.join(" ")
}

fn summarize(records: &[GapRecord]) -> AnalysisSummary {
    let mut by_type: BTreeMap<String, usize> = BTreeMap::new();
    let mut minor = 0;
    let mut moderate = 0;
    let mut major = 0;
    let mut effort = 0.0;
    for record in records {
        *by_type.entry(record.gap_type.as_str().to_string()).or_insert(0) += 1;
        match record.severity {
            SeverityCategory::Minor => minor += 1,
            SeverityCategory::Moderate => moderate += 1,
            SeverityCategory::Major => major += 1,
        }
        effort += effort_weeks(record.gap_type);
    }
    AnalysisSummary {
        total_gaps: records.len(),
        minor,
        moderate,
        major,
        by_type,
        estimated_effort_weeks: effort,
    }
}
