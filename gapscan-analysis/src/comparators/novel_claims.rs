//! Novel-claim extraction comparator.
//!
//! A small fixed pattern set flags marketing/novelty language in subject
//! free text. A flagged clause absent from the union of all reference
//! descriptions is a novel claim the predicates cannot support.

use std::sync::OnceLock;

use regex::Regex;
use smallvec::SmallVec;

use gapscan_core::types::{
    AttributeValue, ComparisonVerdict, DimensionDefinition, GapType, RiskTier,
};

use super::normalize;

const CLAIM_PATTERNS: &[&str] = &[
    r"first[\s-]in[\s-]class",
    r"\bnovel\b",
    r"\bbreakthrough\b",
    r"\bproprietary\b",
    r"patent[\s-]pending",
    r"\bunique\b",
    r"state[\s-]of[\s-]the[\s-]art",
    r"\bsuperior\b",
    r"best[\s-]in[\s-]class",
    r"clinically\s+proven",
    r"\bai[\s-](?:powered|driven|based)",
    r"machine\s+learning",
    r"\bpredictive\b",
    r"\bonly\s+device\b",
    r"\bfastest\b",
    r"\bmost\s+accurate\b",
];

fn claim_patterns() -> &'static Vec<Regex> {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        CLAIM_PATTERNS
            .iter()
            .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("claim pattern {p}: {e}")))
            .collect()
    })
}

/// Compare subject free text against the combined reference corpus.
///
/// `reference_corpus` is the normalized union of every reference
/// description, precomputed once per run.
pub fn compare(
    dim: &DimensionDefinition,
    subject: &AttributeValue,
    reference: &AttributeValue,
    reference_id: &str,
    reference_corpus: &str,
) -> ComparisonVerdict {
    let subject_display = subject.text_content();
    let reference_display = reference.text_content();

    let mut novel: SmallVec<[String; 4]> = SmallVec::new();
    for clause in subject_display.split(['.', ';', '\n']) {
        let normalized = normalize::normalize(clause);
        if normalized.is_empty() {
            continue;
        }
        if !claim_patterns().iter().any(|p| p.is_match(&normalized)) {
            continue;
        }
        if !reference_corpus.contains(&normalized) && !novel.contains(&normalized) {
            novel.push(normalized);
        }
    }

    if novel.is_empty() {
        return ComparisonVerdict::same(
            &dim.name,
            reference_id,
            0.6,
            "no novel claims beyond the predicate descriptions",
            &subject_display,
            &reference_display,
        );
    }

    let tier = novel.iter().map(|c| claim_tier(c)).max().unwrap_or(RiskTier::Low);
    ComparisonVerdict::gap(
        &dim.name,
        reference_id,
        GapType::NovelClaim,
        0.65,
        format!(
            "claims with no support in any predicate description ({} risk): {}",
            tier,
            novel.join(" | ")
        ),
        &subject_display,
        &reference_display,
    )
    .with_risk_tier(tier)
}

/// Keyword heuristic for the risk tier of one claim clause.
fn claim_tier(clause: &str) -> RiskTier {
    // "ai" must match as a whole word; the rest are safe as substrings.
    let has_ai = clause.split_whitespace().any(|t| t == "ai");
    const HIGH: &[&str] = &["machine learning", "predictive", "clinical", "diagnos"];
    const MEDIUM: &[&str] = &["superior", "first", "best", "only", "fastest", "accurate"];
    if has_ai || HIGH.iter().any(|k| clause.contains(k)) {
        return RiskTier::High;
    }
    if MEDIUM.iter().any(|k| clause.contains(k)) {
        return RiskTier::Medium;
    }
    RiskTier::Low
}
