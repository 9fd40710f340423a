//! Text normalization, similarity, and keyword extraction shared by the
//! textual, feature, and claim comparators.

use rustc_hash::{FxHashMap, FxHashSet};

/// Function words excluded from keyword sets. Domain terms stay in.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "between", "by", "can", "during", "for", "from",
    "had", "has", "have", "in", "into", "is", "it", "its", "may", "must", "no", "not", "of", "on",
    "onto", "or", "over", "per", "shall", "should", "than", "that", "the", "these", "this",
    "those", "through", "to", "under", "upon", "use", "used", "using", "via", "was", "were",
    "when", "where", "which", "while", "will", "with", "within", "without",
];

/// Case-fold, strip punctuation, collapse whitespace.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_space = true;
    for c in text.chars() {
        let c = if c.is_alphanumeric() { Some(c.to_ascii_lowercase()) } else { None };
        match c {
            Some(c) => {
                out.push(c);
                last_space = false;
            }
            None => {
                if !last_space {
                    out.push(' ');
                    last_space = true;
                }
            }
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Normalized similarity ratio in [0, 1] via character-bigram overlap
/// (Sorensen-Dice). Identical strings are always 1.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.len() < 2 || b_chars.len() < 2 {
        return 0.0;
    }

    let mut counts: FxHashMap<(char, char), i64> = FxHashMap::default();
    for w in a_chars.windows(2) {
        *counts.entry((w[0], w[1])).or_insert(0) += 1;
    }
    let mut overlap = 0i64;
    for w in b_chars.windows(2) {
        let entry = counts.entry((w[0], w[1])).or_insert(0);
        if *entry > 0 {
            *entry -= 1;
            overlap += 1;
        }
    }
    let total = (a_chars.len() - 1) + (b_chars.len() - 1);
    (2 * overlap) as f64 / total as f64
}

/// Stopword-filtered keyword set of a normalized text. Numeric tokens are
/// kept regardless of length ("type 2 diabetes" must differ from
/// "type 1 diabetes"); other tokens need more than two characters.
pub fn keywords(normalized: &str) -> FxHashSet<String> {
    normalized
        .split_whitespace()
        .filter(|t| {
            if t.chars().all(|c| c.is_ascii_digit()) {
                return true;
            }
            t.len() > 2 && !STOPWORDS.contains(t)
        })
        .map(str::to_string)
        .collect()
}

/// Split a free-text value into normalized phrases on list punctuation.
/// Used for feature tokens; empty phrases are dropped.
pub fn phrases(text: &str) -> Vec<String> {
    text.split(|c| matches!(c, ',' | ';' | '\n' | '/'))
        .map(normalize)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Sorted copy of a keyword set, for deterministic explanations.
pub fn sorted(set: &FxHashSet<String>) -> Vec<String> {
    let mut items: Vec<String> = set.iter().cloned().collect();
    items.sort_unstable();
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_case_punctuation_and_whitespace() {
        assert_eq!(normalize("  Ethylene   Oxide. "), "ethylene oxide");
        assert_eq!(normalize("Self-monitoring (SMBG)"), "self monitoring smbg");
    }

    #[test]
    fn identical_strings_have_similarity_one() {
        assert!((similarity("ethylene oxide", "ethylene oxide") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn disjoint_strings_have_low_similarity() {
        assert!(similarity("gamma irradiation", "steam") < 0.3);
    }

    #[test]
    fn keywords_keep_numbers_and_drop_stopwords() {
        let set = keywords("for the management of type 2 diabetes");
        assert!(set.contains("2"));
        assert!(set.contains("diabetes"));
        assert!(set.contains("management"));
        assert!(!set.contains("the"));
        assert!(!set.contains("of"));
    }

    #[test]
    fn phrases_split_on_list_punctuation() {
        let p = phrases("Bluetooth connectivity, backlit display; audible alarm");
        assert_eq!(
            p,
            vec!["bluetooth connectivity", "backlit display", "audible alarm"]
        );
    }
}
