//! Similarity Matcher — best-effort alignment of two unordered lists of
//! short text items (bullet points) by lexical overlap.
//!
//! The assignment is greedy and original-first by design: each original
//! item claims the highest-scoring unused modified item, earliest index
//! winning ties. Not a globally optimal bipartite matching — downstream
//! rendering depends on this exact, deterministic tie-break order.

use std::collections::HashSet;

/// Default acceptance threshold for a match.
pub const MATCH_THRESHOLD: f64 = 0.3;

/// One alignment record. Both indices present ⇒ matched pair; only
/// `original_index` ⇒ removed-only; only `modified_index` ⇒ added-only.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedItem {
    pub original_index: Option<usize>,
    pub modified_index: Option<usize>,
    pub original_value: Option<String>,
    pub modified_value: Option<String>,
}

/// Lexical overlap score between two items:
/// `|intersection| / max(|words_a|, |words_b|)` over lowercase word sets.
/// Asymmetric on purpose (max, not union, as denominator). 0.0 when
/// either side has no words.
pub fn similarity(a: &str, b: &str) -> f64 {
    let words_a: HashSet<String> = a.split_whitespace().map(|w| w.to_lowercase()).collect();
    let words_b: HashSet<String> = b.split_whitespace().map(|w| w.to_lowercase()).collect();

    let denom = words_a.len().max(words_b.len());
    if denom == 0 {
        return 0.0;
    }
    let intersection = words_a.intersection(&words_b).count();
    intersection as f64 / denom as f64
}

/// Aligns `original` against `modified` with the given threshold.
///
/// Output order: matched pairs in original-index order, then removed-only
/// records in original-index order, then added-only records in
/// modified-index order. Every original index lands in exactly one
/// matched-or-removed record and every modified index in exactly one
/// matched-or-added record.
pub fn match_items(original: &[String], modified: &[String], threshold: f64) -> Vec<MatchedItem> {
    let mut used = vec![false; modified.len()];
    let mut matched: Vec<MatchedItem> = Vec::new();
    let mut removed: Vec<MatchedItem> = Vec::new();

    for (oi, orig) in original.iter().enumerate() {
        let mut best_score = 0.0_f64;
        let mut best_index: Option<usize> = None;

        for (mi, modif) in modified.iter().enumerate() {
            if used[mi] {
                continue;
            }
            let score = similarity(orig, modif);
            // Strictly greater: the earliest modified index wins ties.
            if score > best_score {
                best_score = score;
                best_index = Some(mi);
            }
        }

        match best_index {
            Some(mi) if best_score >= threshold => {
                used[mi] = true;
                matched.push(MatchedItem {
                    original_index: Some(oi),
                    modified_index: Some(mi),
                    original_value: Some(orig.clone()),
                    modified_value: Some(modified[mi].clone()),
                });
            }
            _ => removed.push(MatchedItem {
                original_index: Some(oi),
                modified_index: None,
                original_value: Some(orig.clone()),
                modified_value: None,
            }),
        }
    }

    let added = modified
        .iter()
        .enumerate()
        .filter(|(mi, _)| !used[*mi])
        .map(|(mi, value)| MatchedItem {
            original_index: None,
            modified_index: Some(mi),
            original_value: None,
            modified_value: Some(value.clone()),
        });

    matched.extend(removed);
    matched.extend(added);
    matched
}
