//! Entry alignment — pluggable, trait-based policy that pairs original
//! experience/education entries with their modified counterparts.
//!
//! Structured documents carry stable entry ids; legacy imports do not.
//! The strategy is therefore injectable rather than hard-coded:
//! `AppState` holds an `Arc<dyn EntryAligner>`, selected at startup via
//! `ALIGN_STRATEGY`.

use std::sync::Arc;

use anyhow::{bail, Result};
use uuid::Uuid;

use crate::comparison::matcher::{match_items, similarity};

/// What an aligner sees of an entry: its optional stable id and the text
/// used for similarity-based pairing.
#[derive(Debug, Clone)]
pub struct AlignKey {
    pub id: Option<Uuid>,
    pub text: String,
}

/// One alignment decision. Both indices ⇒ paired entry; original only ⇒
/// removed entry; modified only ⇒ added entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    pub original_index: Option<usize>,
    pub modified_index: Option<usize>,
}

/// The alignment policy trait. Implementations must be deterministic and
/// emit pairs in matched (original order), removed (original order),
/// added (modified order) sequence.
pub trait EntryAligner: Send + Sync {
    fn align(&self, original: &[AlignKey], modified: &[AlignKey]) -> Vec<AlignedPair>;
}

/// Builds the aligner selected by config.
pub fn aligner_from_strategy(strategy: &str, threshold: f64) -> Result<Arc<dyn EntryAligner>> {
    match strategy {
        "id" => Ok(Arc::new(IdAligner { threshold })),
        "positional" => Ok(Arc::new(PositionalAligner)),
        "similarity" => Ok(Arc::new(SimilarityAligner { threshold })),
        other => bail!("Unknown ALIGN_STRATEGY '{other}' (expected id, positional, or similarity)"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// IdAligner — default: stable ids first, similarity fallback
// ────────────────────────────────────────────────────────────────────────────

/// Pairs entries whose ids match, then runs greedy similarity over the
/// leftovers (covers mixed documents where only some entries carry ids).
pub struct IdAligner {
    pub threshold: f64,
}

impl EntryAligner for IdAligner {
    fn align(&self, original: &[AlignKey], modified: &[AlignKey]) -> Vec<AlignedPair> {
        let mut orig_match: Vec<Option<usize>> = vec![None; original.len()];
        let mut used = vec![false; modified.len()];

        // Pass 1: exact id pairs.
        for (oi, okey) in original.iter().enumerate() {
            let Some(oid) = okey.id else { continue };
            for (mi, mkey) in modified.iter().enumerate() {
                if !used[mi] && mkey.id == Some(oid) {
                    orig_match[oi] = Some(mi);
                    used[mi] = true;
                    break;
                }
            }
        }

        // Pass 2: greedy similarity over whatever is left.
        for (oi, okey) in original.iter().enumerate() {
            if orig_match[oi].is_some() {
                continue;
            }
            let mut best_score = 0.0_f64;
            let mut best_index: Option<usize> = None;
            for (mi, mkey) in modified.iter().enumerate() {
                if used[mi] {
                    continue;
                }
                let score = similarity(&okey.text, &mkey.text);
                if score > best_score {
                    best_score = score;
                    best_index = Some(mi);
                }
            }
            if let Some(mi) = best_index {
                if best_score >= self.threshold {
                    orig_match[oi] = Some(mi);
                    used[mi] = true;
                }
            }
        }

        collect_pairs(&orig_match, &used)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PositionalAligner — index-by-index pairing
// ────────────────────────────────────────────────────────────────────────────

/// Pairs entries strictly by position. Extras on either side become
/// removed/added entries. Useful for sources that preserve entry order
/// but carry no ids.
pub struct PositionalAligner;

impl EntryAligner for PositionalAligner {
    fn align(&self, original: &[AlignKey], modified: &[AlignKey]) -> Vec<AlignedPair> {
        let paired = original.len().min(modified.len());
        let mut pairs: Vec<AlignedPair> = (0..paired)
            .map(|i| AlignedPair {
                original_index: Some(i),
                modified_index: Some(i),
            })
            .collect();
        pairs.extend((paired..original.len()).map(|i| AlignedPair {
            original_index: Some(i),
            modified_index: None,
        }));
        pairs.extend((paired..modified.len()).map(|i| AlignedPair {
            original_index: None,
            modified_index: Some(i),
        }));
        pairs
    }
}

// ────────────────────────────────────────────────────────────────────────────
// SimilarityAligner — greedy lexical overlap only
// ────────────────────────────────────────────────────────────────────────────

/// Ignores ids entirely and aligns by greedy lexical overlap of the
/// entries' alignment text (title + company, degree + institution + field).
pub struct SimilarityAligner {
    pub threshold: f64,
}

impl EntryAligner for SimilarityAligner {
    fn align(&self, original: &[AlignKey], modified: &[AlignKey]) -> Vec<AlignedPair> {
        let original_texts: Vec<String> = original.iter().map(|k| k.text.clone()).collect();
        let modified_texts: Vec<String> = modified.iter().map(|k| k.text.clone()).collect();
        match_items(&original_texts, &modified_texts, self.threshold)
            .into_iter()
            .map(|record| AlignedPair {
                original_index: record.original_index,
                modified_index: record.modified_index,
            })
            .collect()
    }
}

/// Emits matched pairs in original order, then unmatched originals, then
/// unused modified entries.
fn collect_pairs(orig_match: &[Option<usize>], used: &[bool]) -> Vec<AlignedPair> {
    let mut pairs: Vec<AlignedPair> = Vec::new();
    for (oi, mi) in orig_match.iter().enumerate() {
        if let Some(mi) = mi {
            pairs.push(AlignedPair {
                original_index: Some(oi),
                modified_index: Some(*mi),
            });
        }
    }
    for (oi, mi) in orig_match.iter().enumerate() {
        if mi.is_none() {
            pairs.push(AlignedPair {
                original_index: Some(oi),
                modified_index: None,
            });
        }
    }
    for (mi, taken) in used.iter().enumerate() {
        if !taken {
            pairs.push(AlignedPair {
                original_index: None,
                modified_index: Some(mi),
            });
        }
    }
    pairs
}
