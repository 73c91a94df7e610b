//! Word Diff Engine — minimal-edit, word-granularity diff between two
//! strings.
//!
//! Tokenizes each string into alternating word/whitespace runs (lossless:
//! concatenating the tokens reproduces the input), aligns the token
//! sequences with a classic O(n·m) dynamic-programming LCS, and coalesces
//! same-kind runs into segments. Pure and deterministic — same inputs,
//! same output, every call.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Unchanged,
    Added,
    Removed,
}

/// A contiguous run of one kind within a diff. `value` carries its own
/// whitespace so consumers can concatenate segments verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    pub kind: SegmentKind,
    pub value: String,
}

/// Result of one string-pair diff. `added_count`/`removed_count` count
/// segments (changed runs), not words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDiffResult {
    pub segments: Vec<DiffSegment>,
    pub added_count: usize,
    pub removed_count: usize,
    pub has_changes: bool,
}

impl WordDiffResult {
    /// Reconstructs the original string (unchanged + removed segments).
    pub fn original_text(&self) -> String {
        self.segments
            .iter()
            .filter(|s| s.kind != SegmentKind::Added)
            .map(|s| s.value.as_str())
            .collect()
    }

    /// Reconstructs the modified string (unchanged + added segments).
    pub fn modified_text(&self) -> String {
        self.segments
            .iter()
            .filter(|s| s.kind != SegmentKind::Removed)
            .map(|s| s.value.as_str())
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tokenization
// ────────────────────────────────────────────────────────────────────────────

/// Splits `text` into alternating runs of non-whitespace and whitespace.
/// Lossless: the concatenation of all tokens is exactly `text`.
fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut prev_ws: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let is_ws = ch.is_whitespace();
        match prev_ws {
            Some(p) if p == is_ws => {}
            Some(_) => {
                tokens.push(&text[start..idx]);
                start = idx;
                prev_ws = Some(is_ws);
            }
            None => prev_ws = Some(is_ws),
        }
    }
    if !text.is_empty() {
        tokens.push(&text[start..]);
    }
    tokens
}

// ────────────────────────────────────────────────────────────────────────────
// LCS diff
// ────────────────────────────────────────────────────────────────────────────

/// Computes the word-level diff between `original` and `modified`.
///
/// At each edit point removed text precedes the added text that replaces
/// it. Identical inputs yield a single unchanged segment (none at all
/// when both are empty); fully disjoint inputs yield one removed segment
/// followed by one added segment.
pub fn diff_words(original: &str, modified: &str) -> WordDiffResult {
    let a = tokenize(original);
    let b = tokenize(modified);
    let (n, m) = (a.len(), b.len());

    // dp[i][j] = LCS length of a[..i] and b[..j], flattened row-major.
    let width = m + 1;
    let mut dp = vec![0usize; (n + 1) * width];
    for i in 1..=n {
        for j in 1..=m {
            dp[i * width + j] = if a[i - 1] == b[j - 1] {
                dp[(i - 1) * width + (j - 1)] + 1
            } else {
                dp[(i - 1) * width + j].max(dp[i * width + (j - 1)])
            };
        }
    }

    // Backtrack from the corner; reversing afterwards puts removed runs
    // before the added runs at the same edit point.
    let mut ops: Vec<(SegmentKind, &str)> = Vec::with_capacity(n + m);
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            ops.push((SegmentKind::Unchanged, a[i - 1]));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || dp[i * width + (j - 1)] >= dp[(i - 1) * width + j]) {
            ops.push((SegmentKind::Added, b[j - 1]));
            j -= 1;
        } else {
            ops.push((SegmentKind::Removed, a[i - 1]));
            i -= 1;
        }
    }
    ops.reverse();

    // Coalesce consecutive same-kind tokens into segments.
    let mut segments: Vec<DiffSegment> = Vec::new();
    for (kind, token) in ops {
        match segments.last_mut() {
            Some(seg) if seg.kind == kind => seg.value.push_str(token),
            _ => segments.push(DiffSegment {
                kind,
                value: token.to_string(),
            }),
        }
    }

    let added_count = segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Added)
        .count();
    let removed_count = segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Removed)
        .count();

    WordDiffResult {
        segments,
        added_count,
        removed_count,
        has_changes: added_count > 0 || removed_count > 0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(kind: SegmentKind, value: &str) -> DiffSegment {
        DiffSegment {
            kind,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_tokenize_is_lossless() {
        for text in [
            "Led a team of 5 engineers",
            "  leading spaces",
            "trailing tab\t",
            "double  spaces\nand a newline",
            "",
            "one",
        ] {
            assert_eq!(tokenize(text).concat(), text);
        }
    }

    #[test]
    fn test_word_replacement_with_trailing_addition() {
        let diff = diff_words(
            "Led a team of 5 engineers",
            "Led a team of 8 engineers and designers",
        );
        assert_eq!(
            diff.segments,
            vec![
                seg(SegmentKind::Unchanged, "Led a team of "),
                seg(SegmentKind::Removed, "5"),
                seg(SegmentKind::Added, "8"),
                seg(SegmentKind::Unchanged, " engineers"),
                seg(SegmentKind::Added, " and designers"),
            ]
        );
        assert_eq!(diff.added_count, 2);
        assert_eq!(diff.removed_count, 1);
        assert!(diff.has_changes);
    }

    #[test]
    fn test_identical_strings_single_unchanged_segment() {
        let diff = diff_words("Shipped the payments service", "Shipped the payments service");
        assert_eq!(
            diff.segments,
            vec![seg(SegmentKind::Unchanged, "Shipped the payments service")]
        );
        assert_eq!(diff.added_count, 0);
        assert_eq!(diff.removed_count, 0);
        assert!(!diff.has_changes);
    }

    #[test]
    fn test_both_empty_yields_no_segments() {
        let diff = diff_words("", "");
        assert!(diff.segments.is_empty());
        assert!(!diff.has_changes);
    }

    #[test]
    fn test_disjoint_strings_removed_then_added() {
        let diff = diff_words("alpha beta", "gamma delta");
        assert_eq!(
            diff.segments,
            vec![
                seg(SegmentKind::Removed, "alpha beta"),
                seg(SegmentKind::Added, "gamma delta"),
            ]
        );
        assert_eq!(diff.added_count, 1);
        assert_eq!(diff.removed_count, 1);
    }

    #[test]
    fn test_empty_original_is_pure_addition() {
        let diff = diff_words("", "Brand new summary");
        assert_eq!(diff.segments, vec![seg(SegmentKind::Added, "Brand new summary")]);
        assert_eq!(diff.added_count, 1);
        assert_eq!(diff.removed_count, 0);
    }

    #[test]
    fn test_empty_modified_is_pure_removal() {
        let diff = diff_words("Dropped summary", "");
        assert_eq!(diff.segments, vec![seg(SegmentKind::Removed, "Dropped summary")]);
        assert_eq!(diff.removed_count, 1);
    }

    #[test]
    fn test_round_trip_both_sides() {
        let pairs = [
            ("Led a team of 5 engineers", "Led a team of 8 engineers and designers"),
            ("", "added only"),
            ("removed only", ""),
            ("same text", "same text"),
            ("a  double  spaced  line", "a double spaced line"),
            ("tabs\tand\nnewlines kept", "tabs and newlines kept"),
        ];
        for (a, b) in pairs {
            let diff = diff_words(a, b);
            assert_eq!(diff.original_text(), a, "original round-trip for {a:?} vs {b:?}");
            assert_eq!(diff.modified_text(), b, "modified round-trip for {a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_whitespace_runs_are_compared_as_tokens() {
        // Collapsing a double space is a real change and must round-trip.
        let diff = diff_words("a  b", "a b");
        assert!(diff.has_changes);
        assert_eq!(diff.original_text(), "a  b");
        assert_eq!(diff.modified_text(), "a b");
    }

    #[test]
    fn test_deterministic_across_calls() {
        let first = diff_words("Built REST APIs in Go", "Built gRPC APIs in Rust");
        let second = diff_words("Built REST APIs in Go", "Built gRPC APIs in Rust");
        assert_eq!(first, second);
    }

    #[test]
    fn test_removed_precedes_added_at_each_edit_point() {
        let diff = diff_words("maintained legacy billing", "maintained modern billing");
        let kinds: Vec<SegmentKind> = diff.segments.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Unchanged,
                SegmentKind::Removed,
                SegmentKind::Added,
                SegmentKind::Unchanged,
            ]
        );
    }
}
