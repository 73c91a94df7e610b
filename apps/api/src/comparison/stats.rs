//! Shared comparison types: per-item status, change counters, and the
//! per-item record every section comparator produces.

use serde::{Deserialize, Serialize};

use crate::comparison::word_diff::{diff_words, WordDiffResult};

/// Status assigned to every compared item (bullet, skill, entry, summary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonStatus {
    Added,
    Removed,
    Modified,
    Unchanged,
}

/// Added / removed / modified counters at any granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStats {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl ChangeStats {
    pub fn merge(&mut self, other: &ChangeStats) {
        self.added += other.added;
        self.removed += other.removed;
        self.modified += other.modified;
    }

    pub fn any(&self) -> bool {
        self.added > 0 || self.removed > 0 || self.modified > 0
    }
}

/// One compared item. The presence/equality invariants:
/// `Added` ⇔ no original, `Removed` ⇔ no modified, `Modified` ⇔ both
/// present and not identical (with a word diff), `Unchanged` ⇔ identical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemComparison {
    pub original: Option<String>,
    pub modified: Option<String>,
    pub status: ComparisonStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_diff: Option<WordDiffResult>,
}

impl ItemComparison {
    /// Classifies a value pair and diffs it when both sides are present
    /// and differ. `(None, None)` is a caller contract violation handled
    /// as an unchanged empty item rather than a panic.
    pub fn from_pair(original: Option<&str>, modified: Option<&str>) -> Self {
        match (original, modified) {
            (None, Some(m)) => ItemComparison {
                original: None,
                modified: Some(m.to_string()),
                status: ComparisonStatus::Added,
                word_diff: None,
            },
            (Some(o), None) => ItemComparison {
                original: Some(o.to_string()),
                modified: None,
                status: ComparisonStatus::Removed,
                word_diff: None,
            },
            (Some(o), Some(m)) if o == m => ItemComparison {
                original: Some(o.to_string()),
                modified: Some(m.to_string()),
                status: ComparisonStatus::Unchanged,
                word_diff: None,
            },
            (Some(o), Some(m)) => ItemComparison {
                original: Some(o.to_string()),
                modified: Some(m.to_string()),
                status: ComparisonStatus::Modified,
                word_diff: Some(diff_words(o, m)),
            },
            (None, None) => ItemComparison {
                original: None,
                modified: None,
                status: ComparisonStatus::Unchanged,
                word_diff: None,
            },
        }
    }
}

/// Tallies item statuses into a `ChangeStats`.
pub fn count_statuses<'a>(items: impl IntoIterator<Item = &'a ComparisonStatus>) -> ChangeStats {
    let mut stats = ChangeStats::default();
    for status in items {
        match status {
            ComparisonStatus::Added => stats.added += 1,
            ComparisonStatus::Removed => stats.removed += 1,
            ComparisonStatus::Modified => stats.modified += 1,
            ComparisonStatus::Unchanged => {}
        }
    }
    stats
}
