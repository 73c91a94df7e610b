//! Summary comparator — a single string pair wrapped in one item.

use serde::{Deserialize, Serialize};

use crate::comparison::stats::{ChangeStats, ComparisonStatus, ItemComparison};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryComparison {
    pub item: ItemComparison,
    pub has_changes: bool,
    pub stats: ChangeStats,
}

/// Compares the summary strings. Absent summaries arrive as `None` and
/// are normalized to empty by the aggregator before this runs; callers
/// here always pass concrete strings.
///
/// Stats convention for a single-diff section: `added`/`removed` count
/// the changed runs of the diff, `modified` is 1 when anything changed.
pub fn compare_summary(original: &str, modified: &str) -> SummaryComparison {
    let item = match (original.is_empty(), modified.is_empty()) {
        (true, false) => ItemComparison::from_pair(None, Some(modified)),
        (false, true) => ItemComparison::from_pair(Some(original), None),
        _ => ItemComparison::from_pair(Some(original), Some(modified)),
    };

    let (added, removed, changed) = match (&item.word_diff, item.status) {
        (Some(diff), _) => (diff.added_count, diff.removed_count, diff.has_changes),
        (None, ComparisonStatus::Added) => (1, 0, true),
        (None, ComparisonStatus::Removed) => (0, 1, true),
        (None, _) => (0, 0, false),
    };

    SummaryComparison {
        item,
        has_changes: changed,
        stats: ChangeStats {
            added,
            removed,
            modified: usize::from(changed),
        },
    }
}
