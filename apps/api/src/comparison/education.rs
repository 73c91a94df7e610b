//! Education comparator — same alignment shape as experiences, with
//! per-field diffs for degree/institution/field and no bullet
//! sub-structure.

use serde::{Deserialize, Serialize};

use crate::comparison::aligner::{AlignKey, EntryAligner};
use crate::comparison::stats::{count_statuses, ChangeStats, ComparisonStatus};
use crate::comparison::word_diff::{diff_words, WordDiffResult};
use crate::models::document::EducationEntry;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationItemComparison {
    pub original: Option<EducationEntry>,
    pub modified: Option<EducationEntry>,
    pub status: ComparisonStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_diff: Option<WordDiffResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_diff: Option<WordDiffResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_diff: Option<WordDiffResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationComparison {
    pub items: Vec<EducationItemComparison>,
    pub has_changes: bool,
    pub stats: ChangeStats,
}

pub fn compare_education(
    original: &[EducationEntry],
    modified: &[EducationEntry],
    aligner: &dyn EntryAligner,
) -> EducationComparison {
    let original_keys: Vec<AlignKey> = original
        .iter()
        .map(|e| AlignKey {
            id: e.id,
            text: e.align_text(),
        })
        .collect();
    let modified_keys: Vec<AlignKey> = modified
        .iter()
        .map(|e| AlignKey {
            id: e.id,
            text: e.align_text(),
        })
        .collect();

    let mut items: Vec<EducationItemComparison> = Vec::new();
    for pair in aligner.align(&original_keys, &modified_keys) {
        let item = match (pair.original_index, pair.modified_index) {
            (Some(oi), Some(mi)) => compare_entry_pair(&original[oi], &modified[mi]),
            (Some(oi), None) => EducationItemComparison {
                original: Some(original[oi].clone()),
                modified: None,
                status: ComparisonStatus::Removed,
                degree_diff: None,
                institution_diff: None,
                field_diff: None,
            },
            (None, Some(mi)) => EducationItemComparison {
                original: None,
                modified: Some(modified[mi].clone()),
                status: ComparisonStatus::Added,
                degree_diff: None,
                institution_diff: None,
                field_diff: None,
            },
            (None, None) => continue,
        };
        items.push(item);
    }

    let stats = count_statuses(items.iter().map(|i| &i.status));
    EducationComparison {
        has_changes: stats.any(),
        items,
        stats,
    }
}

fn compare_entry_pair(original: &EducationEntry, modified: &EducationEntry) -> EducationItemComparison {
    let degree_diff = field_diff(&original.degree, &modified.degree);
    let institution_diff = field_diff(&original.institution, &modified.institution);
    let field_diff_ = field_diff(&original.field, &modified.field);

    let status = if degree_diff.is_some() || institution_diff.is_some() || field_diff_.is_some() {
        ComparisonStatus::Modified
    } else {
        ComparisonStatus::Unchanged
    };

    EducationItemComparison {
        original: Some(original.clone()),
        modified: Some(modified.clone()),
        status,
        degree_diff,
        institution_diff,
        field_diff: field_diff_,
    }
}

fn field_diff(original: &str, modified: &str) -> Option<WordDiffResult> {
    let diff = diff_words(original, modified);
    diff.has_changes.then_some(diff)
}
