//! Experiences comparator — aligns entries, diffs their title/company
//! fields, and matches + diffs their bullet lists.

use serde::{Deserialize, Serialize};

use crate::comparison::aligner::{AlignKey, EntryAligner};
use crate::comparison::matcher::match_items;
use crate::comparison::stats::{count_statuses, ChangeStats, ComparisonStatus, ItemComparison};
use crate::comparison::word_diff::{diff_words, WordDiffResult};
use crate::models::document::ExperienceEntry;

/// Bullet-level counters, tracked separately from the parent entry's
/// own status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletStats {
    pub bullets_added: usize,
    pub bullets_modified: usize,
    pub bullets_removed: usize,
}

impl BulletStats {
    pub fn merge(&mut self, other: &BulletStats) {
        self.bullets_added += other.bullets_added;
        self.bullets_modified += other.bullets_modified;
        self.bullets_removed += other.bullets_removed;
    }

    pub fn as_change_stats(&self) -> ChangeStats {
        ChangeStats {
            added: self.bullets_added,
            removed: self.bullets_removed,
            modified: self.bullets_modified,
        }
    }
}

/// One aligned experience entry with its field diffs and nested bullet
/// comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceItemComparison {
    pub original: Option<ExperienceEntry>,
    pub modified: Option<ExperienceEntry>,
    pub status: ComparisonStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_diff: Option<WordDiffResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_diff: Option<WordDiffResult>,
    pub bullets: Vec<ItemComparison>,
    pub bullet_stats: BulletStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperiencesComparison {
    pub items: Vec<ExperienceItemComparison>,
    pub has_changes: bool,
    /// Entry-level counts; bullets are tallied separately below.
    pub stats: ChangeStats,
    pub bullet_stats: BulletStats,
}

pub fn compare_experiences(
    original: &[ExperienceEntry],
    modified: &[ExperienceEntry],
    aligner: &dyn EntryAligner,
    bullet_threshold: f64,
) -> ExperiencesComparison {
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

    let mut items: Vec<ExperienceItemComparison> = Vec::new();
    let mut section_bullets = BulletStats::default();

    for pair in aligner.align(&original_keys, &modified_keys) {
        let item = match (pair.original_index, pair.modified_index) {
            (Some(oi), Some(mi)) => compare_entry_pair(&original[oi], &modified[mi], bullet_threshold),
            (Some(oi), None) => removed_entry(&original[oi]),
            (None, Some(mi)) => added_entry(&modified[mi]),
            (None, None) => continue,
        };
        section_bullets.merge(&item.bullet_stats);
        items.push(item);
    }

    let stats = count_statuses(items.iter().map(|i| &i.status));
    let has_changes = stats.any()
        || section_bullets.bullets_added > 0
        || section_bullets.bullets_removed > 0
        || section_bullets.bullets_modified > 0;

    ExperiencesComparison {
        items,
        has_changes,
        stats,
        bullet_stats: section_bullets,
    }
}

fn compare_entry_pair(
    original: &ExperienceEntry,
    modified: &ExperienceEntry,
    bullet_threshold: f64,
) -> ExperienceItemComparison {
    let title_diff = field_diff(&original.title, &modified.title);
    let company_diff = field_diff(&original.company, &modified.company);
    let bullets = compare_bullets(&original.bullets, &modified.bullets, bullet_threshold);
    let bullet_stats = tally_bullets(&bullets);

    let fields_changed = title_diff.is_some() || company_diff.is_some();
    let bullets_changed = bullet_stats != BulletStats::default();
    let status = if fields_changed || bullets_changed {
        ComparisonStatus::Modified
    } else {
        ComparisonStatus::Unchanged
    };

    ExperienceItemComparison {
        original: Some(original.clone()),
        modified: Some(modified.clone()),
        status,
        title_diff,
        company_diff,
        bullets,
        bullet_stats,
    }
}

fn removed_entry(original: &ExperienceEntry) -> ExperienceItemComparison {
    let bullets: Vec<ItemComparison> = original
        .bullets
        .iter()
        .map(|b| ItemComparison::from_pair(Some(b), None))
        .collect();
    let bullet_stats = tally_bullets(&bullets);
    ExperienceItemComparison {
        original: Some(original.clone()),
        modified: None,
        status: ComparisonStatus::Removed,
        title_diff: None,
        company_diff: None,
        bullets,
        bullet_stats,
    }
}

fn added_entry(modified: &ExperienceEntry) -> ExperienceItemComparison {
    let bullets: Vec<ItemComparison> = modified
        .bullets
        .iter()
        .map(|b| ItemComparison::from_pair(None, Some(b)))
        .collect();
    let bullet_stats = tally_bullets(&bullets);
    ExperienceItemComparison {
        original: None,
        modified: Some(modified.clone()),
        status: ComparisonStatus::Added,
        title_diff: None,
        company_diff: None,
        bullets,
        bullet_stats,
    }
}

/// Diffs a text field, keeping the result only when something changed.
fn field_diff(original: &str, modified: &str) -> Option<WordDiffResult> {
    let diff = diff_words(original, modified);
    diff.has_changes.then_some(diff)
}

/// Matches the two bullet lists, then diffs each matched pair.
fn compare_bullets(
    original: &[String],
    modified: &[String],
    threshold: f64,
) -> Vec<ItemComparison> {
    match_items(original, modified, threshold)
        .into_iter()
        .map(|record| {
            ItemComparison::from_pair(
                record.original_value.as_deref(),
                record.modified_value.as_deref(),
            )
        })
        .collect()
}

fn tally_bullets(bullets: &[ItemComparison]) -> BulletStats {
    let counts = count_statuses(bullets.iter().map(|b| &b.status));
    BulletStats {
        bullets_added: counts.added,
        bullets_modified: counts.modified,
        bullets_removed: counts.removed,
    }
}
