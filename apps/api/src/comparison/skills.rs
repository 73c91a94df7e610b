//! Skills comparator — set comparison by exact name equality.
//!
//! There is no `modified` skill state: a renamed skill shows up as one
//! removal plus one addition. Matching is case-sensitive by default;
//! `case_insensitive` is an explicit, tested option for sources that
//! normalize casing inconsistently.

use serde::{Deserialize, Serialize};

use crate::comparison::stats::{count_statuses, ChangeStats, ComparisonStatus, ItemComparison};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsComparison {
    pub items: Vec<ItemComparison>,
    pub has_changes: bool,
    pub stats: ChangeStats,
}

/// Compares two skill lists. Output order: original-list order for
/// unchanged/removed skills, then modified-list order for added skills.
pub fn compare_skills(
    original: &[String],
    modified: &[String],
    case_insensitive: bool,
) -> SkillsComparison {
    let eq = |a: &str, b: &str| {
        if case_insensitive {
            a.eq_ignore_ascii_case(b)
        } else {
            a == b
        }
    };

    let mut items: Vec<ItemComparison> = Vec::new();

    for skill in original {
        let counterpart = modified.iter().find(|m| eq(skill, m));
        match counterpart {
            Some(m) => items.push(ItemComparison {
                original: Some(skill.clone()),
                modified: Some(m.clone()),
                status: ComparisonStatus::Unchanged,
                word_diff: None,
            }),
            None => items.push(ItemComparison {
                original: Some(skill.clone()),
                modified: None,
                status: ComparisonStatus::Removed,
                word_diff: None,
            }),
        }
    }

    for skill in modified {
        if !original.iter().any(|o| eq(o, skill)) {
            items.push(ItemComparison {
                original: None,
                modified: Some(skill.clone()),
                status: ComparisonStatus::Added,
                word_diff: None,
            });
        }
    }

    let stats = count_statuses(items.iter().map(|i| &i.status));
    SkillsComparison {
        has_changes: stats.any(),
        items,
        stats,
    }
}
