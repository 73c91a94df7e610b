//! Comparison Aggregator — runs the four section comparators over a
//! document pair and rolls their counters into document-wide totals.
//!
//! Pure and synchronous: no I/O, no shared state, inputs never mutated.
//! Recomputation is the only update path; callers that compare on every
//! edit should memoize by input identity on their side.

use serde::{Deserialize, Serialize};

use crate::comparison::aligner::EntryAligner;
use crate::comparison::education::{compare_education, EducationComparison};
use crate::comparison::experience::{compare_experiences, ExperiencesComparison};
use crate::comparison::matcher::MATCH_THRESHOLD;
use crate::comparison::skills::{compare_skills, SkillsComparison};
use crate::comparison::stats::ChangeStats;
use crate::comparison::summary::{compare_summary, SummaryComparison};
use crate::models::document::ResumeDocument;

/// Engine-level knobs. Defaults match the documented behavior: 0.3
/// match threshold, case-sensitive skill names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompareOptions {
    pub match_threshold: f64,
    pub case_insensitive_skills: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            match_threshold: MATCH_THRESHOLD,
            case_insensitive_skills: false,
        }
    }
}

/// The aggregate result. Sections empty on both sides are omitted
/// rather than reported as empty comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvComparisonResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryComparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiences: Option<ExperiencesComparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<EducationComparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<SkillsComparison>,
    pub total_stats: ChangeStats,
    pub has_changes: bool,
}

/// Compares two canonical documents section by section.
pub fn compare_documents(
    original: &ResumeDocument,
    modified: &ResumeDocument,
    aligner: &dyn EntryAligner,
    options: &CompareOptions,
) -> CvComparisonResult {
    let original_summary = original.summary.as_deref().unwrap_or("");
    let modified_summary = modified.summary.as_deref().unwrap_or("");

    let summary = (!original_summary.is_empty() || !modified_summary.is_empty())
        .then(|| compare_summary(original_summary, modified_summary));

    let experiences = (!original.experiences.is_empty() || !modified.experiences.is_empty())
        .then(|| {
            compare_experiences(
                &original.experiences,
                &modified.experiences,
                aligner,
                options.match_threshold,
            )
        });

    let education = (!original.education.is_empty() || !modified.education.is_empty())
        .then(|| compare_education(&original.education, &modified.education, aligner));

    let skills = (!original.skills.is_empty() || !modified.skills.is_empty()).then(|| {
        compare_skills(
            &original.skills,
            &modified.skills,
            options.case_insensitive_skills,
        )
    });

    let mut total_stats = ChangeStats::default();
    if let Some(s) = &summary {
        total_stats.merge(&s.stats);
    }
    if let Some(e) = &experiences {
        total_stats.merge(&e.stats);
        total_stats.merge(&e.bullet_stats.as_change_stats());
    }
    if let Some(e) = &education {
        total_stats.merge(&e.stats);
    }
    if let Some(s) = &skills {
        total_stats.merge(&s.stats);
    }

    CvComparisonResult {
        summary,
        experiences,
        education,
        skills,
        has_changes: total_stats.any(),
        total_stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::aligner::IdAligner;
    use crate::models::document::{EducationEntry, ExperienceEntry};

    fn aligner() -> IdAligner {
        IdAligner {
            threshold: MATCH_THRESHOLD,
        }
    }

    fn doc(
        summary: Option<&str>,
        experiences: Vec<ExperienceEntry>,
        education: Vec<EducationEntry>,
        skills: &[&str],
    ) -> ResumeDocument {
        ResumeDocument {
            summary: summary.map(|s| s.to_string()),
            experiences,
            education,
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn experience(title: &str, company: &str, bullets: &[&str]) -> ExperienceEntry {
        ExperienceEntry {
            id: None,
            title: title.to_string(),
            company: company.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
        }
    }

    #[test]
    fn test_identical_documents_no_changes() {
        let original = doc(
            Some("Backend engineer"),
            vec![experience("Engineer", "Acme", &["Shipped things"])],
            vec![],
            &["Rust"],
        );
        let result = compare_documents(&original, &original.clone(), &aligner(), &CompareOptions::default());
        assert!(!result.has_changes);
        assert_eq!(result.total_stats, ChangeStats::default());
        assert!(result.education.is_none());
        assert!(result.summary.is_some());
    }

    #[test]
    fn test_empty_documents_omit_all_sections() {
        let result = compare_documents(
            &ResumeDocument::default(),
            &ResumeDocument::default(),
            &aligner(),
            &CompareOptions::default(),
        );
        assert!(result.summary.is_none());
        assert!(result.experiences.is_none());
        assert!(result.education.is_none());
        assert!(result.skills.is_none());
        assert!(!result.has_changes);
    }

    #[test]
    fn test_totals_include_bullets_and_skills() {
        let original = doc(
            Some("Led a team of 5 engineers"),
            vec![experience("Engineer", "Acme", &["Built the checkout flow"])],
            vec![],
            &["JavaScript", "Node"],
        );
        let modified = doc(
            Some("Led a team of 8 engineers"),
            vec![experience(
                "Engineer",
                "Acme",
                &["Built the checkout flow end to end", "Added monitoring"],
            )],
            vec![],
            &["JavaScript", "TypeScript"],
        );
        let result = compare_documents(&original, &modified, &aligner(), &CompareOptions::default());

        // Summary: 1 added run, 1 removed run, modified once.
        let summary = result.summary.as_ref().unwrap();
        assert_eq!(
            summary.stats,
            ChangeStats {
                added: 1,
                removed: 1,
                modified: 1
            }
        );

        // Experiences: one modified entry; bullets 1 modified + 1 added.
        let experiences = result.experiences.as_ref().unwrap();
        assert_eq!(experiences.stats.modified, 1);
        assert_eq!(experiences.bullet_stats.bullets_modified, 1);
        assert_eq!(experiences.bullet_stats.bullets_added, 1);

        // Skills: Node removed, TypeScript added.
        let skills = result.skills.as_ref().unwrap();
        assert_eq!(
            skills.stats,
            ChangeStats {
                added: 1,
                removed: 1,
                modified: 0
            }
        );

        // Totals are the element-wise sum of everything above.
        assert_eq!(
            result.total_stats,
            ChangeStats {
                added: 1 + 1 + 1,
                removed: 1 + 1,
                modified: 1 + 1 + 1
            }
        );
        assert!(result.has_changes);
    }

    #[test]
    fn test_one_sided_summary_still_compared() {
        let original = doc(None, vec![], vec![], &[]);
        let modified = doc(Some("Brand new summary"), vec![], vec![], &[]);
        let result = compare_documents(&original, &modified, &aligner(), &CompareOptions::default());
        let summary = result.summary.unwrap();
        assert!(summary.has_changes);
        assert_eq!(summary.stats.added, 1);
    }

    #[test]
    fn test_case_insensitive_skills_option_flows_through() {
        let original = doc(None, vec![], vec![], &["rust"]);
        let modified = doc(None, vec![], vec![], &["Rust"]);

        let sensitive = compare_documents(&original, &modified, &aligner(), &CompareOptions::default());
        assert!(sensitive.has_changes);

        let insensitive = compare_documents(
            &original,
            &modified,
            &aligner(),
            &CompareOptions {
                case_insensitive_skills: true,
                ..CompareOptions::default()
            },
        );
        assert!(!insensitive.has_changes);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let original = doc(Some("text"), vec![experience("T", "C", &["b"])], vec![], &["s"]);
        let before = serde_json::to_string(&original).unwrap();
        let _ = compare_documents(&original, &original.clone(), &aligner(), &CompareOptions::default());
        assert_eq!(serde_json::to_string(&original).unwrap(), before);
    }
}
