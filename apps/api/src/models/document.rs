//! Canonical document shape the comparison engine consumes. Legacy
//! free-text transcripts are converted into this shape by an external
//! parser before they reach this service — only normalized structured
//! documents arrive here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A normalized résumé document. Every field defaults so absent optional
/// sections deserialize to empty rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeDocument {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub experiences: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// One work-experience entry. `id` is the stable identifier when the
/// data source supplies one; legacy imports leave it unset and entry
/// alignment falls back to position or text similarity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// One education entry. Same identifier semantics as `ExperienceEntry`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub field: String,
}

impl ExperienceEntry {
    /// Text used by similarity-based alignment when no id is available.
    pub fn align_text(&self) -> String {
        format!("{} {}", self.title, self.company)
    }
}

impl EducationEntry {
    pub fn align_text(&self) -> String {
        format!("{} {} {}", self.degree, self.institution, self.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_to_empty() {
        let doc: ResumeDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.summary.is_none());
        assert!(doc.experiences.is_empty());
        assert!(doc.education.is_empty());
        assert!(doc.skills.is_empty());
    }

    #[test]
    fn test_entry_without_id_deserializes() {
        let entry: ExperienceEntry = serde_json::from_str(
            r#"{"title":"Engineer","company":"Acme","bullets":["Did things"]}"#,
        )
        .unwrap();
        assert!(entry.id.is_none());
        assert_eq!(entry.bullets.len(), 1);
    }
}
