use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::comparison::aggregator::{compare_documents, CvComparisonResult};
use crate::comparison::education::{compare_education, EducationComparison};
use crate::comparison::experience::{compare_experiences, ExperiencesComparison};
use crate::comparison::skills::{compare_skills, SkillsComparison};
use crate::comparison::summary::{compare_summary, SummaryComparison};
use crate::errors::AppError;
use crate::models::document::ResumeDocument;
use crate::state::AppState;

/// Request body for both compare endpoints: the stored original document
/// and the current (rewritten) one, both already normalized.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareRequest {
    pub original: ResumeDocument,
    pub current: ResumeDocument,
}

/// Single-section response for `POST /api/v1/compare/:section`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SectionComparisonResponse {
    Summary(SummaryComparison),
    Experiences(ExperiencesComparison),
    Education(EducationComparison),
    Skills(SkillsComparison),
}

/// POST /api/v1/compare
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(req): Json<CompareRequest>,
) -> Json<CvComparisonResult> {
    let result = compare_documents(
        &req.original,
        &req.current,
        state.aligner.as_ref(),
        &state.options,
    );
    debug!(
        added = result.total_stats.added,
        removed = result.total_stats.removed,
        modified = result.total_stats.modified,
        "document comparison computed"
    );
    Json(result)
}

/// POST /api/v1/compare/:section
pub async fn handle_compare_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<SectionComparisonResponse>, AppError> {
    let response = match section.as_str() {
        "summary" => SectionComparisonResponse::Summary(compare_summary(
            req.original.summary.as_deref().unwrap_or(""),
            req.current.summary.as_deref().unwrap_or(""),
        )),
        "experiences" => SectionComparisonResponse::Experiences(compare_experiences(
            &req.original.experiences,
            &req.current.experiences,
            state.aligner.as_ref(),
            state.options.match_threshold,
        )),
        "education" => SectionComparisonResponse::Education(compare_education(
            &req.original.education,
            &req.current.education,
            state.aligner.as_ref(),
        )),
        "skills" => SectionComparisonResponse::Skills(compare_skills(
            &req.original.skills,
            &req.current.skills,
            state.options.case_insensitive_skills,
        )),
        other => {
            return Err(AppError::Validation(format!(
                "Unknown section '{other}' (expected summary, experiences, education, or skills)"
            )))
        }
    };
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::aggregator::CompareOptions;
    use crate::comparison::aligner::aligner_from_strategy;
    use crate::config::Config;

    fn test_state() -> AppState {
        let options = CompareOptions::default();
        AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                match_threshold: options.match_threshold,
                case_insensitive_skills: false,
                align_strategy: "id".to_string(),
            },
            options,
            aligner: aligner_from_strategy("id", options.match_threshold).unwrap(),
        }
    }

    fn request(original_summary: &str, current_summary: &str) -> CompareRequest {
        CompareRequest {
            original: ResumeDocument {
                summary: Some(original_summary.to_string()),
                ..ResumeDocument::default()
            },
            current: ResumeDocument {
                summary: Some(current_summary.to_string()),
                ..ResumeDocument::default()
            },
        }
    }

    #[tokio::test]
    async fn test_full_compare_returns_totals() {
        let Json(result) = handle_compare(
            State(test_state()),
            Json(request("Led a team of 5", "Led a team of 8")),
        )
        .await;
        assert!(result.has_changes);
        assert_eq!(result.total_stats.modified, 1);
    }

    #[tokio::test]
    async fn test_section_route_summary() {
        let result = handle_compare_section(
            State(test_state()),
            Path("summary".to_string()),
            Json(request("same", "same")),
        )
        .await
        .unwrap();
        match result.0 {
            SectionComparisonResponse::Summary(summary) => assert!(!summary.has_changes),
            _ => panic!("expected summary comparison"),
        }
    }

    #[tokio::test]
    async fn test_section_route_rejects_unknown_name() {
        let err = handle_compare_section(
            State(test_state()),
            Path("certifications".to_string()),
            Json(request("", "")),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
