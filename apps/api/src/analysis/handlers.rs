//! Axum route handlers for the Resume Analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::analysis::GapAnalysisResult;
use crate::state::AppState;

fn default_language() -> String {
    "english".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ResumeAnalysisRequest {
    pub resume_text: String,
    pub target_sector: String,
    /// Accepted for callers; analysis is language-agnostic.
    #[serde(default = "default_language")]
    #[allow(dead_code)]
    pub language: String,
}

/// POST /resume-analysis
pub async fn handle_resume_analysis(
    State(state): State<AppState>,
    Json(request): Json<ResumeAnalysisRequest>,
) -> Result<Json<GapAnalysisResult>, AppError> {
    let result = state
        .gap_analyzer
        .analyze(&request.resume_text, &request.target_sector);
    Ok(Json(result))
}
