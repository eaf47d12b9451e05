//! Axum route handlers for the Recommendations API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::engine::DEFAULT_MAX_RESULTS;
use crate::models::opportunity::Opportunity;
use crate::models::profile::StudentProfile;
use crate::models::recommendation::RankingResult;
use crate::state::AppState;

fn default_max_recommendations() -> usize {
    DEFAULT_MAX_RESULTS
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub student: StudentProfile,
    #[serde(default)]
    pub internships: Vec<Opportunity>,
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,
}

/// POST /recommendations
///
/// Ranks the submitted internships for the student and explains each match.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RankingResult>, AppError> {
    if request.internships.len() > state.config.max_candidates {
        return Err(AppError::Validation(format!(
            "at most {} internships can be ranked per request, got {}",
            state.config.max_candidates,
            request.internships.len()
        )));
    }

    info!(
        "Recommendation request for {}: {} internships, max {}",
        request.student.user_id,
        request.internships.len(),
        request.max_recommendations
    );

    let result = state
        .recommender
        .recommend(
            request.student,
            request.internships,
            request.max_recommendations,
        )
        .await?;

    Ok(Json(result))
}
