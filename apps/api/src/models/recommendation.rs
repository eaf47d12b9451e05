use serde::{Deserialize, Serialize};

/// One ranked opportunity. Scores are on the 0–100 display scale, rounded to 2 decimals.
/// `match_score` carries the boosts and may exceed 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub internship_id: String,
    pub title: String,
    pub company: String,
    pub match_score: f64,
    pub skill_match_score: f64,
    pub preference_match_score: f64,
    pub content_similarity_score: f64,
    pub common_skills: Vec<String>,
    pub reasoning: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationQuality {
    High,
    Medium,
    Low,
}

impl RecommendationQuality {
    /// high above 70, medium above 50, otherwise low.
    pub fn from_mean(mean: f64) -> Self {
        if mean > 70.0 {
            RecommendationQuality::High
        } else if mean > 50.0 {
            RecommendationQuality::Medium
        } else {
            RecommendationQuality::Low
        }
    }
}

/// Aggregate statistics over the returned (truncated) match scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceScores {
    pub average_match_score: f64,
    /// Population standard deviation.
    pub score_distribution: f64,
    pub recommendation_quality: RecommendationQuality,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub recommendations: Vec<MatchResult>,
    pub algorithm_used: String,
    pub confidence_scores: ConfidenceScores,
}
