//! Recommendation Engine — scores, boosts, sorts and explains a candidate set.
//!
//! Pipeline per candidate:
//! 1. skill, preference and content scores (each in [0, 1])
//! 2. `final = 0.4*skill + 0.4*preference + 0.2*content`
//! 3. ×1.10 for priority-scheme listings, ×1.05 when the listing is in the student's state
//! 4. ×100 and rounded to 2 decimals for display
//!
//! Boosted scores are not clamped, so a display score above 100 is expected.
//!
//! `AppState` holds an `Arc<dyn Recommender>`; `HybridRecommender` is the default backend.

use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::matching::scorers::{common_skills, content_match, preference_match, skill_match};
use crate::matching::similarity::TextSimilarityScorer;
use crate::models::opportunity::Opportunity;
use crate::models::profile::StudentProfile;
use crate::models::recommendation::{
    ConfidenceScores, MatchResult, RankingResult, RecommendationQuality,
};

pub const ALGORITHM_LABEL: &str = "Hybrid (Skill + Preference + Content)";
pub const DEFAULT_MAX_RESULTS: usize = 10;

pub const STRONG_SKILL_MATCH: &str = "strong skill match";
pub const GOOD_SKILL_ALIGNMENT: &str = "good skill alignment";
pub const MATCHES_PREFERENCES: &str = "matches preferences perfectly";
pub const ALIGNS_WITH_PREFERENCES: &str = "aligns with some preferences";
pub const CONTENT_FIT: &str = "content similarity suggests good fit";
pub const LOCAL_OPPORTUNITY: &str = "local opportunity in your region";
pub const FALLBACK_REASON: &str = "potential opportunity based on profile analysis";

// ────────────────────────────────────────────────────────────────────────────
// Policy
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill: f64,
    pub preference: f64,
    pub content: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.4,
            preference: 0.4,
            content: 0.2,
        }
    }
}

/// Multiplicative adjustments applied after the weighted sum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostPolicy {
    pub priority_scheme: f64,
    pub same_region: f64,
}

impl Default for BoostPolicy {
    fn default() -> Self {
        Self {
            priority_scheme: 1.10,
            same_region: 1.05,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A ranking backend. Implement this to swap the algorithm without touching handlers.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(
        &self,
        profile: StudentProfile,
        candidates: Vec<Opportunity>,
        max_results: usize,
    ) -> Result<RankingResult, AppError>;
}

/// Default backend: runs `RecommendationEngine::rank` on the blocking pool.
pub struct HybridRecommender {
    engine: Arc<RecommendationEngine>,
}

impl HybridRecommender {
    pub fn new(engine: RecommendationEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

#[async_trait]
impl Recommender for HybridRecommender {
    async fn recommend(
        &self,
        profile: StudentProfile,
        candidates: Vec<Opportunity>,
        max_results: usize,
    ) -> Result<RankingResult, AppError> {
        let engine = Arc::clone(&self.engine);
        tokio::task::spawn_blocking(move || engine.rank(&profile, &candidates, max_results))
            .await
            .map_err(|e| AppError::Internal(anyhow!("ranking task failed: {e}")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    similarity: TextSimilarityScorer,
    weights: ScoringWeights,
    boosts: BoostPolicy,
}

impl RecommendationEngine {
    pub fn new(similarity: TextSimilarityScorer, weights: ScoringWeights, boosts: BoostPolicy) -> Self {
        Self {
            similarity,
            weights,
            boosts,
        }
    }

    /// Ranks `candidates` for `profile`, best first, keeping at most `max_results`.
    pub fn rank(
        &self,
        profile: &StudentProfile,
        candidates: &[Opportunity],
        max_results: usize,
    ) -> RankingResult {
        let mut results: Vec<MatchResult> = candidates
            .iter()
            .map(|candidate| self.score_candidate(profile, candidate))
            .collect();

        // sort_by is stable: exact ties keep input order
        results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        results.truncate(max_results);

        let confidence_scores = confidence(&results);
        info!(
            "Ranked {} candidates for {}: returned {}, mean {:.2} ({:?})",
            candidates.len(),
            profile.user_id,
            results.len(),
            confidence_scores.average_match_score,
            confidence_scores.recommendation_quality
        );

        RankingResult {
            recommendations: results,
            algorithm_used: ALGORITHM_LABEL.to_string(),
            confidence_scores,
        }
    }

    fn score_candidate(&self, profile: &StudentProfile, candidate: &Opportunity) -> MatchResult {
        let skill = skill_match(&profile.skills, &candidate.skills);
        let preference = preference_match(profile, candidate);
        let content = content_match(&self.similarity, profile, candidate);
        let same_region = candidate.state.to_lowercase() == profile.state.to_lowercase();

        let mut combined = self.weights.skill * skill
            + self.weights.preference * preference
            + self.weights.content * content;
        if candidate.is_pm_scheme {
            combined *= self.boosts.priority_scheme;
        }
        if same_region {
            combined *= self.boosts.same_region;
        }

        debug!(
            "Candidate {}: skill={skill:.3} preference={preference:.3} content={content:.3} final={combined:.3}",
            candidate.id
        );

        MatchResult {
            internship_id: candidate.id.clone(),
            title: candidate.title.clone(),
            company: candidate.company_name.clone(),
            match_score: to_display(combined),
            skill_match_score: to_display(skill),
            preference_match_score: to_display(preference),
            content_similarity_score: to_display(content),
            common_skills: common_skills(&profile.skills, &candidate.skills),
            reasoning: build_reasoning(skill, preference, content, same_region),
        }
    }
}

/// [0, 1] → 0–100, two decimals.
/// Rounds the exact binary value of the scaled score; exact ties go to even.
fn to_display(score: f64) -> f64 {
    let scaled = score * 100.0;
    format!("{scaled:.2}").parse().unwrap_or(scaled)
}

/// Explanation lines from the unscaled, pre-boost component scores.
fn build_reasoning(skill: f64, preference: f64, content: f64, same_region: bool) -> Vec<String> {
    let mut reasoning = Vec::new();

    if skill > 0.7 {
        reasoning.push(STRONG_SKILL_MATCH);
    } else if skill > 0.5 {
        reasoning.push(GOOD_SKILL_ALIGNMENT);
    }

    if preference > 0.7 {
        reasoning.push(MATCHES_PREFERENCES);
    } else if preference > 0.5 {
        reasoning.push(ALIGNS_WITH_PREFERENCES);
    }

    if content > 0.6 {
        reasoning.push(CONTENT_FIT);
    }

    if same_region {
        reasoning.push(LOCAL_OPPORTUNITY);
    }

    if reasoning.is_empty() {
        reasoning.push(FALLBACK_REASON);
    }

    reasoning.into_iter().map(str::to_string).collect()
}

/// Mean, population standard deviation and bucket of the returned scores.
fn confidence(results: &[MatchResult]) -> ConfidenceScores {
    if results.is_empty() {
        return ConfidenceScores {
            average_match_score: 0.0,
            score_distribution: 0.0,
            recommendation_quality: RecommendationQuality::Low,
        };
    }

    let n = results.len() as f64;
    let mean = results.iter().map(|r| r.match_score).sum::<f64>() / n;
    let variance = results
        .iter()
        .map(|r| (r.match_score - mean).powi(2))
        .sum::<f64>()
        / n;

    ConfidenceScores {
        average_match_score: mean,
        score_distribution: variance.sqrt(),
        recommendation_quality: RecommendationQuality::from_mean(mean),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
