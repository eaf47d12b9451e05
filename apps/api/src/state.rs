use std::sync::Arc;

use crate::analysis::gap_analyzer::ResumeGapAnalyzer;
use crate::config::Config;
use crate::matching::engine::{
    BoostPolicy, HybridRecommender, RecommendationEngine, Recommender, ScoringWeights,
};
use crate::matching::similarity::{TextSimilarityScorer, DEFAULT_MAX_FEATURES};
use crate::skills::extractor::SkillExtractor;
use crate::skills::vocabulary::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable ranking backend. Default: HybridRecommender.
    pub recommender: Arc<dyn Recommender>,
    pub gap_analyzer: Arc<ResumeGapAnalyzer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let vocabulary = Arc::new(SkillVocabulary::new());
        let extractor = SkillExtractor::new(vocabulary, config.skill_extraction_mode);

        let engine = RecommendationEngine::new(
            TextSimilarityScorer::new(DEFAULT_MAX_FEATURES),
            ScoringWeights::default(),
            BoostPolicy::default(),
        );

        Self {
            recommender: Arc::new(HybridRecommender::new(engine)),
            gap_analyzer: Arc::new(ResumeGapAnalyzer::new(extractor)),
            config,
        }
    }
}
