//! Resume Gap Analyzer — compares extracted skills against a sector's expected list.

use tracing::debug;

use crate::models::analysis::GapAnalysisResult;
use crate::skills::extractor::SkillExtractor;

pub const MAX_GAPS: usize = 5;
/// Fewer extracted skills than this triggers the "add more" advice.
const THIN_RESUME_THRESHOLD: usize = 5;
/// Extracted skill count that saturates confidence at 1.0.
const CONFIDENT_SKILL_COUNT: f64 = 10.0;

pub const ADD_TECHNICAL_SKILLS: &str = "add more technical skills";
pub const FOCUS_SECTOR_SKILLS: &str = "focus on sector-specific skills";
pub const HIGHLIGHT_PROJECTS: &str = "highlight relevant projects";
pub const QUANTIFY_ACHIEVEMENTS: &str = "include quantifiable achievements";

#[derive(Debug, Clone)]
pub struct ResumeGapAnalyzer {
    extractor: SkillExtractor,
}

impl ResumeGapAnalyzer {
    pub fn new(extractor: SkillExtractor) -> Self {
        Self { extractor }
    }

    /// Unknown sector names compare against an empty list rather than failing.
    pub fn analyze(&self, text: &str, target_sector: &str) -> GapAnalysisResult {
        let extracted = self.extractor.extract(text);
        let expected = self.extractor.vocabulary().sector_skills_by_name(target_sector);

        let skill_gaps: Vec<String> = expected
            .iter()
            .filter(|skill| !extracted.contains(**skill))
            .take(MAX_GAPS)
            .map(|skill| skill.to_string())
            .collect();

        let mut recommendations = Vec::new();
        if extracted.len() < THIN_RESUME_THRESHOLD {
            recommendations.push(ADD_TECHNICAL_SKILLS.to_string());
        }
        if !expected.iter().any(|skill| extracted.contains(*skill)) {
            recommendations.push(FOCUS_SECTOR_SKILLS.to_string());
        }
        recommendations.push(HIGHLIGHT_PROJECTS.to_string());
        recommendations.push(QUANTIFY_ACHIEVEMENTS.to_string());

        let confidence_score = (extracted.len() as f64 / CONFIDENT_SKILL_COUNT).min(1.0);

        debug!(
            "Resume analysis for '{target_sector}': {} skills, {} gaps",
            extracted.len(),
            skill_gaps.len()
        );

        GapAnalysisResult {
            extracted_skills: extracted.into_iter().collect(),
            skill_gaps,
            recommendations,
            confidence_score,
        }
    }
}
