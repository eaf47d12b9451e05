use serde::{Deserialize, Serialize};

/// Outcome of comparing a resume against a target sector's expected skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysisResult {
    pub extracted_skills: Vec<String>,
    /// At most five, in catalog order.
    pub skill_gaps: Vec<String>,
    /// Advice lines.
    pub recommendations: Vec<String>,
    /// min(extracted / 10, 1.0)
    pub confidence_score: f64,
}
