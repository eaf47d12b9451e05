//! Match Scorers — the three independent signals combined by the engine.
//!
//! Every scorer returns a value in [0, 1] and resolves degenerate input to a fixed
//! default instead of failing.

use std::collections::BTreeSet;

use crate::matching::similarity::TextSimilarityScorer;
use crate::models::opportunity::Opportunity;
use crate::models::profile::StudentProfile;

/// Candidate lists no skills: nothing to match, so neither reward nor penalty.
pub const NO_CANDIDATE_SKILLS_SCORE: f64 = 0.5;
/// Candidate lists skills but the profile has none.
pub const NO_PROFILE_SKILLS_SCORE: f64 = 0.3;
/// Profile expressed no structured preference.
pub const NO_PREFERENCES_SCORE: f64 = 0.5;

pub const SECTOR_WEIGHT: f64 = 30.0;
pub const LOCATION_WEIGHT: f64 = 25.0;
pub const TYPE_WEIGHT: f64 = 20.0;
pub const STIPEND_WEIGHT: f64 = 15.0;

fn lowercase_set(skills: &[String]) -> BTreeSet<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}

/// Jaccard similarity of the lower-cased skill sets.
pub fn skill_match(profile_skills: &[String], candidate_skills: &[String]) -> f64 {
    if candidate_skills.is_empty() {
        return NO_CANDIDATE_SKILLS_SCORE;
    }

    let profile = lowercase_set(profile_skills);
    if profile.is_empty() {
        return NO_PROFILE_SKILLS_SCORE;
    }
    let candidate = lowercase_set(candidate_skills);

    let intersection = profile.intersection(&candidate).count();
    let union = profile.union(&candidate).count();
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Skills present on both sides, lower-cased and sorted.
pub fn common_skills(profile_skills: &[String], candidate_skills: &[String]) -> Vec<String> {
    let profile = lowercase_set(profile_skills);
    let candidate = lowercase_set(candidate_skills);
    profile.intersection(&candidate).cloned().collect()
}

fn matches_any(value: &str, wanted: &[String]) -> bool {
    let value = value.to_lowercase();
    wanted.iter().any(|w| w.to_lowercase() == value)
}

/// Weighted checklist normalised over the dimensions the profile actually specified.
///
/// | dimension | weight | satisfied when |
/// |-----------|--------|----------------|
/// | sector    | 30     | candidate sector in preferred sectors |
/// | location  | 25     | candidate state in preferred locations |
/// | type      | 20     | candidate type in preferred types |
/// | stipend   | 15     | candidate stipend ≥ minimum |
pub fn preference_match(profile: &StudentProfile, candidate: &Opportunity) -> f64 {
    let prefs = &profile.preferences;
    if prefs.is_empty() {
        return NO_PREFERENCES_SCORE;
    }

    let mut awarded = 0.0;
    let mut applicable = 0.0;

    if !prefs.preferred_sectors.is_empty() {
        applicable += SECTOR_WEIGHT;
        if matches_any(&candidate.sector, &prefs.preferred_sectors) {
            awarded += SECTOR_WEIGHT;
        }
    }

    if !prefs.preferred_locations.is_empty() {
        applicable += LOCATION_WEIGHT;
        if matches_any(&candidate.state, &prefs.preferred_locations) {
            awarded += LOCATION_WEIGHT;
        }
    }

    if !prefs.preferred_types.is_empty() {
        applicable += TYPE_WEIGHT;
        if matches_any(&candidate.kind, &prefs.preferred_types) {
            awarded += TYPE_WEIGHT;
        }
    }

    if let Some(min_stipend) = prefs.min_stipend() {
        applicable += STIPEND_WEIGHT;
        // A listing without a stipend never meets a minimum.
        if candidate.stipend.is_some_and(|stipend| stipend >= min_stipend) {
            awarded += STIPEND_WEIGHT;
        }
    }

    awarded / applicable
}

/// Text similarity of the profile's skills and sectors against the listing's prose.
pub fn content_match(
    scorer: &TextSimilarityScorer,
    profile: &StudentProfile,
    candidate: &Opportunity,
) -> f64 {
    let profile_text = format!(
        "{} {}",
        profile.skills.join(" "),
        profile.preferences.preferred_sectors.join(" ")
    );
    let candidate_text = format!(
        "{} {} {}",
        candidate.title,
        candidate.description,
        candidate.skills.join(" ")
    );
    scorer.similarity(&profile_text, &candidate_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Preferences;
    use serde_json::json;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn profile(preferences: Preferences) -> StudentProfile {
        StudentProfile {
            user_id: "stu-1".to_string(),
            skills: skills(&["python", "sql"]),
            preferences,
            state: "Maharashtra".to_string(),
            district: "Pune".to_string(),
            education: vec![],
            language: None,
        }
    }

    fn opportunity() -> Opportunity {
        serde_json::from_value(json!({
            "_id": "int-1",
            "title": "Data Analyst Intern",
            "description": "Analyse sales data with python and sql",
            "type": "remote",
            "sector": "Technology",
            "state": "Karnataka",
            "stipend": 10000.0,
            "duration": 12,
            "skills": ["Python", "Java"]
        }))
        .unwrap()
    }

    #[test]
    fn test_candidate_without_skills_is_neutral() {
        assert_eq!(skill_match(&skills(&["python"]), &[]), 0.5);
        assert_eq!(skill_match(&[], &[]), 0.5);
    }

    #[test]
    fn test_profile_without_skills_scores_point_three() {
        assert_eq!(skill_match(&[], &skills(&["python"])), 0.3);
    }

    #[test]
    fn test_jaccard_one_third() {
        let a = skills(&["python", "sql"]);
        let b = skills(&["python", "java"]);
        assert!((skill_match(&a, &b) - 1.0 / 3.0).abs() < 1e-12);
        assert!((skill_match(&b, &a) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_jaccard_is_case_insensitive_and_disjoint_is_zero() {
        assert_eq!(skill_match(&skills(&["PYTHON"]), &skills(&["python"])), 1.0);
        assert_eq!(skill_match(&skills(&["rust"]), &skills(&["figma"])), 0.0);
    }

    #[test]
    fn test_common_skills_lowercased_and_sorted() {
        let common = common_skills(&skills(&["SQL", "Python"]), &skills(&["python", "sql", "go"]));
        assert_eq!(common, vec!["python", "sql"]);
    }

    #[test]
    fn test_no_preferences_is_neutral() {
        assert_eq!(preference_match(&profile(Preferences::default()), &opportunity()), 0.5);
    }

    #[test]
    fn test_sector_only_match_and_mismatch() {
        let matched = Preferences {
            preferred_sectors: skills(&["technology"]),
            ..Default::default()
        };
        assert_eq!(preference_match(&profile(matched), &opportunity()), 1.0);

        let mismatched = Preferences {
            preferred_sectors: skills(&["healthcare"]),
            ..Default::default()
        };
        assert_eq!(preference_match(&profile(mismatched), &opportunity()), 0.0);
    }

    #[test]
    fn test_partial_preferences_normalise_over_applicable_weights() {
        // sector matches (30), location misses (25): 30 / 55
        let prefs = Preferences {
            preferred_sectors: skills(&["Technology"]),
            preferred_locations: skills(&["Maharashtra"]),
            ..Default::default()
        };
        let score = preference_match(&profile(prefs), &opportunity());
        assert!((score - 30.0 / 55.0).abs() < 1e-12);
    }

    #[test]
    fn test_stipend_preference() {
        let met = Preferences {
            min_stipend: Some(8000.0),
            ..Default::default()
        };
        assert_eq!(preference_match(&profile(met), &opportunity()), 1.0);

        let unmet = Preferences {
            min_stipend: Some(20000.0),
            ..Default::default()
        };
        assert_eq!(preference_match(&profile(unmet), &opportunity()), 0.0);

        let mut unpaid = opportunity();
        unpaid.stipend = None;
        let prefs = Preferences {
            min_stipend: Some(1.0),
            ..Default::default()
        };
        assert_eq!(preference_match(&profile(prefs), &unpaid), 0.0);
    }

    #[test]
    fn test_zero_min_stipend_counts_as_unspecified() {
        let prefs = Preferences {
            min_stipend: Some(0.0),
            ..Default::default()
        };
        assert_eq!(preference_match(&profile(prefs), &opportunity()), 0.5);
    }

    #[test]
    fn test_content_match_rewards_overlap() {
        let scorer = TextSimilarityScorer::default();
        let score = content_match(&scorer, &profile(Preferences::default()), &opportunity());
        assert!(score > 0.0 && score <= 1.0, "got {score}");
    }

    #[test]
    fn test_content_match_blank_profile_is_neutral() {
        let scorer = TextSimilarityScorer::default();
        let mut p = profile(Preferences::default());
        p.skills.clear();
        assert_eq!(content_match(&scorer, &p, &opportunity()), 0.5);
    }
}
