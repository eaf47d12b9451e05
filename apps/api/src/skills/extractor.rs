//! Skill Extractor — finds vocabulary skills mentioned in free text.
//!
//! The default mode is a plain substring scan over the lower-cased text. It is not
//! word-boundary aware: "go" matches inside "ego" and "java" inside "javascript".
//! Gap detection and confidence are calibrated against that behaviour, so the stricter
//! scan is opt-in as `ExtractionMode::WordBoundary`.

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::skills::vocabulary::SkillVocabulary;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Any contiguous occurrence counts.
    #[default]
    Substring,
    /// The occurrence must not be flanked by alphanumeric characters.
    WordBoundary,
}

#[derive(Debug, Error)]
#[error("unknown extraction mode '{0}' (expected 'substring' or 'word_boundary')")]
pub struct UnknownExtractionMode(String);

impl FromStr for ExtractionMode {
    type Err = UnknownExtractionMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(ExtractionMode::Substring),
            "word_boundary" | "word-boundary" => Ok(ExtractionMode::WordBoundary),
            _ => Err(UnknownExtractionMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SkillExtractor {
    vocabulary: Arc<SkillVocabulary>,
    mode: ExtractionMode,
}

impl SkillExtractor {
    pub fn new(vocabulary: Arc<SkillVocabulary>, mode: ExtractionMode) -> Self {
        Self { vocabulary, mode }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Returns every vocabulary skill present in `text`. Empty text yields an empty set.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let text_lower = text.to_lowercase();
        if text_lower.trim().is_empty() {
            return BTreeSet::new();
        }

        self.vocabulary
            .all_skills()
            .filter(|skill| match self.mode {
                ExtractionMode::Substring => text_lower.contains(skill),
                ExtractionMode::WordBoundary => contains_bounded(&text_lower, skill),
            })
            .map(str::to_string)
            .collect()
    }
}

/// True if `needle` occurs in `haystack` with no alphanumeric character on either side.
fn contains_bounded(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor(mode: ExtractionMode) -> SkillExtractor {
        SkillExtractor::new(Arc::new(SkillVocabulary::new()), mode)
    }

    #[test]
    fn test_extracts_known_skills_case_insensitively() {
        let found = extractor(ExtractionMode::Substring).extract("I know Python and SQL");
        assert!(found.contains("python"));
        assert!(found.contains("sql"));
        assert!(!found.contains("java"));
        assert!(!found.contains("docker"));
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        let ex = extractor(ExtractionMode::Substring);
        assert!(ex.extract("").is_empty());
        assert!(ex.extract("   \n\t").is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let found = extractor(ExtractionMode::Substring).extract("rust rust RUST Rust");
        assert_eq!(found.iter().filter(|s| *s == "rust").count(), 1);
    }

    #[test]
    fn test_substring_mode_matches_inside_words() {
        // Known false positives of the substring scan.
        let found = extractor(ExtractionMode::Substring).extract("my ego, javascript");
        assert!(found.contains("go"));
        assert!(found.contains("java"));
        assert!(found.contains("javascript"));
    }

    #[test]
    fn test_substring_mode_finds_multi_word_skills() {
        let found = extractor(ExtractionMode::Substring)
            .extract("Strong Problem Solving and time management; built apps in React Native");
        assert!(found.contains("problem solving"));
        assert!(found.contains("time management"));
        assert!(found.contains("react native"));
        assert!(found.contains("react"));
    }

    #[test]
    fn test_word_boundary_mode_rejects_embedded_matches() {
        let found = extractor(ExtractionMode::WordBoundary).extract("my ego, javascript");
        assert!(!found.contains("go"));
        assert!(!found.contains("java"));
        assert!(found.contains("javascript"));
    }

    #[test]
    fn test_word_boundary_mode_handles_symbol_skills() {
        let found = extractor(ExtractionMode::WordBoundary).extract("C++, C# and node.js.");
        assert!(found.contains("c++"));
        assert!(found.contains("c#"));
        assert!(found.contains("node.js"));
    }

    #[test]
    fn test_extraction_mode_parses_from_config_strings() {
        assert_eq!(
            "substring".parse::<ExtractionMode>().unwrap(),
            ExtractionMode::Substring
        );
        assert_eq!(
            "Word_Boundary".parse::<ExtractionMode>().unwrap(),
            ExtractionMode::WordBoundary
        );
        assert!("fuzzy".parse::<ExtractionMode>().is_err());
    }

    #[test]
    fn test_default_mode_is_substring() {
        assert_eq!(ExtractionMode::default(), ExtractionMode::Substring);
    }
}
