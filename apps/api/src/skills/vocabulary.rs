//! Skill Vocabulary — the fixed catalog of technical and soft skills.
//!
//! Serves two purposes: the dictionary the extractor scans free text against, and the
//! per-sector reference list the gap analyzer compares a resume to.
//! Every entry is lowercase and trimmed. Built once at startup, read-only afterwards.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Sector catalog
// ────────────────────────────────────────────────────────────────────────────

const PROGRAMMING: &[&str] = &[
    "python",
    "java",
    "javascript",
    "c++",
    "c#",
    "php",
    "ruby",
    "go",
    "rust",
    "swift",
    "kotlin",
];

const WEB_DEV: &[&str] = &[
    "html", "css", "react", "angular", "vue", "node.js", "express", "django", "flask",
    "spring",
];

const DATA_SCIENCE: &[&str] = &[
    "pandas",
    "numpy",
    "scikit-learn",
    "tensorflow",
    "pytorch",
    "keras",
    "opencv",
    "nltk",
];

const DATABASE: &[&str] = &[
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "elasticsearch",
    "cassandra",
];

const CLOUD: &[&str] = &[
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "jenkins",
    "git",
];

const MOBILE: &[&str] = &[
    "android",
    "ios",
    "flutter",
    "react native",
    "swift",
    "kotlin",
    "xamarin",
];

const DESIGN: &[&str] = &[
    "figma",
    "adobe creative suite",
    "sketch",
    "photoshop",
    "illustrator",
    "ui/ux",
];

const SOFT_SKILLS: &[&str] = &[
    "communication",
    "teamwork",
    "leadership",
    "problem solving",
    "time management",
    "critical thinking",
    "creativity",
    "adaptability",
    "collaboration",
    "project management",
    "analytical thinking",
    "decision making",
    "interpersonal skills",
    "presentation skills",
    "negotiation",
    "conflict resolution",
    "emotional intelligence",
    "networking",
];

/// A technical skill category. Doubles as the target sector of a resume analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Programming,
    WebDev,
    DataScience,
    Database,
    Cloud,
    Mobile,
    Design,
}

impl Sector {
    /// Declaration order; the flat vocabulary is assembled in this order.
    pub const ALL: [Sector; 7] = [
        Sector::Programming,
        Sector::WebDev,
        Sector::DataScience,
        Sector::Database,
        Sector::Cloud,
        Sector::Mobile,
        Sector::Design,
    ];

    /// The sector's expected skills, in catalog order.
    pub fn skills(self) -> &'static [&'static str] {
        match self {
            Sector::Programming => PROGRAMMING,
            Sector::WebDev => WEB_DEV,
            Sector::DataScience => DATA_SCIENCE,
            Sector::Database => DATABASE,
            Sector::Cloud => CLOUD,
            Sector::Mobile => MOBILE,
            Sector::Design => DESIGN,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sector::Programming => "programming",
            Sector::WebDev => "web_dev",
            Sector::DataScience => "data_science",
            Sector::Database => "database",
            Sector::Cloud => "cloud",
            Sector::Mobile => "mobile",
            Sector::Design => "design",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sector '{0}'")]
pub struct UnknownSector(pub String);

impl FromStr for Sector {
    type Err = UnknownSector;

    /// Case-insensitive. `-` and spaces are read as `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        match key.as_str() {
            "programming" => Ok(Sector::Programming),
            "web_dev" | "web_development" => Ok(Sector::WebDev),
            "data_science" => Ok(Sector::DataScience),
            "database" => Ok(Sector::Database),
            "cloud" | "devops" | "cloud_devops" => Ok(Sector::Cloud),
            "mobile" => Ok(Sector::Mobile),
            "design" => Ok(Sector::Design),
            _ => Err(UnknownSector(s.to_string())),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Vocabulary
// ────────────────────────────────────────────────────────────────────────────

/// The full catalog: per-sector lists, soft skills, and their flat union.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    all_skills: BTreeSet<&'static str>,
}

impl SkillVocabulary {
    pub fn new() -> Self {
        let all_skills = Sector::ALL
            .iter()
            .flat_map(|sector| sector.skills().iter().copied())
            .chain(SOFT_SKILLS.iter().copied())
            .collect();
        Self { all_skills }
    }

    /// Looks up a sector's skills by name. Unknown names yield an empty list.
    pub fn sector_skills_by_name(&self, name: &str) -> &'static [&'static str] {
        name.parse::<Sector>().map(Sector::skills).unwrap_or(&[])
    }

    /// Flat union of every sector and the soft skills. Containment tests only.
    pub fn all_skills(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.all_skills.iter().copied()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_skill_is_lowercase_and_trimmed() {
        let vocab = SkillVocabulary::new();
        for skill in vocab.all_skills() {
            assert_eq!(skill, skill.trim(), "untrimmed skill {skill:?}");
            assert_eq!(skill, skill.to_lowercase(), "non-lowercase skill {skill:?}");
        }
    }

    #[test]
    fn test_flat_set_collapses_shared_skills() {
        // swift and kotlin are listed under both programming and mobile
        let vocab = SkillVocabulary::new();
        let listed: usize = Sector::ALL.iter().map(|s| s.skills().len()).sum::<usize>()
            + SOFT_SKILLS.len();
        assert_eq!(vocab.all_skills().count(), listed - 2);
        assert_eq!(vocab.all_skills().filter(|s| *s == "swift").count(), 1);
        assert!(vocab.all_skills().any(|s| s == "kotlin"));
    }

    #[test]
    fn test_flat_set_includes_soft_skills() {
        let vocab = SkillVocabulary::new();
        assert!(vocab.all_skills().any(|s| s == "problem solving"));
        assert!(vocab.all_skills().any(|s| s == "emotional intelligence"));
    }

    #[test]
    fn test_sector_parse_is_case_insensitive() {
        assert_eq!("DATA_SCIENCE".parse::<Sector>(), Ok(Sector::DataScience));
        assert_eq!("Data Science".parse::<Sector>(), Ok(Sector::DataScience));
        assert_eq!("web-development".parse::<Sector>(), Ok(Sector::WebDev));
        assert_eq!("devops".parse::<Sector>(), Ok(Sector::Cloud));
    }

    #[test]
    fn test_unknown_sector_yields_empty_list() {
        let vocab = SkillVocabulary::new();
        assert!("agriculture".parse::<Sector>().is_err());
        assert!(vocab.sector_skills_by_name("agriculture").is_empty());
    }

    #[test]
    fn test_sector_skills_keep_declared_order() {
        let vocab = SkillVocabulary::new();
        let data = vocab.sector_skills_by_name("data_science");
        assert_eq!(data.first(), Some(&"pandas"));
        assert_eq!(data.last(), Some(&"nltk"));
    }

    #[test]
    fn test_sector_serde_is_snake_case() {
        let json = serde_json::to_string(&Sector::WebDev).unwrap();
        assert_eq!(json, r#""web_dev""#);
        let sector: Sector = serde_json::from_str(r#""data_science""#).unwrap();
        assert_eq!(sector, Sector::DataScience);
        assert_eq!(Sector::DataScience.to_string(), "data_science");
    }
}
