use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured preferences. An empty list or a non-positive stipend means "no preference".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub preferred_sectors: Vec<String>,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    #[serde(default)]
    pub preferred_types: Vec<String>,
    #[serde(default)]
    pub min_stipend: Option<f64>,
}

impl Preferences {
    /// The minimum stipend, if one was actually expressed.
    pub fn min_stipend(&self) -> Option<f64> {
        self.min_stipend.filter(|min| *min > 0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.preferred_sectors.is_empty()
            && self.preferred_locations.is_empty()
            && self.preferred_types.is_empty()
            && self.min_stipend().is_none()
    }
}

/// The student receiving recommendations.
///
/// `education` and `language` are carried for callers and never read by scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    #[serde(alias = "user_id")]
    pub user_id: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub education: Vec<Value>,
    #[serde(default)]
    pub language: Option<String>,
}
