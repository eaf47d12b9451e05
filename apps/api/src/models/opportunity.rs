use serde::{Deserialize, Serialize};

pub const UNKNOWN_COMPANY: &str = "Unknown";

fn unknown_company() -> String {
    UNKNOWN_COMPANY.to_string()
}

/// An internship listing being ranked against a profile.
///
/// Optional attributes are resolved here, at deserialization: a missing `isPmScheme`
/// is `false` and a missing `companyName` is "Unknown".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub stipend: Option<f64>,
    /// Weeks.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub is_pm_scheme: bool,
    #[serde(default = "unknown_company")]
    pub company_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_attributes_resolve_to_defaults() {
        let json = r#"{
            "_id": "int-1",
            "title": "Data Intern",
            "description": "Clean datasets",
            "type": "remote",
            "sector": "technology",
            "location": "Pune",
            "state": "Maharashtra",
            "duration": 12,
            "skills": ["python"]
        }"#;

        let opp: Opportunity = serde_json::from_str(json).unwrap();
        assert_eq!(opp.id, "int-1");
        assert_eq!(opp.kind, "remote");
        assert!(!opp.is_pm_scheme);
        assert_eq!(opp.company_name, UNKNOWN_COMPANY);
        assert!(opp.stipend.is_none());
        assert!(opp.district.is_none());
    }

    #[test]
    fn test_camel_case_flags_deserialize() {
        let json = r#"{
            "_id": "int-2",
            "title": "Civic Tech Intern",
            "isPmScheme": true,
            "companyName": "Gov Labs",
            "stipend": 15000
        }"#;

        let opp: Opportunity = serde_json::from_str(json).unwrap();
        assert!(opp.is_pm_scheme);
        assert_eq!(opp.company_name, "Gov Labs");
        assert_eq!(opp.stipend, Some(15000.0));
    }
}
