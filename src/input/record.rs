//! Raw candidate record schema
//!
//! The record arrives from an external resume-structuring service and is
//! treated as untrusted: every field is optional, a section of the wrong
//! shape deserializes to its empty default, and a malformed element inside a
//! section list is skipped rather than failing the record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(default, deserialize_with = "lenient_entries")]
    pub education: Vec<RawEducationEntry>,
    #[serde(default, deserialize_with = "lenient_entries")]
    pub experience: Vec<RawExperienceEntry>,
    #[serde(default, deserialize_with = "lenient_skills")]
    pub skills: RawSkills,
    #[serde(default, deserialize_with = "lenient_entries")]
    pub languages: Vec<RawLanguageEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEducationEntry {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub speciality: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawExperienceEntry {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSkills {
    pub required: Vec<String>,
    pub additional: Vec<String>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLanguageEntry {
    pub language: Option<String>,
    pub level: Option<String>,
}

/// Deserialize a section list, dropping elements that do not fit the entry
/// schema. A section that is not a list at all yields an empty one.
fn lenient_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Deserialize the skills mapping, keeping only string-typed items in each
/// bucket. Non-mapping input yields all-empty buckets.
fn lenient_skills<'de, D>(deserializer: D) -> Result<RawSkills, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(mut map) = value else {
        return Ok(RawSkills::default());
    };
    let mut bucket = |key: &str| -> Vec<String> {
        match map.remove(key) {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    };
    Ok(RawSkills {
        required: bucket("required"),
        additional: bucket("additional"),
        certifications: bucket("certifications"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_default_to_empty() {
        let record: CandidateRecord = serde_json::from_str("{}").unwrap();
        assert!(record.education.is_empty());
        assert!(record.experience.is_empty());
        assert!(record.skills.required.is_empty());
        assert!(record.languages.is_empty());
    }

    #[test]
    fn test_wrong_shaped_section_defaults_to_empty() {
        let json = r#"{"skills": "python, sql", "education": {"degree": "phd"}}"#;
        let record: CandidateRecord = serde_json::from_str(json).unwrap();
        assert!(record.skills.required.is_empty());
        assert!(record.education.is_empty());
    }

    #[test]
    fn test_malformed_list_element_is_skipped() {
        let json = r#"{"languages": [{"language": "english", "level": "fluent"}, 42, "spanish"]}"#;
        let record: CandidateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.languages.len(), 1);
        assert_eq!(record.languages[0].language.as_deref(), Some("english"));
    }

    #[test]
    fn test_non_string_skills_are_filtered() {
        let json = r#"{"skills": {"required": ["python", 3, null, "sql"], "additional": 7}}"#;
        let record: CandidateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.skills.required, vec!["python", "sql"]);
        assert!(record.skills.additional.is_empty());
    }
}
