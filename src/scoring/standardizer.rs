//! Input standardization: raw candidate sections → canonical schema
//!
//! Validation is per entry: a malformed degree, date, or level drops that
//! single entry and the rest of the batch continues. Nothing here returns an
//! error to the caller.

use crate::input::record::{
    CandidateRecord, RawEducationEntry, RawExperienceEntry, RawLanguageEntry, RawSkills,
};
use crate::reference::tables::ExperienceMatrix;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed threshold above which an experience entry counts as relevant.
pub const RELEVANCE_THRESHOLD: f64 = 0.7;

/// Assumed length of a bachelor program when inferring dates.
const BACHELOR_YEARS: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degree {
    Phd,
    Master,
    Bachelor,
    Specialist,
    IncompleteHigher,
}

impl Degree {
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "phd" => Some(Degree::Phd),
            "master" => Some(Degree::Master),
            "bachelor" => Some(Degree::Bachelor),
            "specialist" => Some(Degree::Specialist),
            "incomplete_higher" => Some(Degree::IncompleteHigher),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Degree::Phd => "phd",
            Degree::Master => "master",
            Degree::Bachelor => "bachelor",
            Degree::Specialist => "specialist",
            Degree::IncompleteHigher => "incomplete_higher",
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageLevel {
    Native,
    Fluent,
    Advanced,
    Intermediate,
    Basic,
}

impl LanguageLevel {
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "native" => Some(LanguageLevel::Native),
            "fluent" => Some(LanguageLevel::Fluent),
            "advanced" => Some(LanguageLevel::Advanced),
            "intermediate" => Some(LanguageLevel::Intermediate),
            "basic" => Some(LanguageLevel::Basic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageLevel::Native => "native",
            LanguageLevel::Fluent => "fluent",
            LanguageLevel::Advanced => "advanced",
            LanguageLevel::Intermediate => "intermediate",
            LanguageLevel::Basic => "basic",
        }
    }
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardizedEducationEntry {
    pub degree: Degree,
    pub institution: String,
    pub speciality: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardizedExperienceEntry {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub duration_years: f64,
    pub relevance_weight: f64,
    pub is_relevant: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardizedSkillSet {
    pub required: Vec<String>,
    pub additional: Vec<String>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardizedLanguageEntry {
    pub language: String,
    pub level: LanguageLevel,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandardizedCandidate {
    pub education: Vec<StandardizedEducationEntry>,
    pub experience: Vec<StandardizedExperienceEntry>,
    pub skills: StandardizedSkillSet,
    pub languages: Vec<StandardizedLanguageEntry>,
}

pub struct Standardizer<'a> {
    matrix: &'a ExperienceMatrix,
    today: NaiveDate,
}

impl<'a> Standardizer<'a> {
    pub fn new(matrix: &'a ExperienceMatrix) -> Self {
        Self::with_today(matrix, Local::now().date_naive())
    }

    /// Pins "today" for open-ended experience entries, so tests stay
    /// deterministic.
    pub fn with_today(matrix: &'a ExperienceMatrix, today: NaiveDate) -> Self {
        Self { matrix, today }
    }

    pub fn standardize(&self, record: &CandidateRecord) -> StandardizedCandidate {
        StandardizedCandidate {
            education: self.standardize_education(&record.education),
            experience: self.standardize_experience(&record.experience),
            skills: self.standardize_skills(&record.skills),
            languages: self.standardize_languages(&record.languages),
        }
    }

    pub fn standardize_education(
        &self,
        entries: &[RawEducationEntry],
    ) -> Vec<StandardizedEducationEntry> {
        let mut standardized = Vec::new();
        for raw in entries {
            let degree_text = raw.degree.as_deref().unwrap_or("").trim().to_lowercase();
            let Some(degree) = Degree::parse(&degree_text) else {
                continue;
            };

            let mut start_date = raw.start_date.clone().unwrap_or_default();
            let mut end_date = raw.end_date.clone().unwrap_or_default();

            // Bachelor entries get normalized date anchors. The start year
            // comes from the explicit start date when present, otherwise it
            // is inferred as end year minus the program length; entries with
            // no usable year are dropped.
            if degree == Degree::Bachelor {
                let start_year = if !start_date.is_empty() {
                    leading_year(&start_date)
                } else if !end_date.is_empty() {
                    leading_year(&end_date).map(|year| year - BACHELOR_YEARS)
                } else {
                    None
                };
                let Some(start_year) = start_year else {
                    continue;
                };
                start_date = format!("{}-09-01", start_year);
                end_date = format!("{}-06-30", start_year + BACHELOR_YEARS);
            }

            standardized.push(StandardizedEducationEntry {
                degree,
                institution: raw.institution.clone().unwrap_or_default(),
                speciality: raw.speciality.clone().unwrap_or_default(),
                start_date,
                end_date,
            });
        }
        standardized
    }

    pub fn standardize_experience(
        &self,
        entries: &[RawExperienceEntry],
    ) -> Vec<StandardizedExperienceEntry> {
        let mut standardized = Vec::new();
        for raw in entries {
            let start = match raw.start_date.as_deref().filter(|s| !s.is_empty()) {
                Some(text) => match parse_date(text) {
                    Some(date) => Some(date),
                    None => continue,
                },
                None => None,
            };
            // A missing end date means the position is current.
            let end = match raw.end_date.as_deref().filter(|s| !s.is_empty()) {
                Some(text) => match parse_date(text) {
                    Some(date) => date,
                    None => continue,
                },
                None => self.today,
            };

            let duration_years = match start {
                Some(start) => round2((end - start).num_days() as f64 / 365.25),
                None => 0.0,
            };

            let position = raw.position.clone().unwrap_or_default();
            let company = raw.company.clone().unwrap_or_default();
            let description = raw.description.clone().unwrap_or_default();

            let position_relevance = self.matrix.position_weight(&position).unwrap_or(0.0);
            let company_relevance = self.matrix.company_weight(&company).unwrap_or(0.0);
            let tasks_relevance = self.matrix.tasks_weight(&description).unwrap_or(0.0);
            let relevance_weight = position_relevance
                .max(company_relevance)
                .max(tasks_relevance);

            standardized.push(StandardizedExperienceEntry {
                company,
                position,
                start_date: start.map(format_date).unwrap_or_default(),
                end_date: format_date(end),
                duration_years,
                relevance_weight,
                is_relevant: relevance_weight >= RELEVANCE_THRESHOLD,
                description,
            });
        }
        standardized
    }

    pub fn standardize_skills(&self, skills: &RawSkills) -> StandardizedSkillSet {
        StandardizedSkillSet {
            required: normalize_bucket(&skills.required),
            additional: normalize_bucket(&skills.additional),
            certifications: normalize_bucket(&skills.certifications),
        }
    }

    pub fn standardize_languages(
        &self,
        entries: &[RawLanguageEntry],
    ) -> Vec<StandardizedLanguageEntry> {
        let mut standardized = Vec::new();
        for raw in entries {
            let language = raw
                .language
                .as_deref()
                .unwrap_or("")
                .trim()
                .to_lowercase();
            let level_text = raw.level.as_deref().unwrap_or("").trim().to_lowercase();
            let Some(level) = LanguageLevel::parse(&level_text) else {
                continue;
            };
            if language.is_empty() {
                continue;
            }
            standardized.push(StandardizedLanguageEntry { language, level });
        }
        standardized
    }
}

/// Lowercase, trim, and dedup a skill bucket, first occurrence wins.
fn normalize_bucket(items: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        let normalized = item.trim().to_lowercase();
        if !seen.contains(&normalized) {
            seen.push(normalized);
        }
    }
    seen
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Year component of a `YYYY-...` date string.
fn leading_year(text: &str) -> Option<i32> {
    text.split('-').next()?.trim().parse().ok()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> ExperienceMatrix {
        ExperienceMatrix::builtin()
    }

    fn standardizer(matrix: &ExperienceMatrix) -> Standardizer<'_> {
        Standardizer::with_today(matrix, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    fn education_entry(degree: &str, start: Option<&str>, end: Option<&str>) -> RawEducationEntry {
        RawEducationEntry {
            degree: Some(degree.to_string()),
            institution: Some("MIT".to_string()),
            speciality: Some("Computer Science".to_string()),
            start_date: start.map(String::from),
            end_date: end.map(String::from),
        }
    }

    #[test]
    fn test_unknown_degree_is_dropped() {
        let matrix = matrix();
        let s = standardizer(&matrix);
        let entries = s.standardize_education(&[education_entry("mba", Some("2015-09-01"), None)]);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_bachelor_dates_normalized_from_start_year() {
        let matrix = matrix();
        let s = standardizer(&matrix);
        let entries =
            s.standardize_education(&[education_entry("Bachelor", Some("2015-02-10"), None)]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].start_date, "2015-09-01");
        assert_eq!(entries[0].end_date, "2019-06-30");
    }

    #[test]
    fn test_bachelor_start_inferred_from_end_year() {
        let matrix = matrix();
        let s = standardizer(&matrix);
        let entries = s.standardize_education(&[education_entry("bachelor", None, Some("2019-06-30"))]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].start_date, "2015-09-01");
        assert_eq!(entries[0].end_date, "2019-06-30");
    }

    #[test]
    fn test_bachelor_without_dates_is_dropped() {
        let matrix = matrix();
        let s = standardizer(&matrix);
        let entries = s.standardize_education(&[education_entry("bachelor", None, None)]);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_bachelor_with_malformed_date_is_dropped() {
        let matrix = matrix();
        let s = standardizer(&matrix);
        let entries =
            s.standardize_education(&[education_entry("bachelor", Some("spring of 2015"), None)]);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_non_bachelor_dates_pass_through() {
        let matrix = matrix();
        let s = standardizer(&matrix);
        let entries = s.standardize_education(&[education_entry("phd", Some("2019-10-01"), Some("2023-06-15"))]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].start_date, "2019-10-01");
        assert_eq!(entries[0].end_date, "2023-06-15");
    }

    #[test]
    fn test_experience_duration_and_defaults() {
        let matrix = matrix();
        let s = standardizer(&matrix);
        let entries = s.standardize_experience(&[RawExperienceEntry {
            company: Some("Acme".to_string()),
            position: Some("Gardener".to_string()),
            start_date: Some("2019-01-01".to_string()),
            end_date: Some("2021-01-01".to_string()),
            description: Some("watering plants".to_string()),
        }]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].duration_years, 2.0);
        assert_eq!(entries[0].relevance_weight, 0.0);
        assert!(!entries[0].is_relevant);
    }

    #[test]
    fn test_experience_missing_end_uses_today() {
        let matrix = matrix();
        let s = standardizer(&matrix);
        let entries = s.standardize_experience(&[RawExperienceEntry {
            company: None,
            position: Some("Data Scientist".to_string()),
            start_date: Some("2023-01-01".to_string()),
            end_date: None,
            description: None,
        }]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].end_date, "2024-01-01");
        assert_eq!(entries[0].duration_years, 1.0);
        assert!(entries[0].is_relevant);
        assert_eq!(entries[0].relevance_weight, 1.0);
    }

    #[test]
    fn test_experience_unparsable_date_is_dropped() {
        let matrix = matrix();
        let s = standardizer(&matrix);
        let entries = s.standardize_experience(&[RawExperienceEntry {
            company: None,
            position: None,
            start_date: Some("January 2019".to_string()),
            end_date: Some("2021-01-01".to_string()),
            description: None,
        }]);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_experience_missing_start_keeps_entry_at_zero_duration() {
        let matrix = matrix();
        let s = standardizer(&matrix);
        let entries = s.standardize_experience(&[RawExperienceEntry {
            company: Some("Acme".to_string()),
            position: None,
            start_date: None,
            end_date: Some("2021-01-01".to_string()),
            description: None,
        }]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].duration_years, 0.0);
        assert_eq!(entries[0].start_date, "");
    }

    #[test]
    fn test_relevance_takes_max_of_position_company_tasks() {
        let matrix = matrix();
        let s = standardizer(&matrix);
        let entries = s.standardize_experience(&[RawExperienceEntry {
            company: Some("Google".to_string()),
            position: Some("Gardener".to_string()),
            start_date: Some("2019-01-01".to_string()),
            end_date: Some("2021-01-01".to_string()),
            description: Some("dashboard maintenance".to_string()),
        }]);
        // Company matches at 1.0, tasks at 0.7, position not at all.
        assert_eq!(entries[0].relevance_weight, 1.0);
        assert!(entries[0].is_relevant);
    }

    #[test]
    fn test_skills_are_lowercased_trimmed_deduped() {
        let matrix = matrix();
        let s = standardizer(&matrix);
        let skills = s.standardize_skills(&RawSkills {
            required: vec![
                " Python ".to_string(),
                "SQL".to_string(),
                "python".to_string(),
            ],
            additional: vec![],
            certifications: vec!["AWS Certified".to_string()],
        });
        assert_eq!(skills.required, vec!["python", "sql"]);
        assert_eq!(skills.certifications, vec!["aws certified"]);
    }

    #[test]
    fn test_languages_validation() {
        let matrix = matrix();
        let s = standardizer(&matrix);
        let languages = s.standardize_languages(&[
            RawLanguageEntry {
                language: Some(" English ".to_string()),
                level: Some("Fluent".to_string()),
            },
            RawLanguageEntry {
                language: Some("German".to_string()),
                level: Some("conversational".to_string()),
            },
            RawLanguageEntry {
                language: None,
                level: Some("native".to_string()),
            },
        ]);
        assert_eq!(languages.len(), 1);
        assert_eq!(languages[0].language, "english");
        assert_eq!(languages[0].level, LanguageLevel::Fluent);
    }
}
