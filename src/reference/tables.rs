//! Reference table types: role catalog, experience matrix, universities, courses
//!
//! All text matching against these tables is case-insensitive substring
//! containment. List order is part of the data contract: position and company
//! lookups take the first matching group, university lookups the first
//! matching name. Task lookups take the maximum weight over all matching
//! groups instead.

use crate::config::CategoryWeights;
use crate::error::{Result, ScorerError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The fixed catalog of professional roles, in ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    DataScientist,
    DataEngineer,
    TechnicalAnalyst,
    AiManager,
    MlEngineer,
    DataArchitect,
    BusinessIntelligenceAnalyst,
    ResearchScientist,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::DataScientist,
        Role::DataEngineer,
        Role::TechnicalAnalyst,
        Role::AiManager,
        Role::MlEngineer,
        Role::DataArchitect,
        Role::BusinessIntelligenceAnalyst,
        Role::ResearchScientist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::DataScientist => "data_scientist",
            Role::DataEngineer => "data_engineer",
            Role::TechnicalAnalyst => "technical_analyst",
            Role::AiManager => "ai_manager",
            Role::MlEngineer => "ml_engineer",
            Role::DataArchitect => "data_architect",
            Role::BusinessIntelligenceAnalyst => "business_intelligence_analyst",
            Role::ResearchScientist => "research_scientist",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A group of text fragments sharing one relevance weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasGroup {
    pub aliases: Vec<String>,
    pub weight: f64,
}

impl AliasGroup {
    fn matches(&self, text: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| text.contains(&alias.to_lowercase()))
    }
}

/// Relevance matrix for work experience.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceMatrix {
    #[serde(default)]
    pub positions: Vec<AliasGroup>,
    #[serde(default)]
    pub companies: Vec<AliasGroup>,
    #[serde(default)]
    pub tasks: Vec<AliasGroup>,
}

impl ExperienceMatrix {
    /// Weight of the first position group matching the text, if any.
    pub fn position_weight(&self, position: &str) -> Option<f64> {
        let position = position.to_lowercase();
        self.positions
            .iter()
            .find(|group| group.matches(&position))
            .map(|group| group.weight)
    }

    /// Weight of the first company group matching the text, if any.
    pub fn company_weight(&self, company: &str) -> Option<f64> {
        let company = company.to_lowercase();
        self.companies
            .iter()
            .find(|group| group.matches(&company))
            .map(|group| group.weight)
    }

    /// Maximum weight over all task groups matching the description.
    pub fn tasks_weight(&self, description: &str) -> Option<f64> {
        let description = description.to_lowercase();
        self.tasks
            .iter()
            .filter(|group| group.matches(&description))
            .map(|group| group.weight)
            .fold(None, |acc, w| Some(acc.map_or(w, |a: f64| a.max(w))))
    }

    pub fn builtin() -> Self {
        fn group(aliases: &[&str], weight: f64) -> AliasGroup {
            AliasGroup {
                aliases: aliases.iter().map(|s| s.to_string()).collect(),
                weight,
            }
        }
        Self {
            positions: vec![
                group(&["data scientist", "machine learning engineer", "ml engineer"], 1.0),
                group(&["data engineer", "analytics engineer"], 0.9),
                group(&["data analyst", "research scientist"], 0.85),
                group(&["software engineer", "backend developer", "developer"], 0.7),
                group(&["analyst", "consultant"], 0.6),
                group(&["intern", "trainee"], 0.4),
            ],
            companies: vec![
                group(&["google", "amazon", "microsoft", "meta", "apple", "netflix"], 1.0),
                group(&["yandex", "spotify", "uber", "airbnb", "stripe"], 0.9),
                group(&["bank", "fintech", "insurance"], 0.7),
                group(&["startup", "agency"], 0.6),
            ],
            tasks: vec![
                group(&["machine learning", "model training", "deep learning"], 1.0),
                group(&["data pipeline", "etl", "data warehouse"], 0.9),
                group(&["statistical analysis", "a/b test", "experiment"], 0.85),
                group(&["dashboard", "reporting", "visualization"], 0.7),
                group(&["sql", "database"], 0.6),
            ],
        }
    }
}

/// University prestige rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniversityRank {
    Top,
    Good,
    Average,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniversityEntry {
    pub name: String,
    pub rank: UniversityRank,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UniversityTable {
    #[serde(default)]
    pub universities: Vec<UniversityEntry>,
}

impl UniversityTable {
    /// Rank of the first university whose name is contained in the
    /// institution text, if any.
    pub fn rank_for(&self, institution: &str) -> Option<UniversityRank> {
        let institution = institution.to_lowercase();
        self.universities
            .iter()
            .find(|entry| institution.contains(&entry.name.to_lowercase()))
            .map(|entry| entry.rank)
    }

    pub fn builtin() -> Self {
        fn entry(name: &str, rank: UniversityRank) -> UniversityEntry {
            UniversityEntry {
                name: name.to_string(),
                rank,
            }
        }
        Self {
            universities: vec![
                entry("MIT", UniversityRank::Top),
                entry("Stanford", UniversityRank::Top),
                entry("Carnegie Mellon", UniversityRank::Top),
                entry("Oxford", UniversityRank::Top),
                entry("Cambridge", UniversityRank::Top),
                entry("ETH Zurich", UniversityRank::Top),
                entry("Berkeley", UniversityRank::Good),
                entry("Georgia Tech", UniversityRank::Good),
                entry("University of Washington", UniversityRank::Good),
                entry("Technical University of Munich", UniversityRank::Good),
                entry("State University", UniversityRank::Average),
                entry("Polytechnic", UniversityRank::Average),
                entry("Community College", UniversityRank::Unknown),
            ],
        }
    }
}

/// Per-role weight vectors over the four score categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleWeightTable {
    #[serde(default)]
    pub roles: Vec<RoleWeightEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleWeightEntry {
    pub role: Role,
    pub weights: CategoryWeights,
}

impl RoleWeightTable {
    pub fn get(&self, role: Role) -> Option<&CategoryWeights> {
        self.roles
            .iter()
            .find(|entry| entry.role == role)
            .map(|entry| &entry.weights)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &CategoryWeights)> {
        self.roles.iter().map(|entry| (entry.role, &entry.weights))
    }

    /// Every catalog role must appear exactly once with weights summing to 1.0.
    pub fn validate(&self) -> Result<()> {
        for role in Role::ALL {
            let count = self.roles.iter().filter(|e| e.role == role).count();
            if count != 1 {
                return Err(ScorerError::ReferenceData(format!(
                    "Role {} appears {} times in the weight table, expected exactly once",
                    role, count
                )));
            }
        }
        for entry in &self.roles {
            let sum = entry.weights.sum();
            if (sum - 1.0).abs() > 1e-6 {
                return Err(ScorerError::ReferenceData(format!(
                    "Weights for role {} must sum to 1.0, got {:.4}",
                    entry.role, sum
                )));
            }
        }
        Ok(())
    }

    pub fn builtin() -> Self {
        fn entry(role: Role, education: f64, experience: f64, skills: f64, languages: f64) -> RoleWeightEntry {
            RoleWeightEntry {
                role,
                weights: CategoryWeights {
                    education,
                    experience,
                    skills,
                    languages,
                },
            }
        }
        Self {
            roles: vec![
                entry(Role::DataScientist, 0.35, 0.25, 0.3, 0.1),
                entry(Role::DataEngineer, 0.3, 0.35, 0.25, 0.1),
                entry(Role::TechnicalAnalyst, 0.25, 0.3, 0.35, 0.1),
                entry(Role::AiManager, 0.3, 0.4, 0.2, 0.1),
                entry(Role::MlEngineer, 0.3, 0.3, 0.35, 0.05),
                entry(Role::DataArchitect, 0.3, 0.4, 0.2, 0.1),
                entry(Role::BusinessIntelligenceAnalyst, 0.25, 0.3, 0.35, 0.1),
                entry(Role::ResearchScientist, 0.4, 0.3, 0.2, 0.1),
            ],
        }
    }
}

/// A single recommendable course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub platform: String,
    pub url: String,
    pub duration: String,
    pub level: String,
}

/// Courses grouped by topic tag, in catalog order within each topic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseCatalog {
    #[serde(default)]
    pub courses: BTreeMap<String, Vec<Course>>,
}

impl CourseCatalog {
    pub fn topic(&self, tag: &str) -> Option<&[Course]> {
        self.courses.get(tag).map(|c| c.as_slice())
    }

    pub fn builtin() -> Self {
        fn course(name: &str, platform: &str, url: &str, duration: &str, level: &str) -> Course {
            Course {
                name: name.to_string(),
                platform: platform.to_string(),
                url: url.to_string(),
                duration: duration.to_string(),
                level: level.to_string(),
            }
        }
        let mut courses = BTreeMap::new();
        courses.insert(
            "machine_learning".to_string(),
            vec![
                course(
                    "Machine Learning Specialization",
                    "Coursera",
                    "https://www.coursera.org/specializations/machine-learning-introduction",
                    "3 months",
                    "beginner",
                ),
                course(
                    "Applied Machine Learning",
                    "edX",
                    "https://www.edx.org/learn/machine-learning",
                    "8 weeks",
                    "intermediate",
                ),
            ],
        );
        courses.insert(
            "deep_learning".to_string(),
            vec![
                course(
                    "Deep Learning Specialization",
                    "Coursera",
                    "https://www.coursera.org/specializations/deep-learning",
                    "5 months",
                    "intermediate",
                ),
                course(
                    "Practical Deep Learning for Coders",
                    "fast.ai",
                    "https://course.fast.ai/",
                    "7 weeks",
                    "intermediate",
                ),
            ],
        );
        courses.insert(
            "sql_databases".to_string(),
            vec![course(
                "SQL for Data Science",
                "Coursera",
                "https://www.coursera.org/learn/sql-for-data-science",
                "4 weeks",
                "beginner",
            )],
        );
        courses.insert(
            "big_data".to_string(),
            vec![course(
                "Big Data with Spark and Hadoop",
                "Coursera",
                "https://www.coursera.org/learn/introduction-to-big-data-with-spark-hadoop",
                "6 weeks",
                "intermediate",
            )],
        );
        courses.insert(
            "nlp".to_string(),
            vec![course(
                "Natural Language Processing Specialization",
                "Coursera",
                "https://www.coursera.org/specializations/natural-language-processing",
                "4 months",
                "intermediate",
            )],
        );
        courses.insert(
            "computer_vision".to_string(),
            vec![course(
                "Deep Learning for Computer Vision",
                "Udacity",
                "https://www.udacity.com/course/computer-vision-nanodegree--nd891",
                "3 months",
                "advanced",
            )],
        );
        Self { courses }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_role_weights_valid() {
        RoleWeightTable::builtin().validate().unwrap();
    }

    #[test]
    fn test_position_first_match_wins() {
        let matrix = ExperienceMatrix {
            positions: vec![
                AliasGroup {
                    aliases: vec!["engineer".to_string()],
                    weight: 0.6,
                },
                AliasGroup {
                    aliases: vec!["ml engineer".to_string()],
                    weight: 1.0,
                },
            ],
            ..Default::default()
        };
        // "ml engineer" also contains "engineer"; the earlier group wins.
        assert_eq!(matrix.position_weight("Senior ML Engineer"), Some(0.6));
    }

    #[test]
    fn test_tasks_take_maximum_across_groups() {
        let matrix = ExperienceMatrix {
            tasks: vec![
                AliasGroup {
                    aliases: vec!["sql".to_string()],
                    weight: 0.6,
                },
                AliasGroup {
                    aliases: vec!["machine learning".to_string()],
                    weight: 1.0,
                },
            ],
            ..Default::default()
        };
        let weight = matrix.tasks_weight("Built machine learning models over SQL warehouses");
        assert_eq!(weight, Some(1.0));
    }

    #[test]
    fn test_no_match_yields_none() {
        let matrix = ExperienceMatrix::builtin();
        assert_eq!(matrix.position_weight("florist"), None);
        assert_eq!(matrix.tasks_weight("arranged flowers"), None);
    }

    #[test]
    fn test_university_lookup_is_substring_based() {
        let table = UniversityTable::builtin();
        assert_eq!(
            table.rank_for("Massachusetts Institute of Technology (MIT)"),
            Some(UniversityRank::Top)
        );
        assert_eq!(table.rank_for("Unknown University"), None);
    }

    #[test]
    fn test_duplicate_role_rejected() {
        let mut table = RoleWeightTable::builtin();
        let dup = table.roles[0].clone();
        table.roles.push(dup);
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_course_catalog_lookup() {
        let catalog = CourseCatalog::builtin();
        assert!(catalog.topic("machine_learning").is_some());
        assert!(catalog.topic("underwater_basket_weaving").is_none());
    }
}
