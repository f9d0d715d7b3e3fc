//! Improvement recommendations: advisory strings and course suggestions

use crate::reference::tables::{Course, CourseCatalog, Role};
use crate::scoring::engine::CategoryScores;
use serde::{Deserialize, Serialize};

/// Categories scoring below this produce an advisory string.
pub const IMPROVEMENT_THRESHOLD: f64 = 80.0;

const EDUCATION_ADVICE: &str =
    "Consider pursuing an additional degree or a formal certification program";
const EXPERIENCE_ADVICE: &str =
    "Seek more hands-on experience in areas relevant to your target role";
const SKILLS_ADVICE: &str =
    "Learn additional technologies and tools that are in demand for your role";
const LANGUAGES_ADVICE: &str =
    "Improve your English proficiency and consider learning an additional language";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recommendations {
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub course_recommendations: Vec<Course>,
}

/// Course topic tags per role, in recommendation order.
fn role_topics(role: Role) -> &'static [&'static str] {
    match role {
        Role::DataScientist => &["machine_learning", "deep_learning", "sql_databases"],
        Role::DataEngineer => &["sql_databases", "big_data"],
        Role::TechnicalAnalyst => &["sql_databases", "machine_learning"],
        Role::AiManager => &["machine_learning", "deep_learning"],
        Role::MlEngineer => &["deep_learning", "nlp", "computer_vision"],
        Role::DataArchitect => &["sql_databases", "big_data"],
        Role::BusinessIntelligenceAnalyst => &["sql_databases", "machine_learning"],
        Role::ResearchScientist => &["deep_learning", "nlp", "computer_vision"],
    }
}

pub fn generate(
    scores: &CategoryScores,
    best_fit: Role,
    catalog: &CourseCatalog,
) -> Recommendations {
    let mut recommendations = Recommendations::default();

    if scores.education < IMPROVEMENT_THRESHOLD {
        recommendations.education.push(EDUCATION_ADVICE.to_string());
    }
    if scores.experience < IMPROVEMENT_THRESHOLD {
        recommendations
            .experience
            .push(EXPERIENCE_ADVICE.to_string());
    }
    if scores.skills < IMPROVEMENT_THRESHOLD {
        recommendations.skills.push(SKILLS_ADVICE.to_string());
    }
    if scores.languages < IMPROVEMENT_THRESHOLD {
        recommendations.languages.push(LANGUAGES_ADVICE.to_string());
    }

    // Topics missing from the catalog are skipped, not an error.
    for topic in role_topics(best_fit) {
        if let Some(courses) = catalog.topic(topic) {
            recommendations
                .course_recommendations
                .extend(courses.iter().cloned());
        }
    }

    recommendations
}
