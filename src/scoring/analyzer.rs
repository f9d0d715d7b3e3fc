//! The analyzer: orchestrates the full scoring pipeline
//!
//! One `CandidateAnalyzer` holds the immutable reference tables and scoring
//! configuration and can score any number of candidates; each `analyze` call
//! is an independent, stateless computation.

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::input::record::CandidateRecord;
use crate::reference::ReferenceData;
use crate::scoring::engine::{
    round1, CategoryScores, EducationDetails, ExperienceDetails, LanguagesDetails, ScoringEngine,
    SkillsDetails,
};
use crate::scoring::recommendations::{self, Recommendations};
use crate::scoring::role_fit::{RoleFit, RoleFitRanker};
use crate::scoring::standardizer::Standardizer;
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub status: String,
    pub overall_score: OverallScore,
    pub role_fit: RoleFit,
    pub details: AssessmentDetails,
    pub recommendations: Recommendations,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallScore {
    pub value: f64,
    pub details: CategoryScores,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentDetails {
    pub education: EducationDetails,
    pub experience: ExperienceDetails,
    pub skills: SkillsDetails,
    pub languages: LanguagesDetails,
}

pub struct CandidateAnalyzer {
    reference: ReferenceData,
    config: ScoringConfig,
    today: Option<NaiveDate>,
}

impl CandidateAnalyzer {
    pub fn new(reference: ReferenceData, config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        reference.role_weights.validate()?;
        Ok(Self {
            reference,
            config,
            today: None,
        })
    }

    /// Built-in reference tables and default weights.
    pub fn with_defaults() -> Self {
        Self {
            reference: ReferenceData::builtin(),
            config: ScoringConfig::default(),
            today: None,
        }
    }

    /// Pin the date used for open-ended experience entries.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Run the full pipeline: standardize, score categories, rank roles,
    /// generate recommendations.
    pub fn analyze(&self, record: &CandidateRecord) -> Result<AssessmentResult> {
        info!("Starting candidate analysis");

        let standardizer = match self.today {
            Some(today) => Standardizer::with_today(&self.reference.experience_matrix, today),
            None => Standardizer::new(&self.reference.experience_matrix),
        };
        let candidate = standardizer.standardize(record);
        debug!(
            "Standardized record: {} education, {} experience, {} languages",
            candidate.education.len(),
            candidate.experience.len(),
            candidate.languages.len()
        );

        let engine = ScoringEngine::new(&self.config, &self.reference);
        let scores = engine.score(&candidate);
        debug!(
            "Category scores: education {:.1}, experience {:.1}, skills {:.1}, languages {:.1}",
            scores.education, scores.experience, scores.skills, scores.languages
        );

        let ranker = RoleFitRanker::new(&self.reference.role_weights, &self.config.overall);
        let role_fit = ranker.rank(&scores);
        let overall = ranker.overall_score(&scores);
        info!(
            "Overall score {:.1}, best fit {} ({:.1})",
            overall, role_fit.best_fit.role, role_fit.best_fit.score
        );

        let recommendations =
            recommendations::generate(&scores, role_fit.best_fit.role, &self.reference.courses);

        Ok(AssessmentResult {
            status: "success".to_string(),
            overall_score: OverallScore {
                value: round1(overall),
                details: CategoryScores {
                    education: round1(scores.education),
                    experience: round1(scores.experience),
                    skills: round1(scores.skills),
                    languages: round1(scores.languages),
                },
            },
            role_fit,
            details: AssessmentDetails {
                education: engine.education_details(&candidate.education),
                experience: engine.experience_details(&candidate.experience),
                skills: engine.skills_details(&candidate.skills),
                languages: engine.languages_details(&candidate.languages),
            },
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> CandidateAnalyzer {
        CandidateAnalyzer::with_defaults()
            .with_today(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    fn record() -> CandidateRecord {
        serde_json::from_str(
            r#"{
                "education": [{"degree": "phd", "institution": "Unknown University"}],
                "experience": [{
                    "position": "Gardener",
                    "company": "Acme Flowers",
                    "start_date": "2019-01-01",
                    "end_date": "2021-01-01",
                    "description": "watering plants"
                }],
                "skills": {
                    "required": ["s1", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10"],
                    "additional": [],
                    "certifications": []
                },
                "languages": [{"language": "english", "level": "native"}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_worked_example_end_to_end() {
        let result = analyzer().analyze(&record()).unwrap();
        assert_eq!(result.status, "success");
        assert_eq!(result.overall_score.details.education, 70.0);
        assert_eq!(result.overall_score.details.experience, 27.0);
        assert_eq!(result.overall_score.details.skills, 30.0);
        assert_eq!(result.overall_score.details.languages, 30.0);
        assert_eq!(result.overall_score.value, 39.0);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let analyzer = analyzer();
        let record = record();
        let first = analyzer.analyze(&record).unwrap();
        let second = analyzer.analyze(&record).unwrap();
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn test_empty_record_scores_zero() {
        let result = analyzer()
            .analyze(&CandidateRecord::default())
            .unwrap();
        assert_eq!(result.overall_score.value, 0.0);
        assert_eq!(result.overall_score.details.education, 0.0);
        assert_eq!(result.overall_score.details.experience, 0.0);
        assert_eq!(result.overall_score.details.skills, 0.0);
        assert_eq!(result.overall_score.details.languages, 0.0);
        // Every category is below threshold, so each carries one advisory.
        assert_eq!(result.recommendations.education.len(), 1);
        assert_eq!(result.recommendations.experience.len(), 1);
        assert_eq!(result.recommendations.skills.len(), 1);
        assert_eq!(result.recommendations.languages.len(), 1);
    }

    #[test]
    fn test_details_reflect_standardized_entries() {
        let result = analyzer().analyze(&record()).unwrap();
        assert_eq!(result.details.education.degrees, vec!["phd"]);
        assert_eq!(result.details.education.institutions, vec!["Unknown University"]);
        assert_eq!(result.details.experience.positions, vec!["Gardener"]);
        assert_eq!(result.details.experience.years, vec!["2"]);
        assert_eq!(result.details.skills.required_skills.len(), 10);
        assert_eq!(result.details.languages.languages.len(), 1);
        assert_eq!(result.details.languages.languages[0].score, 30.0);
    }

    #[test]
    fn test_best_fit_role_yields_course_recommendations() {
        let result = analyzer().analyze(&record()).unwrap();
        // The built-in catalog covers every role's topic list.
        assert!(!result.recommendations.course_recommendations.is_empty());
    }
}
