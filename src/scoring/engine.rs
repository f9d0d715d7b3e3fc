//! Category scoring: education, experience, skills, languages
//!
//! Each category is scored independently on a 0-100 scale from standardized
//! data plus reference-table lookups. The constants live in
//! `ScoringConfig`; this module only applies them.

use crate::config::ScoringConfig;
use crate::reference::ReferenceData;
use crate::scoring::standardizer::{
    Degree, LanguageLevel, StandardizedCandidate, StandardizedEducationEntry,
    StandardizedExperienceEntry, StandardizedLanguageEntry, StandardizedSkillSet,
};
use serde::{Deserialize, Serialize};

/// Share of the education entry score carried by the degree; the remainder
/// comes from the university rank.
const DEGREE_SHARE: f64 = 0.7;
const UNIVERSITY_SHARE: f64 = 0.3;

/// Composite score assumed for an experience facet with no alias match.
const FACET_DEFAULT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub education: f64,
    pub experience: f64,
    pub skills: f64,
    pub languages: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationDetails {
    pub degrees: Vec<String>,
    pub institutions: Vec<String>,
    pub years: Vec<String>,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceDetails {
    pub positions: Vec<String>,
    pub companies: Vec<String>,
    pub years: Vec<String>,
    pub responsibilities: Vec<String>,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsDetails {
    pub required_skills: Vec<String>,
    pub additional_skills: Vec<String>,
    pub certifications: Vec<String>,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesDetails {
    pub languages: Vec<LanguageDetail>,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageDetail {
    pub language: String,
    pub level: LanguageLevel,
    pub score: f64,
}

pub struct ScoringEngine<'a> {
    config: &'a ScoringConfig,
    reference: &'a ReferenceData,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(config: &'a ScoringConfig, reference: &'a ReferenceData) -> Self {
        Self { config, reference }
    }

    pub fn score(&self, candidate: &StandardizedCandidate) -> CategoryScores {
        CategoryScores {
            education: self.education_score(&candidate.education),
            experience: self.experience_score(&candidate.experience),
            skills: self.skills_score(&candidate.skills),
            languages: self.languages_score(&candidate.languages),
        }
    }

    /// Best single education entry wins: degree weight blended with the
    /// institution's rank weight, scaled to 100.
    pub fn education_score(&self, entries: &[StandardizedEducationEntry]) -> f64 {
        let mut best = 0.0f64;
        for entry in entries {
            let degree_weight = self.degree_weight(entry.degree);
            let university_weight = self
                .reference
                .universities
                .rank_for(&entry.institution)
                .map(|rank| match rank {
                    crate::reference::UniversityRank::Top => self.config.university_ranks.top,
                    crate::reference::UniversityRank::Good => self.config.university_ranks.good,
                    crate::reference::UniversityRank::Average => {
                        self.config.university_ranks.average
                    }
                    crate::reference::UniversityRank::Unknown => {
                        self.config.university_ranks.unknown
                    }
                })
                .unwrap_or(0.0);
            let entry_score = degree_weight * DEGREE_SHARE + university_weight * UNIVERSITY_SHARE;
            best = best.max(entry_score);
        }
        (best * 100.0).clamp(0.0, 100.0)
    }

    /// Tenure-capped base times a duration-weighted quality modifier times
    /// the relevance multiplier. Relevance of role, company, and tasks
    /// dominates raw tenure: the base saturates after ~6.7 years while the
    /// multiplier can nearly double it.
    pub fn experience_score(&self, entries: &[StandardizedExperienceEntry]) -> f64 {
        if entries.is_empty() {
            return 0.0;
        }
        let weights = &self.config.experience;

        let total_years: f64 = entries
            .iter()
            .map(|e| e.duration_years)
            .filter(|&d| d > 0.0)
            .sum();
        if total_years <= 0.0 {
            return 0.0;
        }

        let base = (total_years * weights.years_multiplier).min(1.0);

        let matrix = &self.reference.experience_matrix;
        let mut weighted_scores = Vec::new();
        for entry in entries {
            if entry.duration_years <= 0.0 {
                continue;
            }
            let position_score = matrix
                .position_weight(&entry.position)
                .map(|w| w.min(1.0))
                .unwrap_or(FACET_DEFAULT);
            let company_score = matrix
                .company_weight(&entry.company)
                .map(|w| w.min(1.0))
                .unwrap_or(FACET_DEFAULT);
            let tasks_score = matrix
                .tasks_weight(&entry.description)
                .map(|w| w.max(FACET_DEFAULT).min(1.0))
                .unwrap_or(FACET_DEFAULT);

            let composite = position_score * weights.position_share
                + company_score * weights.company_share
                + tasks_score * weights.tasks_share;
            weighted_scores.push(composite * entry.duration_years / total_years);
        }

        let quality_modifier = if weighted_scores.is_empty() {
            FACET_DEFAULT
        } else {
            weighted_scores.iter().sum::<f64>().min(1.0)
        };

        let final_score = base * quality_modifier * weights.relevance_multiplier;
        (final_score * 100.0).clamp(0.0, 100.0)
    }

    /// Per-bucket saturating count fractions, weighted and scaled by 20.
    pub fn skills_score(&self, skills: &StandardizedSkillSet) -> f64 {
        let weights = &self.config.skills;
        let fraction = |count: usize, cap: usize| (count as f64 / cap as f64).min(1.0);

        let total = fraction(skills.required.len(), weights.required_cap) * weights.required_weight
            + fraction(skills.additional.len(), weights.additional_cap)
                * weights.additional_weight
            + fraction(skills.certifications.len(), weights.certifications_cap)
                * weights.certifications_weight;

        (total * 20.0).clamp(0.0, 100.0)
    }

    /// Sum of per-language level weights, scaled by 25.
    pub fn languages_score(&self, entries: &[StandardizedLanguageEntry]) -> f64 {
        let total: f64 = entries
            .iter()
            .map(|entry| self.level_weight(entry.level))
            .sum();
        (total * 25.0).clamp(0.0, 100.0)
    }

    pub fn education_details(&self, entries: &[StandardizedEducationEntry]) -> EducationDetails {
        EducationDetails {
            degrees: entries.iter().map(|e| e.degree.to_string()).collect(),
            institutions: entries.iter().map(|e| e.institution.clone()).collect(),
            years: entries
                .iter()
                .map(|e| format!("{} - {}", e.start_date, e.end_date))
                .collect(),
            score: round1(self.education_score(entries)),
        }
    }

    pub fn experience_details(
        &self,
        entries: &[StandardizedExperienceEntry],
    ) -> ExperienceDetails {
        ExperienceDetails {
            positions: entries.iter().map(|e| e.position.clone()).collect(),
            companies: entries.iter().map(|e| e.company.clone()).collect(),
            years: entries
                .iter()
                .map(|e| e.duration_years.to_string())
                .collect(),
            responsibilities: entries.iter().map(|e| e.description.clone()).collect(),
            score: round1(self.experience_score(entries)),
        }
    }

    pub fn skills_details(&self, skills: &StandardizedSkillSet) -> SkillsDetails {
        SkillsDetails {
            required_skills: skills.required.clone(),
            additional_skills: skills.additional.clone(),
            certifications: skills.certifications.clone(),
            score: round1(self.skills_score(skills)),
        }
    }

    pub fn languages_details(&self, entries: &[StandardizedLanguageEntry]) -> LanguagesDetails {
        LanguagesDetails {
            languages: entries
                .iter()
                .map(|entry| LanguageDetail {
                    language: entry.language.clone(),
                    level: entry.level,
                    score: round1(self.languages_score(std::slice::from_ref(entry))),
                })
                .collect(),
            score: round1(self.languages_score(entries)),
        }
    }

    fn degree_weight(&self, degree: Degree) -> f64 {
        let weights = &self.config.degrees;
        match degree {
            Degree::Phd => weights.phd,
            Degree::Master => weights.master,
            Degree::Bachelor => weights.bachelor,
            Degree::Specialist => weights.specialist,
            Degree::IncompleteHigher => weights.incomplete_higher,
        }
    }

    fn level_weight(&self, level: LanguageLevel) -> f64 {
        let weights = &self.config.language_levels;
        match level {
            LanguageLevel::Native => weights.native,
            LanguageLevel::Fluent => weights.fluent,
            LanguageLevel::Advanced => weights.advanced,
            LanguageLevel::Intermediate => weights.intermediate,
            LanguageLevel::Basic => weights.basic,
        }
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
