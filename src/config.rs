//! Scoring configuration: the fixed weight tables, injected at construction
//!
//! Every tunable constant of the pipeline lives here as an immutable value
//! rather than module state, so tests can substitute alternate tables. The
//! two thresholds the scoring contract fixes (relevance 0.7, recommendation
//! cutoff 80) are deliberately not part of this struct.

use crate::error::{Result, ScorerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub degrees: DegreeWeights,
    pub university_ranks: RankWeights,
    pub language_levels: LevelWeights,
    pub skills: SkillsWeights,
    pub experience: ExperienceWeights,
    /// Global weight vector for the overall score; must sum to 1.0.
    pub overall: CategoryWeights,
}

/// Weight per category, used both for the overall score and per-role vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub education: f64,
    pub experience: f64,
    pub skills: f64,
    pub languages: f64,
}

impl CategoryWeights {
    pub fn sum(&self) -> f64 {
        self.education + self.experience + self.skills + self.languages
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegreeWeights {
    pub phd: f64,
    pub master: f64,
    pub bachelor: f64,
    pub specialist: f64,
    pub incomplete_higher: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankWeights {
    pub top: f64,
    pub good: f64,
    pub average: f64,
    pub unknown: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelWeights {
    pub native: f64,
    pub fluent: f64,
    pub advanced: f64,
    pub intermediate: f64,
    pub basic: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsWeights {
    pub required_weight: f64,
    pub additional_weight: f64,
    pub certifications_weight: f64,
    pub required_cap: usize,
    pub additional_cap: usize,
    pub certifications_cap: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceWeights {
    /// Per-year tenure multiplier; the base saturates at 1.0.
    pub years_multiplier: f64,
    /// Applied on top of base * quality_modifier.
    pub relevance_multiplier: f64,
    pub position_share: f64,
    pub company_share: f64,
    pub tasks_share: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            degrees: DegreeWeights {
                phd: 1.0,
                master: 0.9,
                bachelor: 0.8,
                specialist: 0.7,
                incomplete_higher: 0.5,
            },
            university_ranks: RankWeights {
                top: 1.0,
                good: 0.8,
                average: 0.6,
                unknown: 0.4,
            },
            language_levels: LevelWeights {
                native: 1.2,
                fluent: 1.0,
                advanced: 0.8,
                intermediate: 0.6,
                basic: 0.4,
            },
            skills: SkillsWeights {
                required_weight: 1.5,
                additional_weight: 1.0,
                certifications_weight: 0.8,
                required_cap: 10,
                additional_cap: 15,
                certifications_cap: 5,
            },
            experience: ExperienceWeights {
                years_multiplier: 0.15,
                relevance_multiplier: 1.8,
                position_share: 0.4,
                company_share: 0.3,
                tasks_share: 0.3,
            },
            overall: CategoryWeights {
                education: 0.25,
                experience: 0.35,
                skills: 0.25,
                languages: 0.15,
            },
        }
    }
}

impl ScoringConfig {
    /// Load from the given path, or from the default location. A missing
    /// default config is created on first use; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    let config = Self::default();
                    config.save(&default_path)?;
                    Ok(config)
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ScoringConfig = toml::from_str(&content).map_err(|e| {
            ScorerError::Configuration(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| ScorerError::Configuration(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("candidate-scorer")
            .join("config.toml")
    }

    /// The overall weight vector must sum to 1.0.
    pub fn validate(&self) -> Result<()> {
        let sum = self.overall.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ScorerError::Configuration(format!(
                "Overall category weights must sum to 1.0, got {:.4}",
                sum
            )));
        }
        Ok(())
    }
}
