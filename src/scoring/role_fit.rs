//! Role-fit ranking and the overall score

use crate::config::CategoryWeights;
use crate::reference::tables::{Role, RoleWeightTable};
use crate::scoring::engine::{round1, CategoryScores};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleFit {
    pub best_fit: BestFit,
    pub all_roles: BTreeMap<Role, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestFit {
    pub role: Role,
    pub score: f64,
}

pub struct RoleFitRanker<'a> {
    table: &'a RoleWeightTable,
    overall_weights: &'a CategoryWeights,
}

impl<'a> RoleFitRanker<'a> {
    pub fn new(table: &'a RoleWeightTable, overall_weights: &'a CategoryWeights) -> Self {
        Self {
            table,
            overall_weights,
        }
    }

    /// Weighted sum per role, clamped to 100. Exact ties on the best score
    /// are broken alphabetically by role name.
    pub fn rank(&self, scores: &CategoryScores) -> RoleFit {
        let mut all_roles = BTreeMap::new();
        let mut best: Option<(Role, f64)> = None;

        for (role, weights) in self.table.iter() {
            let score = weighted_sum(scores, weights).min(100.0);
            all_roles.insert(role, round1(score));

            let better = match best {
                None => true,
                Some((best_role, best_score)) => {
                    score > best_score
                        || (score == best_score && role.as_str() < best_role.as_str())
                }
            };
            if better {
                best = Some((role, score));
            }
        }

        // The weight table is validated to carry the full role catalog.
        let (role, score) = best.expect("role weight table is empty");
        RoleFit {
            best_fit: BestFit {
                role,
                score: round1(score),
            },
            all_roles,
        }
    }

    pub fn overall_score(&self, scores: &CategoryScores) -> f64 {
        weighted_sum(scores, self.overall_weights).min(100.0)
    }
}

fn weighted_sum(scores: &CategoryScores, weights: &CategoryWeights) -> f64 {
    scores.education * weights.education
        + scores.experience * weights.experience
        + scores.skills * weights.skills
        + scores.languages * weights.languages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;

    fn scores(education: f64, experience: f64, skills: f64, languages: f64) -> CategoryScores {
        CategoryScores {
            education,
            experience,
            skills,
            languages,
        }
    }

    #[test]
    fn test_overall_score_matches_worked_example() {
        let config = ScoringConfig::default();
        let table = RoleWeightTable::builtin();
        let ranker = RoleFitRanker::new(&table, &config.overall);
        let overall = ranker.overall_score(&scores(70.0, 27.0, 30.0, 30.0));
        assert!((round1(overall) - 39.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_roles_scored_and_bounded() {
        let config = ScoringConfig::default();
        let table = RoleWeightTable::builtin();
        let ranker = RoleFitRanker::new(&table, &config.overall);
        let fit = ranker.rank(&scores(70.0, 27.0, 30.0, 30.0));
        assert_eq!(fit.all_roles.len(), Role::ALL.len());
        for score in fit.all_roles.values() {
            assert!(*score >= 0.0 && *score <= 100.0);
        }
    }

    #[test]
    fn test_education_heavy_profile_fits_research_scientist() {
        let config = ScoringConfig::default();
        let table = RoleWeightTable::builtin();
        let ranker = RoleFitRanker::new(&table, &config.overall);
        let fit = ranker.rank(&scores(100.0, 0.0, 0.0, 0.0));
        // research_scientist carries the highest education weight (0.4).
        assert_eq!(fit.best_fit.role, Role::ResearchScientist);
        assert!((fit.best_fit.score - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_exact_ties_break_alphabetically() {
        let config = ScoringConfig::default();
        let table = RoleWeightTable::builtin();
        let ranker = RoleFitRanker::new(&table, &config.overall);
        // ai_manager and data_architect carry identical weight vectors, so
        // an experience-only profile scores them identically.
        let fit = ranker.rank(&scores(0.0, 100.0, 0.0, 0.0));
        assert_eq!(fit.all_roles[&Role::AiManager], fit.all_roles[&Role::DataArchitect]);
        assert_eq!(fit.best_fit.role, Role::AiManager);
        assert!((fit.best_fit.score - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_role_scores_clamped_to_100() {
        let config = ScoringConfig::default();
        let table = RoleWeightTable::builtin();
        let ranker = RoleFitRanker::new(&table, &config.overall);
        let fit = ranker.rank(&scores(100.0, 100.0, 100.0, 100.0));
        for score in fit.all_roles.values() {
            assert!(*score <= 100.0);
        }
    }
}
