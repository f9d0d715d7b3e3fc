//! Output formatters for assessment results

use crate::error::Result;
use crate::scoring::analyzer::AssessmentResult;
use colored::Colorize;
use serde_json::json;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

pub trait OutputFormatter {
    fn format(&self, result: &AssessmentResult) -> Result<String>;
}

/// Console formatter with colored score presentation
pub struct ConsoleFormatter {
    use_colors: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn score_text(&self, score: f64) -> String {
        let text = format!("{:.1}", score);
        if !self.use_colors {
            return text;
        }
        if score >= 80.0 {
            text.green().bold().to_string()
        } else if score >= 60.0 {
            text.yellow().to_string()
        } else {
            text.red().to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &AssessmentResult) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "{}", "Candidate Assessment".bold()).ok();
        writeln!(out, "{}", "====================".bold()).ok();
        writeln!(
            out,
            "Overall score: {}",
            self.score_text(result.overall_score.value)
        )
        .ok();
        writeln!(out).ok();

        let details = &result.overall_score.details;
        writeln!(out, "Category breakdown:").ok();
        writeln!(out, "  Education:  {}", self.score_text(details.education)).ok();
        writeln!(out, "  Experience: {}", self.score_text(details.experience)).ok();
        writeln!(out, "  Skills:     {}", self.score_text(details.skills)).ok();
        writeln!(out, "  Languages:  {}", self.score_text(details.languages)).ok();
        writeln!(out).ok();

        writeln!(
            out,
            "Best fit: {} ({})",
            result.role_fit.best_fit.role.to_string().bold(),
            self.score_text(result.role_fit.best_fit.score)
        )
        .ok();

        let mut ranked: Vec<_> = result.role_fit.all_roles.iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
        writeln!(out, "Role fit:").ok();
        for (role, score) in ranked {
            writeln!(out, "  {:<32} {}", role.to_string(), self.score_text(*score)).ok();
        }

        let recs = &result.recommendations;
        let advisories: Vec<&String> = recs
            .education
            .iter()
            .chain(&recs.experience)
            .chain(&recs.skills)
            .chain(&recs.languages)
            .collect();
        if !advisories.is_empty() {
            writeln!(out).ok();
            writeln!(out, "Recommendations:").ok();
            for advice in advisories {
                writeln!(out, "  - {}", advice).ok();
            }
        }
        if !recs.course_recommendations.is_empty() {
            writeln!(out).ok();
            writeln!(out, "Suggested courses:").ok();
            for course in &recs.course_recommendations {
                writeln!(
                    out,
                    "  - {} ({}, {}, {})",
                    course.name, course.platform, course.duration, course.level
                )
                .ok();
            }
        }

        Ok(out)
    }
}

/// JSON formatter for API integration
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &AssessmentResult) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(result)?
        } else {
            serde_json::to_string(result)?
        };
        Ok(text)
    }
}

/// The error envelope emitted when the pipeline fails as a whole.
pub fn error_json(message: &str) -> String {
    json!({
        "status": "error",
        "message": message,
    })
    .to_string()
}
