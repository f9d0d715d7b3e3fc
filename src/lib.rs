//! Candidate scorer library
//!
//! Turns a semi-structured candidate profile into a multi-criteria
//! assessment: per-category scores, role-fit ranking against a fixed role
//! catalog, an overall score, and improvement recommendations.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod reference;
pub mod scoring;
pub mod storage;

pub use config::ScoringConfig;
pub use error::{Result, ScorerError};
pub use reference::ReferenceData;
pub use scoring::analyzer::{AssessmentResult, CandidateAnalyzer};
