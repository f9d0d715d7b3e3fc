//! The scoring pipeline: standardization, category scoring, role-fit
//! ranking, and recommendation generation
//!
//! The pipeline is a pure function per invocation: raw record → standardized
//! record → category scores → role ranking → recommendations. Reference
//! tables and the scoring configuration are the only shared state, and both
//! are immutable after construction.

pub mod analyzer;
pub mod engine;
pub mod recommendations;
pub mod role_fit;
pub mod standardizer;

pub use analyzer::{AssessmentResult, CandidateAnalyzer};
pub use engine::{CategoryScores, ScoringEngine};
pub use recommendations::Recommendations;
pub use role_fit::{RoleFit, RoleFitRanker};
pub use standardizer::{StandardizedCandidate, Standardizer};
