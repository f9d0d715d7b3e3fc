//! Read-only reference tables consulted during scoring
//!
//! Tables are loaded once at startup and never mutated afterwards, so a
//! single `ReferenceData` can be shared across threads scoring different
//! candidates.

pub mod loader;
pub mod tables;

pub use loader::ReferenceData;
pub use tables::{
    AliasGroup, Course, CourseCatalog, ExperienceMatrix, Role, RoleWeightTable, UniversityRank,
    UniversityTable,
};
