//! Candidate record input: schema and loading

pub mod manager;
pub mod record;

pub use manager::InputManager;
pub use record::{
    CandidateRecord, RawEducationEntry, RawExperienceEntry, RawLanguageEntry, RawSkills,
};
