//! Loading of reference tables, with per-table fallback
//!
//! A table file that is missing or fails to parse degrades that table to its
//! empty default (logged at error level); it never aborts startup. The role
//! weight table is the exception: scoring needs the full role catalog, so it
//! falls back to the built-in vectors, and a file that parses but violates
//! the sum-to-one invariant is a hard error.

use crate::error::Result;
use crate::reference::tables::{CourseCatalog, ExperienceMatrix, RoleWeightTable, UniversityTable};
use log::{error, info};
use serde::de::DeserializeOwned;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub experience_matrix: ExperienceMatrix,
    pub universities: UniversityTable,
    pub role_weights: RoleWeightTable,
    pub courses: CourseCatalog,
}

impl ReferenceData {
    /// The compiled-in tables. Infallible by construction; the built-in role
    /// vectors are covered by a unit test.
    pub fn builtin() -> Self {
        Self {
            experience_matrix: ExperienceMatrix::builtin(),
            universities: UniversityTable::builtin(),
            role_weights: RoleWeightTable::builtin(),
            courses: CourseCatalog::builtin(),
        }
    }

    /// Load table overrides from a reference directory. Each table lives in
    /// its own TOML file; a missing or malformed file degrades that single
    /// table without failing the others.
    pub fn load(dir: &Path) -> Result<Self> {
        let experience_matrix =
            load_table::<ExperienceMatrix>(dir, "experience_matrix.toml").unwrap_or_default();
        let universities =
            load_table::<UniversityTable>(dir, "universities.toml").unwrap_or_default();
        let courses = load_table::<CourseCatalog>(dir, "courses.toml").unwrap_or_default();

        let role_weights = match load_table::<RoleWeightTable>(dir, "role_weights.toml") {
            Some(table) => {
                table.validate()?;
                table
            }
            None => RoleWeightTable::builtin(),
        };

        Ok(Self {
            experience_matrix,
            universities,
            role_weights,
            courses,
        })
    }
}

fn load_table<T: DeserializeOwned>(dir: &Path, file: &str) -> Option<T> {
    let path = dir.join(file);
    if !path.exists() {
        info!("Reference table {} not found, using default", path.display());
        return None;
    }
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to read reference table {}: {}", path.display(), e);
            return None;
        }
    };
    match toml::from_str(&content) {
        Ok(table) => {
            info!("Loaded reference table {}", path.display());
            Some(table)
        }
        Err(e) => {
            error!("Failed to parse reference table {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_builtin_tables_are_populated() {
        let data = ReferenceData::builtin();
        assert!(!data.experience_matrix.positions.is_empty());
        assert!(!data.universities.universities.is_empty());
        assert!(data.role_weights.validate().is_ok());
        assert!(!data.courses.courses.is_empty());
    }

    #[test]
    fn test_missing_files_degrade_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let data = ReferenceData::load(dir.path()).unwrap();

        // File-backed tables degrade to empty; role weights keep the catalog.
        assert!(data.experience_matrix.positions.is_empty());
        assert!(data.universities.universities.is_empty());
        assert!(data.courses.courses.is_empty());
        assert!(data.role_weights.validate().is_ok());
    }

    #[test]
    fn test_malformed_table_degrades_without_failing_others() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("universities.toml"), "not [valid toml").unwrap();
        fs::write(
            dir.path().join("experience_matrix.toml"),
            r#"
[[positions]]
aliases = ["data scientist"]
weight = 1.0
"#,
        )
        .unwrap();

        let data = ReferenceData::load(dir.path()).unwrap();
        assert!(data.universities.universities.is_empty());
        assert_eq!(data.experience_matrix.position_weight("Data Scientist"), Some(1.0));
    }

    #[test]
    fn test_invalid_role_weight_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("role_weights.toml"),
            r#"
[[roles]]
role = "data_scientist"
weights = { education = 0.9, experience = 0.9, skills = 0.1, languages = 0.1 }
"#,
        )
        .unwrap();

        assert!(ReferenceData::load(dir.path()).is_err());
    }
}
