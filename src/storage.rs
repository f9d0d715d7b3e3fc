//! Persistence seam for assessment results
//!
//! The core never persists anything itself; callers hand completed
//! `(record, assessment)` pairs to an `AssessmentStore` keyed by an opaque
//! identifier.

use crate::error::{Result, ScorerError};
use crate::input::record::CandidateRecord;
use crate::scoring::analyzer::AssessmentResult;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAssessment {
    pub id: String,
    pub record: CandidateRecord,
    pub assessment: AssessmentResult,
}

pub trait AssessmentStore {
    fn save(&self, id: &str, record: &CandidateRecord, assessment: &AssessmentResult)
        -> Result<()>;
    fn load(&self, id: &str) -> Result<Option<StoredAssessment>>;
}

/// One pretty-printed JSON file per assessment under a base directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, id: &str) -> Result<PathBuf> {
        if id.is_empty() || id.contains(&['/', '\\', '.'][..]) {
            return Err(ScorerError::Storage(format!(
                "Invalid assessment id: {:?}",
                id
            )));
        }
        Ok(self.dir.join(format!("{}.json", id)))
    }
}

impl AssessmentStore for JsonFileStore {
    fn save(
        &self,
        id: &str,
        record: &CandidateRecord,
        assessment: &AssessmentResult,
    ) -> Result<()> {
        let stored = StoredAssessment {
            id: id.to_string(),
            record: record.clone(),
            assessment: assessment.clone(),
        };
        let path = self.path_for(id)?;
        let content = serde_json::to_string_pretty(&stored)?;
        std::fs::write(&path, content)?;
        info!("Saved assessment {} to {}", id, path.display());
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Option<StoredAssessment>> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }
}
