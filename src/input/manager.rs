//! Input manager for loading structured candidate records
//!
//! Upstream text extraction and resume structuring are external services;
//! this manager consumes their output, a structured JSON record, and caches
//! parsed records per path.

use crate::error::{Result, ScorerError};
use crate::input::record::CandidateRecord;
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, CandidateRecord>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn load_record(&mut self, path: &Path) -> Result<CandidateRecord> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached record for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ScorerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        info!("Loading candidate record: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let record: CandidateRecord = serde_json::from_str(&content)?;

        if self.enable_cache {
            self.cache.insert(path_str, record.clone());
        }

        Ok(record)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_and_cache_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("candidate.json");
        fs::write(
            &path,
            r#"{"skills": {"required": ["python"], "additional": [], "certifications": []}}"#,
        )
        .unwrap();

        let mut manager = InputManager::new();
        let record = manager.load_record(&path).unwrap();
        assert_eq!(record.skills.required, vec!["python"]);
        assert_eq!(manager.cache_size(), 1);

        let again = manager.load_record(&path).unwrap();
        assert_eq!(again.skills.required, vec!["python"]);
        assert_eq!(manager.cache_size(), 1);
    }

    #[test]
    fn test_nonexistent_file_is_an_error() {
        let mut manager = InputManager::new();
        assert!(manager.load_record(Path::new("no/such/file.json")).is_err());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let mut manager = InputManager::new();
        assert!(manager.load_record(&path).is_err());
    }
}
