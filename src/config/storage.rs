//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where candidate records and dialogue sessions live
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: StorageBackend,

    /// JSON file holding saved candidate records
    #[serde(default = "default_records_path")]
    pub records_path: PathBuf,

    /// Directory of per-session YAML files
    #[serde(default = "default_sessions_dir")]
    pub sessions_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File {
            if self.records_path.as_os_str().is_empty() {
                return Err(ValidationError::EmptyPath("records_path"));
            }
            if self.sessions_dir.as_os_str().is_empty() {
                return Err(ValidationError::EmptyPath("sessions_dir"));
            }
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            records_path: default_records_path(),
            sessions_dir: default_sessions_dir(),
        }
    }
}

fn default_records_path() -> PathBuf {
    PathBuf::from("data/candidates.json")
}

fn default_sessions_dir() -> PathBuf {
    PathBuf::from("data/sessions")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::File);
        assert_eq!(config.records_path, PathBuf::from("data/candidates.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_rejected_for_file_backend() {
        let config = StorageConfig {
            records_path: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::EmptyPath("records_path"))
        );
    }

    #[test]
    fn test_memory_backend_ignores_paths() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            records_path: PathBuf::new(),
            sessions_dir: PathBuf::new(),
        };
        assert!(config.validate().is_ok());
    }
}
