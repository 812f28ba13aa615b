//! JSON file Record Store adapter
//!
//! Keeps every saved candidate in a single JSON array. Appends rewrite the
//! whole file through a temporary file and a rename.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::ports::{RecordStore, RecordStoreError, StoredCandidate};

/// Append-only candidate storage backed by one JSON file
pub struct JsonFileRecordStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonFileRecordStore {
    /// Open the store, creating the file as `[]` (and its parent
    /// directories) if it does not exist yet
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, RecordStoreError> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        };
        store.ensure_file().await?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_file(&self) -> Result<(), RecordStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                RecordStoreError::Io(format!("Failed to create directory: {}", e))
            })?;
        }
        if !fs::try_exists(&self.path).await.unwrap_or(false) {
            self.write_entries(&[]).await?;
        }
        Ok(())
    }

    async fn read_entries(&self) -> Result<Vec<StoredCandidate>, RecordStoreError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| RecordStoreError::Io(format!("Failed to read records: {}", e)))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|e| RecordStoreError::Corrupt(e.to_string()))
    }

    async fn write_entries(&self, entries: &[StoredCandidate]) -> Result<(), RecordStoreError> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| RecordStoreError::Serialization(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json).await.map_err(|e| {
            RecordStoreError::Io(format!("Failed to write temporary file: {}", e))
        })?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| RecordStoreError::Io(format!("Failed to rename file: {}", e)))?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileRecordStore {
    async fn append(&self, entry: StoredCandidate) -> Result<(), RecordStoreError> {
        let _guard = self.write_lock.lock().await;

        self.ensure_file().await?;
        let mut entries = self.read_entries().await?;
        entries.push(entry);
        self.write_entries(&entries).await
    }

    async fn load_all(&self) -> Result<Vec<StoredCandidate>, RecordStoreError> {
        let _guard = self.write_lock.lock().await;

        if !fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(Vec::new());
        }
        self.read_entries().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::candidate::{CandidateField, CandidateRecord};
    use crate::domain::foundation::SessionId;
    use crate::ports::SaveReason;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn entry(name: &str, reason: SaveReason) -> StoredCandidate {
        let record = CandidateRecord::new()
            .with_field(CandidateField::FullName, name)
            .unwrap();
        StoredCandidate::new(SessionId::new(), record, reason)
    }

    #[tokio::test]
    async fn open_creates_empty_array_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("candidates.json");

        let store = JsonFileRecordStore::open(&path).await.unwrap();

        let content = fs::read_to_string(store.path()).await.unwrap();
        assert_eq!(content.trim(), "[]");
    }

    #[tokio::test]
    async fn open_keeps_existing_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("candidates.json");

        let store = JsonFileRecordStore::open(&path).await.unwrap();
        store.append(entry("Ada Lovelace", SaveReason::Exited)).await.unwrap();
        drop(store);

        let reopened = JsonFileRecordStore::open(&path).await.unwrap();
        assert_eq!(reopened.load_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn appends_are_kept_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileRecordStore::open(temp_dir.path().join("c.json"))
            .await
            .unwrap();

        store.append(entry("First One", SaveReason::Completed)).await.unwrap();
        store.append(entry("Second One", SaveReason::Exited)).await.unwrap();

        let all = store.load_all().await.unwrap();
        let names: Vec<_> = all.iter().map(|e| e.record.full_name().unwrap()).collect();
        assert_eq!(names, vec!["First One", "Second One"]);
        assert_eq!(all[1].reason, SaveReason::Exited);
    }

    #[tokio::test]
    async fn entries_are_stored_flat() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileRecordStore::open(temp_dir.path().join("c.json"))
            .await
            .unwrap();
        store.append(entry("Grace Hopper", SaveReason::Exited)).await.unwrap();

        let content = fs::read_to_string(store.path()).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json[0]["full_name"], "Grace Hopper");
        assert_eq!(json[0]["reason"], "exited");
        assert!(json[0]["saved_at"].is_string());
    }

    #[tokio::test]
    async fn concurrent_appends_are_not_lost() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(
            JsonFileRecordStore::open(temp_dir.path().join("c.json"))
                .await
                .unwrap(),
        );

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.append(entry("Same Name", SaveReason::Completed)).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.load_all().await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("c.json");
        fs::write(&path, "{not json").await.unwrap();

        let store = JsonFileRecordStore::open(&path).await.unwrap();
        let result = store.load_all().await;
        assert!(matches!(result, Err(RecordStoreError::Corrupt(_))));
    }
}
