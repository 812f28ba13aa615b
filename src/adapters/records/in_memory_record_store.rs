//! In-Memory Record Store adapter
//!
//! Useful for testing and the `memory` storage backend.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{RecordStore, RecordStoreError, StoredCandidate};

#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    entries: Arc<RwLock<Vec<StoredCandidate>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of appended entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn append(&self, entry: StoredCandidate) -> Result<(), RecordStoreError> {
        self.entries.write().await.push(entry);
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<StoredCandidate>, RecordStoreError> {
        Ok(self.entries.read().await.clone())
    }
}
