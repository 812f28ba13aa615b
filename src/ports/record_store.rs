//! Record Store Port - Append-only storage of candidate records.
//!
//! A session may append more than once (on completion and again on exit);
//! each append is an independent entry, never an upsert.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::candidate::CandidateRecord;
use crate::domain::foundation::{SessionId, Timestamp};

/// Why a record was saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveReason {
    /// Tech stack accepted and questions issued.
    Completed,
    /// Candidate left with an exit keyword.
    Exited,
}

/// One stored entry: the flat record plus bookkeeping fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCandidate {
    pub session_id: SessionId,
    pub saved_at: Timestamp,
    pub reason: SaveReason,
    #[serde(flatten)]
    pub record: CandidateRecord,
}

impl StoredCandidate {
    pub fn new(session_id: SessionId, record: CandidateRecord, reason: SaveReason) -> Self {
        Self {
            session_id,
            saved_at: Timestamp::now(),
            reason,
            record,
        }
    }
}

/// Errors that can occur while appending or reading records
#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize records: {0}")]
    Serialization(String),

    #[error("Record file is corrupt: {0}")]
    Corrupt(String),
}

/// Port for durable, append-only candidate storage
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Append an entry. The backing store is created on first use.
    async fn append(&self, entry: StoredCandidate) -> Result<(), RecordStoreError>;

    /// Every stored entry, in append order.
    async fn load_all(&self) -> Result<Vec<StoredCandidate>, RecordStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::candidate::CandidateField;

    #[test]
    fn stored_candidate_serializes_flat() {
        let record = CandidateRecord::new()
            .with_field(CandidateField::FullName, "Jane Roe")
            .unwrap();
        let entry = StoredCandidate::new(SessionId::new(), record, SaveReason::Exited);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["full_name"], "Jane Roe");
        assert_eq!(json["reason"], "exited");
        assert!(json.get("record").is_none());
        assert!(json.get("email").is_none());
    }

    #[test]
    fn stored_candidate_round_trips() {
        let entry = StoredCandidate::new(SessionId::new(), CandidateRecord::new(), SaveReason::Completed);
        let json = serde_json::to_string(&entry).unwrap();
        let restored: StoredCandidate = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, entry);
    }
}
