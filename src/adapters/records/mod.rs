//! Record Store Adapters
//!
//! - **JsonFileRecordStore** - One JSON array file, rewritten atomically per append
//! - **InMemoryRecordStore** - Vector in memory (testing/development)

mod in_memory_record_store;
mod json_file_record_store;

pub use in_memory_record_store::InMemoryRecordStore;
pub use json_file_record_store::JsonFileRecordStore;
