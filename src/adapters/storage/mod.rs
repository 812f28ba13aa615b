//! Session Storage Adapters
//!
//! Implementations of the SessionStore port for persisting dialogue sessions.
//!
//! ## Available Adapters
//!
//! - **FileSessionStore** - Stores each session as a YAML file on disk
//! - **InMemorySessionStore** - Stores sessions in memory (testing/development)

mod file_session_store;
mod in_memory_session_store;

pub use file_session_store::FileSessionStore;
pub use in_memory_session_store::InMemorySessionStore;
