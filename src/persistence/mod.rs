//! Durable storage for the round
//!
//! Only the day counter, the secret and the catalog survive a restart.
//! Participant progress is not stored, so a restart wipes it.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Serialized form of the round, `{ currentWord, currentDay, wordList }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub current_word: String,
    pub current_day: u32,
    pub word_list: Vec<String>,
}

/// Failure to read or write a snapshot
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("state store I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("state could not be encoded or decoded: {0}")]
    Format(#[from] serde_json::Error),
    #[error("state store unavailable: {0}")]
    Unavailable(String),
}

/// Where snapshots live between process runs
///
/// Calls are synchronous and made while the engine holds its write lock.
pub trait SnapshotStore {
    /// Load the last saved snapshot, or `None` if nothing was ever saved
    ///
    /// # Errors
    /// Returns an error if the store exists but cannot be read or decoded.
    fn load(&self) -> Result<Option<Snapshot>, PersistenceError>;

    /// Replace the stored snapshot
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be written.
    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_uses_camel_case_keys() {
        let snapshot = Snapshot {
            current_word: "house".to_string(),
            current_day: 3,
            word_list: vec!["house".to_string(), "plant".to_string()],
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["currentWord"], "house");
        assert_eq!(json["currentDay"], 3);
        assert_eq!(json["wordList"][1], "plant");
    }

    #[test]
    fn snapshot_missing_fields_default() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"currentWord":"river"}"#).unwrap();
        assert_eq!(snapshot.current_word, "river");
        assert_eq!(snapshot.current_day, 0);
        assert!(snapshot.word_list.is_empty());
    }
}
