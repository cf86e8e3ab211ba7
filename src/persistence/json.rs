//! Snapshot store backed by a pretty-printed JSON file

use super::{PersistenceError, Snapshot, SnapshotStore};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores the snapshot as JSON at a fixed path
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write never leaves a truncated state file behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let snapshot = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), "loaded state");
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(snapshot)?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;
        debug!(path = %self.path.display(), day = snapshot.current_day, "saved state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> JsonFileStore {
        let path = std::env::temp_dir().join(format!(
            "daily_wordle_{tag}_{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        JsonFileStore::new(path)
    }

    #[test]
    fn missing_file_loads_as_none() {
        let store = temp_store("missing");
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load() {
        let store = temp_store("save_load");
        let snapshot = Snapshot {
            current_word: "cloud".to_string(),
            current_day: 12,
            word_list: vec!["cloud".to_string(), "brain".to_string()],
        };

        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), Some(snapshot));
        assert!(!store.temp_path().exists());

        fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn saved_file_is_readable_json() {
        let store = temp_store("readable");
        store
            .save(&Snapshot {
                current_word: "beach".to_string(),
                current_day: 1,
                word_list: vec!["beach".to_string()],
            })
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\"currentWord\": \"beach\""));
        assert!(content.contains("\"currentDay\": 1"));

        fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(store.load(), Err(PersistenceError::Format(_))));

        fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let store = JsonFileStore::new(
            std::env::temp_dir()
                .join("daily_wordle_no_such_dir")
                .join("state.json"),
        );
        let result = store.save(&Snapshot::default());
        assert!(matches!(result, Err(PersistenceError::Io(_))));
    }
}
