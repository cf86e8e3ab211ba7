//! Runtime configuration shared by every command

use crate::persistence::JsonFileStore;
use crate::round::{ParticipantId, RoundEngine};
use crate::wordlists::WordCatalog;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Engine type every command runs against
pub type FileEngine = RoundEngine<JsonFileStore, StdRng>;

/// Where state lives and who may reset it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON snapshot of day, secret and word list
    pub state_file: PathBuf,
    /// One word per line; created with the built-in list if missing
    pub word_list: PathBuf,
    /// Fixed seed for word selection, random if absent
    pub seed: Option<u64>,
    /// Participants allowed to reset the round
    pub admins: Vec<ParticipantId>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from("gameState.json"),
            word_list: PathBuf::from("wordList.txt"),
            seed: None,
            admins: vec![ParticipantId::from("admin")],
        }
    }
}

impl Config {
    #[must_use]
    pub fn is_admin(&self, participant: &ParticipantId) -> bool {
        self.admins.contains(participant)
    }

    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Load the catalog and restore (or start) the round from the state file
    #[must_use]
    pub fn open_engine(&self) -> FileEngine {
        let catalog = WordCatalog::load_or_seed(&self.word_list);
        RoundEngine::start(JsonFileStore::new(&self.state_file), catalog, self.rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_admin_is_admin() {
        let config = Config::default();
        assert!(config.is_admin(&ParticipantId::from("admin")));
        assert!(!config.is_admin(&ParticipantId::from("amy")));
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let config = Config {
            seed: Some(5),
            ..Config::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn open_engine_creates_files() {
        let dir = std::env::temp_dir().join(format!("daily_wordle_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config = Config {
            state_file: dir.join("state.json"),
            word_list: dir.join("words.txt"),
            seed: Some(1),
            ..Config::default()
        };

        let engine = config.open_engine();

        assert_eq!(engine.current_day(), 1);
        assert!(config.state_file.exists());
        assert!(config.word_list.exists());

        // Reopening restores the same round
        let secret = engine.current_secret_for_debug();
        drop(engine);
        let reopened = config.open_engine();
        assert_eq!(reopened.current_secret_for_debug(), secret);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
