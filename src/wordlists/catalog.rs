//! The catalog of legal words
//!
//! Every guess must be in the catalog, and every day's secret is drawn from it.

use super::FALLBACK;
use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("word list contains no {len}-letter words", len = crate::core::WORD_LENGTH)]
    Empty,
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
}

/// Ordered, non-empty list of candidate words
///
/// Immutable once built; membership checks go through a hash set.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordCatalog {
    /// Build a catalog from any sequence of candidate strings
    ///
    /// Entries that are not valid words are skipped; duplicates are kept once.
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` if no entry is a valid word.
    pub fn from_words<I, S>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for entry in entries {
            if let Ok(word) = Word::new(entry)
                && index.insert(word.text().to_string())
            {
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { words, index })
    }

    /// Parse a catalog from text holding one word per line
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` if no line holds a valid word.
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::wordlists::WordCatalog;
    ///
    /// let catalog = WordCatalog::load("House\n  plant \nno\nrivers\n").unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// assert!(catalog.contains("PLANT"));
    /// ```
    pub fn load(source: &str) -> Result<Self, CatalogError> {
        Self::from_words(source.lines())
    }

    /// Read a catalog from a file holding one word per line
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or
    /// `CatalogError::Empty` if it holds no valid words.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::load(&content)
    }

    /// The built-in word list
    ///
    /// # Panics
    /// Panics only if the embedded list is empty, which `build.rs` rejects.
    #[must_use]
    pub fn fallback() -> Self {
        Self::from_words(FALLBACK).expect("embedded fallback list is non-empty")
    }

    /// Load the catalog at `path`, falling back to the built-in list
    ///
    /// A missing file is created with the built-in list so operators have a
    /// starting point to edit. Unreadable or empty files are logged and
    /// replaced by the built-in list in memory only.
    pub fn load_or_seed<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            let catalog = Self::fallback();
            match fs::write(path, catalog.to_lines()) {
                Ok(()) => info!(path = %path.display(), words = catalog.len(), "seeded word list"),
                Err(e) => warn!(path = %path.display(), error = %e, "could not seed word list"),
            }
            return catalog;
        }

        match Self::load_from_file(path) {
            Ok(catalog) => {
                info!(path = %path.display(), words = catalog.len(), "loaded word list");
                catalog
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using built-in word list");
                Self::fallback()
            }
        }
    }

    /// Pick a uniformly random word
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.trim().to_ascii_lowercase())
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words, always at least one
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// One word per line, the on-disk format
    #[must_use]
    pub fn to_lines(&self) -> String {
        self.words
            .iter()
            .map(Word::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn load_trims_lowercases_and_filters() {
        let catalog = WordCatalog::load("HOUSE\n plant\t\n\ncat\nrivers\nsm0ke\ncloud\n").unwrap();
        let texts: Vec<&str> = catalog.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["house", "plant", "cloud"]);
    }

    #[test]
    fn load_skips_duplicates() {
        let catalog = WordCatalog::load("house\nHOUSE\nplant\n").unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn load_empty_source_fails() {
        assert!(matches!(WordCatalog::load(""), Err(CatalogError::Empty)));
        assert!(matches!(
            WordCatalog::load("cat\ndog\nelephant\n"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let catalog = WordCatalog::load("house\nplant\n").unwrap();
        assert!(catalog.contains("house"));
        assert!(catalog.contains("HoUsE"));
        assert!(!catalog.contains("river"));
    }

    #[test]
    fn pick_random_returns_catalog_member() {
        let catalog = WordCatalog::fallback();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let word = catalog.pick_random(&mut rng);
            assert!(catalog.contains(word.text()));
        }
    }

    #[test]
    fn pick_random_covers_the_catalog() {
        let catalog = WordCatalog::load("house\nplant\nriver\n").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = FxHashSet::default();

        for _ in 0..200 {
            seen.insert(catalog.pick_random(&mut rng).text().to_string());
        }

        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn fallback_matches_embedded_list() {
        let catalog = WordCatalog::fallback();
        assert_eq!(catalog.len(), FALLBACK.len());
        assert!(catalog.contains("house"));
        assert!(catalog.contains("phone"));
    }

    #[test]
    fn load_or_seed_writes_missing_file() {
        let path = std::env::temp_dir().join(format!(
            "daily_wordle_seed_{}_{}.txt",
            std::process::id(),
            line!()
        ));
        let _ = fs::remove_file(&path);

        let catalog = WordCatalog::load_or_seed(&path);
        assert_eq!(catalog.len(), FALLBACK.len());

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(WordCatalog::load(&written).unwrap().len(), FALLBACK.len());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_or_seed_falls_back_on_empty_file() {
        let path = std::env::temp_dir().join(format!(
            "daily_wordle_empty_{}_{}.txt",
            std::process::id(),
            line!()
        ));
        fs::write(&path, "cat\ndog\nentries!\n").unwrap();

        let catalog = WordCatalog::load_or_seed(&path);
        assert_eq!(catalog.len(), FALLBACK.len());

        // The operator's file is left alone
        assert_eq!(fs::read_to_string(&path).unwrap(), "cat\ndog\nentries!\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn to_lines_round_trips_through_load() {
        let catalog = WordCatalog::load("house\nplant\n").unwrap();
        assert_eq!(catalog.to_lines(), "house\nplant");
    }
}
