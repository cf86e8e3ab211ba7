//! Validated five-letter words
//!
//! A `Word` is the unit every other component trades in: catalog entries,
//! the daily secret and every scored guess.

use super::WORD_LENGTH;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A lower-case word of exactly [`WORD_LENGTH`] ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {len} letters, got {0}", len = WORD_LENGTH)]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word, trimming surrounding whitespace and lower-casing
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly [`WORD_LENGTH`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::Word;
    ///
    /// let word = Word::new(" HOUSE ").unwrap();
    /// assert_eq!(word.text(), "house");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("h0use").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let text = text.to_ascii_lowercase();
        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter.to_ascii_lowercase())
    }

    /// Count of each letter in the word, used by the scorer for duplicates
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("house").unwrap();
        assert_eq!(word.text(), "house");
        assert_eq!(word.chars(), b"house");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("HOUSE").unwrap().text(), "house");
        assert_eq!(Word::new("HoUsE").unwrap().text(), "house");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        assert_eq!(Word::new("  plant\n").unwrap().text(), "plant");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("hous3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ho se"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("hous!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("hóuse"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("house").unwrap();
        assert!(word.has_letter(b'h'));
        assert!(word.has_letter(b'E'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("sheep").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'h'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b'p'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_display() {
        let word = Word::new("river").unwrap();
        assert_eq!(format!("{word}"), "river");
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        assert_eq!(Word::new("cloud").unwrap(), Word::new("CLOUD").unwrap());
        assert_ne!(Word::new("cloud").unwrap(), Word::new("field").unwrap());
    }
}
