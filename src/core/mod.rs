//! Core domain types for the daily round
//!
//! Pure types with no I/O: validated words and the letter-by-letter scorer.

mod verdict;
mod word;

pub use verdict::{LetterState, Verdict};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Attempts each participant gets per round
pub const MAX_GUESSES: usize = 6;

/// Letters a guess may be made of, in display order
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
