//! Per-letter scoring of a guess against the secret word
//!
//! A verdict holds one [`LetterState`] per position:
//! - `Hit` = right letter, right position
//! - `Present` = letter appears elsewhere among the secret's unmatched letters
//! - `Miss` = letter not available in the secret

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    Hit,
    Present,
    Miss,
}

impl LetterState {
    /// Emoji square used in chat messages
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬛',
        }
    }
}

/// Scored feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict([LetterState; WORD_LENGTH]);

impl Verdict {
    /// All hits (the guess was the secret)
    pub const PERFECT: Self = Self([LetterState::Hit; WORD_LENGTH]);

    #[must_use]
    pub const fn new(states: [LetterState; WORD_LENGTH]) -> Self {
        Self(states)
    }

    /// Score `guess` against `secret`
    ///
    /// Duplicate letters are handled the way Wordle does it: a repeated
    /// letter in the guess earns `Present` at most as many times as it has
    /// occurrences in the secret left over after exact matches.
    ///
    /// # Algorithm
    /// 1. Count the letters of the secret
    /// 2. First pass: mark exact matches and remove them from the pool
    /// 3. Second pass: mark remaining letters `Present` while the pool lasts
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::{LetterState::*, Verdict, Word};
    ///
    /// let guess = Word::new("plant").unwrap();
    /// let secret = Word::new("train").unwrap();
    ///
    /// assert_eq!(
    ///     Verdict::score(&guess, &secret).states(),
    ///     &[Miss, Miss, Hit, Present, Present]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterState::Miss; WORD_LENGTH];
        let mut remaining = secret.char_counts();
        let guess = guess.chars();
        let secret = secret.chars();

        // First pass: exact positions
        // Allow: index needed to compare guess[i], secret[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                result[i] = LetterState::Hit;
                if let Some(count) = remaining.get_mut(&guess[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, only while unmatched copies remain
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterState::Hit {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess[i])
                && *count > 0
            {
                result[i] = LetterState::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count_hits(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterState::Hit).count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterState::Present).count()
    }

    /// Render as a row of emoji squares, e.g. "🟩🟨⬛🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Parse a verdict from a string like "GY-GG" or "🟩🟨⬛🟩🟩"
///
/// Accepts 'G'/'g'/🟩 for hits, 'Y'/'y'/🟨 for present letters and
/// '-'/'_'/⬛/⬜ for misses.
impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid verdict string: {s}"));
        }

        let mut states = [LetterState::Miss; WORD_LENGTH];
        for (state, ch) in states.iter_mut().zip(chars) {
            *state = match ch {
                'G' | 'g' | '🟩' => LetterState::Hit,
                'Y' | 'y' | '🟨' => LetterState::Present,
                '-' | '_' | '⬛' | '⬜' => LetterState::Miss,
                _ => return Err(format!("Invalid verdict string: {s}")),
            };
        }

        Ok(Self(states))
    }
}
