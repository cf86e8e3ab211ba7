//! Round state: the day, its secret, and every participant's attempts

use crate::core::{MAX_GUESSES, Verdict, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Opaque identity of a participant (a chat user id, a name, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    guess: Word,
    verdict: Verdict,
}

impl Attempt {
    /// Score `guess` against `secret`
    #[must_use]
    pub fn scored(guess: Word, secret: &Word) -> Self {
        let verdict = Verdict::score(&guess, secret);
        Self { guess, verdict }
    }

    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        self.verdict
    }
}

/// A participant's attempts during the current round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantProgress {
    attempts: Vec<Attempt>,
    guess_count: usize,
    completed: bool,
}

impl ParticipantProgress {
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }

    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    /// True when the most recent guess was the secret
    #[must_use]
    pub fn solved(&self, secret: &Word) -> bool {
        self.last_attempt().is_some_and(|a| a.guess() == secret)
    }

    /// Append a scored attempt and update completion
    ///
    /// Returns whether the attempt won. Callers must have checked that the
    /// participant is neither completed nor out of guesses.
    pub(crate) fn record(&mut self, attempt: Attempt, secret: &Word) -> bool {
        debug_assert!(!self.completed && self.guess_count < MAX_GUESSES);

        self.guess_count += 1;
        let won = attempt.guess() == secret;
        self.attempts.push(attempt);
        self.completed = won || self.guess_count == MAX_GUESSES;
        won
    }

    #[cfg(test)]
    pub(crate) fn reopen(&mut self) {
        self.completed = false;
    }
}

/// The single mutable record of the active round
///
/// Participants are kept in the order they first showed up.
#[derive(Debug, Clone)]
pub struct RoundState {
    day: u32,
    secret: Word,
    participants: Vec<(ParticipantId, ParticipantProgress)>,
    index: FxHashMap<ParticipantId, usize>,
}

impl RoundState {
    /// A fresh round with no participants
    #[must_use]
    pub fn new(day: u32, secret: Word) -> Self {
        Self {
            day: day.max(1),
            secret,
            participants: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn progress(&self, participant: &ParticipantId) -> Option<&ParticipantProgress> {
        self.index
            .get(participant)
            .map(|&slot| &self.participants[slot].1)
    }

    /// Progress for `participant`, created empty on first sight
    pub(crate) fn progress_mut(&mut self, participant: &ParticipantId) -> &mut ParticipantProgress {
        let slot = match self.index.get(participant) {
            Some(&slot) => slot,
            None => {
                let slot = self.participants.len();
                self.participants
                    .push((participant.clone(), ParticipantProgress::default()));
                self.index.insert(participant.clone(), slot);
                slot
            }
        };
        &mut self.participants[slot].1
    }

    /// Participants in first-seen order
    pub fn participants(&self) -> impl Iterator<Item = (&ParticipantId, &ParticipantProgress)> {
        self.participants.iter().map(|(id, progress)| (id, progress))
    }

    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Close this round and open the next one with `secret`
    pub(crate) fn begin_next_day(&mut self, secret: Word) {
        self.participants.clear();
        self.index.clear();
        self.day = self.day.saturating_add(1);
        self.secret = secret;
    }
}
