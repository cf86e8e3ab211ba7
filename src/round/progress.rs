//! Read-only view of one participant's round, for the letters query

use super::state::{Attempt, ParticipantProgress};
use crate::core::ALPHABET;

/// What a participant has tried so far today
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressSummary {
    NoAttempts,
    Progress {
        /// Alphabet letters absent from every guess, in alphabet order
        unused_letters: Vec<char>,
        attempts: Vec<Attempt>,
    },
}

impl ProgressSummary {
    #[must_use]
    pub fn of(progress: Option<&ParticipantProgress>) -> Self {
        let Some(progress) = progress.filter(|p| !p.attempts().is_empty()) else {
            return Self::NoAttempts;
        };

        let unused_letters = ALPHABET
            .iter()
            .filter(|&&letter| !progress.attempts().iter().any(|a| a.guess().has_letter(letter)))
            .map(|&letter| char::from(letter))
            .collect();

        Self::Progress {
            unused_letters,
            attempts: progress.attempts().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn no_progress_means_no_attempts() {
        assert_eq!(ProgressSummary::of(None), ProgressSummary::NoAttempts);
        assert_eq!(
            ProgressSummary::of(Some(&ParticipantProgress::default())),
            ProgressSummary::NoAttempts
        );
    }

    #[test]
    fn unused_letters_exclude_every_guessed_letter() {
        let secret = Word::new("house").unwrap();
        let mut progress = ParticipantProgress::default();
        progress.record(Attempt::scored(Word::new("plant").unwrap(), &secret), &secret);
        progress.record(Attempt::scored(Word::new("brick").unwrap(), &secret), &secret);

        let ProgressSummary::Progress {
            unused_letters,
            attempts,
        } = ProgressSummary::of(Some(&progress))
        else {
            panic!("expected progress");
        };

        let unused: String = unused_letters.into_iter().collect();
        assert_eq!(unused, "defghjmoqsuvwxyz");
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[1].guess().text(), "brick");
    }
}
