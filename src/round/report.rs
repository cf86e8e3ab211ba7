//! End-of-day results

use super::state::{ParticipantId, RoundState};
use crate::core::{MAX_GUESSES, Word};

/// Which row of the results a bucket is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketOutcome {
    /// Solved in this many guesses
    Solved(usize),
    /// Played but did not solve
    Failed,
}

/// Participants sharing one outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBucket {
    pub outcome: BucketOutcome,
    pub participants: Vec<ParticipantId>,
    /// Set on the bucket holding the day's best score
    pub best: bool,
}

/// Results for a finished day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayReport {
    /// The day that just ended
    pub day: u32,
    pub secret: Word,
    /// Solved buckets by ascending guess count, then the failed bucket
    pub buckets: Vec<ResultBucket>,
    /// Fewest guesses any winner needed, if anyone won
    pub best_score: Option<usize>,
}

impl DayReport {
    /// Tally the round's participants into ordered buckets
    ///
    /// Participants whose last guess was the secret are grouped by guess
    /// count. Anyone else who guessed at least once lands in the failed
    /// bucket, whether they ran out of guesses or simply stopped playing.
    /// Participants without a single scored guess are left out.
    #[must_use]
    pub fn tally(state: &RoundState) -> Self {
        let mut solved: Vec<Vec<ParticipantId>> = vec![Vec::new(); MAX_GUESSES + 1];
        let mut failed = Vec::new();

        for (id, progress) in state.participants() {
            if progress.guess_count() == 0 {
                continue;
            }

            if progress.completed() && progress.solved(state.secret()) {
                solved[progress.guess_count()].push(id.clone());
            } else {
                failed.push(id.clone());
            }
        }

        let best_score = (1..=MAX_GUESSES).find(|&count| !solved[count].is_empty());

        let mut buckets: Vec<ResultBucket> = solved
            .into_iter()
            .enumerate()
            .filter(|(_, participants)| !participants.is_empty())
            .map(|(count, participants)| ResultBucket {
                outcome: BucketOutcome::Solved(count),
                participants,
                best: Some(count) == best_score,
            })
            .collect();

        if !failed.is_empty() {
            buckets.push(ResultBucket {
                outcome: BucketOutcome::Failed,
                participants: failed,
                best: false,
            });
        }

        Self {
            day: state.day(),
            secret: state.secret().clone(),
            buckets,
            best_score,
        }
    }

    /// Total number of participants listed
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.buckets.iter().map(|b| b.participants.len()).sum()
    }

    /// Bucket for an outcome, if anyone landed in it
    #[must_use]
    pub fn bucket(&self, outcome: BucketOutcome) -> Option<&ResultBucket> {
        self.buckets.iter().find(|b| b.outcome == outcome)
    }
}
