//! The round engine
//!
//! Owns the round state and serializes every mutation behind one lock:
//! guess submission, the scheduled day boundary and the manual reset.

use super::progress::ProgressSummary;
use super::report::DayReport;
use super::state::{Attempt, ParticipantId, RoundState};
use crate::core::{MAX_GUESSES, Verdict, Word};
use crate::persistence::{PersistenceError, Snapshot, SnapshotStore};
use crate::wordlists::WordCatalog;
use rand::Rng;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, error, info, warn};

/// Result of submitting one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The participant already won or used every guess today
    AlreadyCompleted,
    /// Every guess has been used
    NoGuessesLeft,
    /// Not a five-letter ASCII word
    InvalidFormat,
    /// Well-formed but not in the catalog
    NotInCatalog,
    Scored {
        /// 1-based number of this attempt
        attempt_number: usize,
        verdict: Verdict,
        /// This attempt finished the participant's round
        just_completed: bool,
        won: bool,
    },
}

/// Whether a mutation reached the snapshot store
#[derive(Debug)]
pub enum Durability {
    /// Nothing changed, nothing to save
    NotRequired,
    Saved,
    /// The in-memory state changed but the save failed
    Failed(PersistenceError),
}

impl Durability {
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// An engine result together with the outcome of persisting it
#[derive(Debug)]
pub struct Committed<T> {
    pub value: T,
    pub durability: Durability,
}

impl<T> Committed<T> {
    const fn unchanged(value: T) -> Self {
        Self {
            value,
            durability: Durability::NotRequired,
        }
    }
}

struct Round<R> {
    state: RoundState,
    catalog: WordCatalog,
    rng: R,
}

fn choose_secret<R: Rng>(catalog: &WordCatalog, rng: &mut R) -> Word {
    let secret = catalog.pick_random(rng).clone();
    debug!(secret = %secret, "new word chosen");
    secret
}

impl<R: Rng> Round<R> {
    fn pick_secret(&mut self) -> Word {
        choose_secret(&self.catalog, &mut self.rng)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_word: self.state.secret().text().to_string(),
            current_day: self.state.day(),
            word_list: self
                .catalog
                .words()
                .iter()
                .map(|w| w.text().to_string())
                .collect(),
        }
    }
}

/// Runs the daily round
///
/// `S` is where the round is persisted, `R` the source of randomness used
/// to pick each day's secret.
pub struct RoundEngine<S, R> {
    round: RwLock<Round<R>>,
    store: S,
}

impl<S: SnapshotStore, R: Rng> RoundEngine<S, R> {
    /// Restore the round from `store`, or start day 1 if there is nothing to restore
    ///
    /// A stored word list takes precedence over `catalog`; `catalog` is used
    /// when the store is empty, unreadable or holds no usable words. A stored
    /// secret that is not a word of the catalog in use is replaced.
    /// Participant progress never survives a restart.
    pub fn start(store: S, catalog: WordCatalog, mut rng: R) -> Self {
        let restored = match store.load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!(error = %e, "could not load saved state, starting fresh");
                None
            }
        };

        let mut needs_save = restored.is_none();
        let (day, stored_secret, catalog) = match restored {
            Some(snapshot) => {
                let catalog = match WordCatalog::from_words(&snapshot.word_list) {
                    Ok(saved) => saved,
                    Err(_) => {
                        warn!("saved word list is empty, using configured catalog");
                        needs_save = true;
                        catalog
                    }
                };
                let secret = Word::new(&snapshot.current_word)
                    .ok()
                    .filter(|w| catalog.contains(w.text()));
                (snapshot.current_day.max(1), secret, catalog)
            }
            None => (1, None, catalog),
        };

        let secret = if let Some(secret) = stored_secret {
            secret
        } else {
            needs_save = true;
            choose_secret(&catalog, &mut rng)
        };

        let round = Round {
            state: RoundState::new(day, secret),
            catalog,
            rng,
        };

        info!(day, words = round.catalog.len(), "round started");

        let engine = Self {
            round: RwLock::new(round),
            store,
        };

        if needs_save {
            let round = engine.read();
            engine.persist(&round);
        }

        engine
    }

    /// Submit a guess for `participant`
    ///
    /// Checks run in a fixed order and each rejection returns before any
    /// attempt is recorded; only a `Scored` outcome is persisted.
    pub fn submit_guess(
        &self,
        participant: &ParticipantId,
        raw_guess: &str,
    ) -> Committed<SubmissionOutcome> {
        let mut round = self.write();
        let Round { state, catalog, .. } = &mut *round;
        let secret = state.secret().clone();
        let progress = state.progress_mut(participant);

        if progress.completed() {
            return Committed::unchanged(SubmissionOutcome::AlreadyCompleted);
        }

        // Implied by `completed`, checked on its own in case the two drift
        if progress.guess_count() >= MAX_GUESSES {
            return Committed::unchanged(SubmissionOutcome::NoGuessesLeft);
        }

        let Ok(guess) = Word::new(raw_guess) else {
            return Committed::unchanged(SubmissionOutcome::InvalidFormat);
        };

        if !catalog.contains(guess.text()) {
            return Committed::unchanged(SubmissionOutcome::NotInCatalog);
        }

        let attempt = Attempt::scored(guess, &secret);
        let verdict = attempt.verdict();
        let won = progress.record(attempt, &secret);
        let outcome = SubmissionOutcome::Scored {
            attempt_number: progress.guess_count(),
            verdict,
            just_completed: progress.completed(),
            won,
        };

        debug!(participant = %participant, ?outcome, "guess scored");

        let durability = self.persist(&round);
        Committed {
            value: outcome,
            durability,
        }
    }

    /// Close the day: tally results, then open the next day with a new secret
    pub fn advance_day(&self) -> Committed<DayReport> {
        let mut round = self.write();
        let report = DayReport::tally(&round.state);
        Self::open_next_day(&mut round);

        info!(
            ended = report.day,
            players = report.participant_count(),
            best = ?report.best_score,
            "day closed"
        );

        let durability = self.persist(&round);
        Committed {
            value: report,
            durability,
        }
    }

    /// Discard the current day without results and open the next one
    ///
    /// Returns the new day number.
    pub fn reset_without_report(&self) -> Committed<u32> {
        let mut round = self.write();
        Self::open_next_day(&mut round);
        let day = round.state.day();

        info!(day, "round reset without results");

        let durability = self.persist(&round);
        Committed {
            value: day,
            durability,
        }
    }

    /// Unused letters and past attempts for `participant`
    pub fn describe_progress(&self, participant: &ParticipantId) -> ProgressSummary {
        ProgressSummary::of(self.read().state.progress(participant))
    }

    pub fn current_day(&self) -> u32 {
        self.read().state.day()
    }

    /// The active secret; for operators and tests, never for players
    pub fn current_secret_for_debug(&self) -> Word {
        self.read().state.secret().clone()
    }

    pub fn catalog_len(&self) -> usize {
        self.read().catalog.len()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn open_next_day(round: &mut Round<R>) {
        let secret = round.pick_secret();
        round.state.begin_next_day(secret);
    }

    fn persist(&self, round: &Round<R>) -> Durability {
        match self.store.save(&round.snapshot()) {
            Ok(()) => Durability::Saved,
            Err(e) => {
                error!(error = %e, day = round.state.day(), "failed to save state");
                Durability::Failed(e)
            }
        }
    }

    // Every mutation finishes updating the state before anything that can
    // panic, so a poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Round<R>> {
        self.round.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Round<R>> {
        self.round.write().unwrap_or_else(PoisonError::into_inner)
    }
}
