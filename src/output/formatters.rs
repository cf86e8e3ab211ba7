//! Message text for the round, in the bot's chat format
//!
//! Everything here is a pure function returning a `String`, so the exact
//! wording can be tested without a terminal.

use crate::core::{MAX_GUESSES, WORD_LENGTH};
use crate::round::{BucketOutcome, DayReport, ParticipantId, ProgressSummary, SubmissionOutcome};

/// Name shown in the header of every day
pub const GAME_TITLE: &str = "Daily Wordle";

const CROWN: &str = "👑";

/// Address a participant in a message
#[must_use]
pub fn mention(participant: &ParticipantId) -> String {
    format!("@{participant}")
}

/// Reply to a submitted guess
#[must_use]
pub fn format_outcome(participant: &ParticipantId, outcome: &SubmissionOutcome) -> String {
    let who = mention(participant);

    match outcome {
        SubmissionOutcome::AlreadyCompleted => {
            format!("{who} You've already finished your Wordle for today!")
        }
        SubmissionOutcome::NoGuessesLeft => {
            format!("{who} You've used all your guesses for today!")
        }
        SubmissionOutcome::InvalidFormat => {
            format!("{who} You must guess a {WORD_LENGTH} letter word.")
        }
        SubmissionOutcome::NotInCatalog => {
            format!("{who} Your guess is not on the word list!")
        }
        SubmissionOutcome::Scored {
            attempt_number,
            verdict,
            just_completed,
            won,
        } => {
            let mut message = format!("{who} - Guess #{attempt_number} - {verdict}");
            if *won {
                message.push_str(&format!("\n{who} guessed the word in {attempt_number}!"));
            } else if *just_completed {
                message.push_str("\nBetter luck tomorrow!");
            }
            message
        }
    }
}

/// Results announcement for a finished day
///
/// # Examples
/// ```
/// use daily_wordle::core::Word;
/// use daily_wordle::output::formatters::format_report;
/// use daily_wordle::round::{BucketOutcome, DayReport, ParticipantId, ResultBucket};
///
/// let report = DayReport {
///     day: 7,
///     secret: Word::new("house").unwrap(),
///     buckets: vec![ResultBucket {
///         outcome: BucketOutcome::Solved(3),
///         participants: vec![ParticipantId::from("amy")],
///         best: true,
///     }],
///     best_score: Some(3),
/// };
///
/// assert_eq!(
///     format_report(&report),
///     "Daily Wordle #7: **house**\n\nTODAY'S RESULTS:\n👑3/6: @amy"
/// );
/// ```
#[must_use]
pub fn format_report(report: &DayReport) -> String {
    let mut message = format!(
        "{GAME_TITLE} #{}: **{}**\n\nTODAY'S RESULTS:",
        report.day, report.secret
    );

    for bucket in &report.buckets {
        let names = bucket
            .participants
            .iter()
            .map(mention)
            .collect::<Vec<_>>()
            .join(", ");
        let crown = if bucket.best { CROWN } else { "" };
        let score = match bucket.outcome {
            BucketOutcome::Solved(count) => count.to_string(),
            BucketOutcome::Failed => "X".to_string(),
        };
        message.push_str(&format!("\n{crown}{score}/{MAX_GUESSES}: {names}"));
    }

    message
}

/// Announcement that a new word is live
#[must_use]
pub fn format_new_day(day: u32) -> String {
    format!(
        "{GAME_TITLE} #{day}\n\nA new {WORD_LENGTH} letter word has been chosen! \
         Use guess <your guess> to make a guess!"
    )
}

/// Acknowledgement sent to the admin who reset the round
#[must_use]
pub fn format_reset_ack(day: u32) -> String {
    format!("Wordle game has been reset. New word chosen for day #{day}.")
}

/// Unused letters and past guesses, hidden behind spoiler bars
#[must_use]
pub fn format_progress(summary: &ProgressSummary) -> String {
    let ProgressSummary::Progress {
        unused_letters,
        attempts,
    } = summary
    else {
        return "You haven't made any guesses yet today!".to_string();
    };

    let unused = unused_letters
        .iter()
        .map(char::to_ascii_uppercase)
        .map(String::from)
        .collect::<Vec<_>>()
        .join(", ");
    let mut message = format!("UNUSED LETTERS: ||{unused}||\n\n");

    for (i, attempt) in attempts.iter().enumerate() {
        message.push_str(&format!(
            "GUESS: {}\n||  {}||\n{}\n\n",
            i + 1,
            spaced_guess(attempt.guess().text()),
            attempt.verdict()
        ));
    }

    message
}

/// Upper-case a guess and space its letters to line up with emoji squares
#[must_use]
pub fn spaced_guess(guess: &str) -> String {
    guess
        .chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join("    ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Verdict, Word};
    use crate::round::{Attempt, ResultBucket};

    fn id(name: &str) -> ParticipantId {
        ParticipantId::from(name)
    }

    #[test]
    fn rejection_messages() {
        let amy = id("amy");
        assert_eq!(
            format_outcome(&amy, &SubmissionOutcome::InvalidFormat),
            "@amy You must guess a 5 letter word."
        );
        assert_eq!(
            format_outcome(&amy, &SubmissionOutcome::NotInCatalog),
            "@amy Your guess is not on the word list!"
        );
        assert_eq!(
            format_outcome(&amy, &SubmissionOutcome::AlreadyCompleted),
            "@amy You've already finished your Wordle for today!"
        );
        assert_eq!(
            format_outcome(&amy, &SubmissionOutcome::NoGuessesLeft),
            "@amy You've used all your guesses for today!"
        );
    }

    #[test]
    fn scored_messages() {
        let amy = id("amy");
        let win = SubmissionOutcome::Scored {
            attempt_number: 3,
            verdict: Verdict::PERFECT,
            just_completed: true,
            won: true,
        };
        assert_eq!(
            format_outcome(&amy, &win),
            "@amy - Guess #3 - 🟩🟩🟩🟩🟩\n@amy guessed the word in 3!"
        );

        let last_miss = SubmissionOutcome::Scored {
            attempt_number: 6,
            verdict: "GG-GG".parse().unwrap(),
            just_completed: true,
            won: false,
        };
        assert_eq!(
            format_outcome(&amy, &last_miss),
            "@amy - Guess #6 - 🟩🟩⬛🟩🟩\nBetter luck tomorrow!"
        );

        let ongoing = SubmissionOutcome::Scored {
            attempt_number: 2,
            verdict: "Y----".parse().unwrap(),
            just_completed: false,
            won: false,
        };
        assert_eq!(format_outcome(&amy, &ongoing), "@amy - Guess #2 - 🟨⬛⬛⬛⬛");
    }

    #[test]
    fn report_lists_crown_and_failed_last() {
        let report = DayReport {
            day: 12,
            secret: Word::new("river").unwrap(),
            buckets: vec![
                ResultBucket {
                    outcome: BucketOutcome::Solved(2),
                    participants: vec![id("bob"), id("cat")],
                    best: true,
                },
                ResultBucket {
                    outcome: BucketOutcome::Solved(5),
                    participants: vec![id("dan")],
                    best: false,
                },
                ResultBucket {
                    outcome: BucketOutcome::Failed,
                    participants: vec![id("eve")],
                    best: false,
                },
            ],
            best_score: Some(2),
        };

        assert_eq!(
            format_report(&report),
            "Daily Wordle #12: **river**\n\nTODAY'S RESULTS:\n👑2/6: @bob, @cat\n5/6: @dan\nX/6: @eve"
        );
    }

    #[test]
    fn report_without_players_is_header_only() {
        let report = DayReport {
            day: 1,
            secret: Word::new("house").unwrap(),
            buckets: Vec::new(),
            best_score: None,
        };
        assert_eq!(format_report(&report), "Daily Wordle #1: **house**\n\nTODAY'S RESULTS:");
    }

    #[test]
    fn progress_without_attempts() {
        assert_eq!(
            format_progress(&ProgressSummary::NoAttempts),
            "You haven't made any guesses yet today!"
        );
    }

    #[test]
    fn progress_with_attempts() {
        let secret = Word::new("house").unwrap();
        let summary = ProgressSummary::Progress {
            unused_letters: vec!['a', 'b'],
            attempts: vec![Attempt::scored(Word::new("horse").unwrap(), &secret)],
        };

        assert_eq!(
            format_progress(&summary),
            "UNUSED LETTERS: ||A, B||\n\nGUESS: 1\n||  H    O    R    S    E||\n🟩🟩⬛🟩🟩\n\n"
        );
    }

    #[test]
    fn new_day_and_reset_text() {
        assert!(format_new_day(4).starts_with("Daily Wordle #4\n\nA new 5 letter word"));
        assert_eq!(
            format_reset_ack(9),
            "Wordle game has been reset. New word chosen for day #9."
        );
    }
}
