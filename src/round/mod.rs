//! The daily round: state, engine, results and progress views

mod engine;
mod progress;
mod report;
mod state;

pub use engine::{Committed, Durability, RoundEngine, SubmissionOutcome};
pub use progress::ProgressSummary;
pub use report::{BucketOutcome, DayReport, ResultBucket};
pub use state::{Attempt, ParticipantId, ParticipantProgress, RoundState};
