//! Command implementations

pub mod admin;
pub mod session;

pub use admin::{run_reset, run_score, run_status, score_words};
pub use session::{Session, SessionCommand, SessionReply, run_session};
