//! Daily Wordle
//!
//! A shared daily Wordle round: one secret word per day for every
//! participant, six scored guesses each, and a results report when the day
//! closes.
//!
//! # Quick Start
//!
//! ```rust
//! use daily_wordle::persistence::MemoryStore;
//! use daily_wordle::round::{ParticipantId, RoundEngine, SubmissionOutcome};
//! use daily_wordle::wordlists::WordCatalog;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let engine = RoundEngine::start(
//!     MemoryStore::new(),
//!     WordCatalog::fallback(),
//!     StdRng::seed_from_u64(7),
//! );
//!
//! let amy = ParticipantId::from("amy");
//! let outcome = engine.submit_guess(&amy, "plant").value;
//! assert!(matches!(outcome, SubmissionOutcome::Scored { attempt_number: 1, .. }));
//!
//! let report = engine.advance_day().value;
//! assert_eq!(report.day, 1);
//! assert_eq!(engine.current_day(), 2);
//! ```

// Core domain types
pub mod core;

// Word catalog
pub mod wordlists;

// Round state and engine
pub mod round;

// Snapshot storage
pub mod persistence;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
