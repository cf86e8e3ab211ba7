//! Terminal output formatting
//!
//! Message text for the round and coloured printing of it.

pub mod display;
pub mod formatters;

pub use display::{
    print_durability, print_new_day, print_outcome, print_progress, print_report,
    print_reset_ack, print_verdict,
};
