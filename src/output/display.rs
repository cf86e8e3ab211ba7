//! Coloured terminal printing of round messages

use super::formatters::{
    format_new_day, format_outcome, format_progress, format_report, format_reset_ack, mention,
};
use crate::core::{Verdict, Word};
use crate::round::{DayReport, Durability, ParticipantId, ProgressSummary, SubmissionOutcome};
use colored::Colorize;

/// Print the reply to a submitted guess
pub fn print_outcome(participant: &ParticipantId, outcome: &SubmissionOutcome) {
    let message = format_outcome(participant, outcome);
    match outcome {
        SubmissionOutcome::Scored { won: true, .. } => println!("{}", message.green().bold()),
        SubmissionOutcome::Scored { .. } => println!("{message}"),
        _ => println!("{}", message.yellow()),
    }
}

/// Print the results of a finished day
pub fn print_report(report: &DayReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!("{}", format_report(report).bright_white());
    println!("{}", "═".repeat(60).cyan());
}

pub fn print_new_day(day: u32) {
    println!("\n{}\n", format_new_day(day).bright_cyan().bold());
}

pub fn print_reset_ack(day: u32) {
    println!("{}", format_reset_ack(day).bright_black());
}

pub fn print_progress(participant: &ParticipantId, summary: &ProgressSummary) {
    println!("{}", mention(participant).bold());
    println!("{}", format_progress(summary));
}

/// Warn the operator that a change was not saved
pub fn print_durability(durability: &Durability) {
    if let Durability::Failed(e) = durability {
        eprintln!(
            "{} {}",
            "⚠ state not saved:".red().bold(),
            e.to_string().red()
        );
    }
}

/// Print a single scored guess, for the `score` subcommand
pub fn print_verdict(guess: &Word, secret: &Word, verdict: &Verdict) {
    println!(
        "{} vs {}: {}",
        guess.text().to_uppercase().bright_white().bold(),
        secret.text().to_uppercase().bright_yellow().bold(),
        verdict
    );
}
