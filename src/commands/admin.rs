//! Offline operator commands: score a pair of words, inspect or reset the round

use crate::config::Config;
use crate::core::{Verdict, Word};
use crate::output::{print_durability, print_new_day, print_reset_ack, print_verdict};
use anyhow::{Context, Result};

/// Score `guess` against `secret` without touching any round
///
/// # Errors
///
/// Returns an error if either word is not a valid five-letter word.
pub fn score_words(guess: &str, secret: &str) -> Result<(Word, Word, Verdict)> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let secret = Word::new(secret).with_context(|| format!("invalid secret '{secret}'"))?;
    let verdict = Verdict::score(&guess, &secret);
    Ok((guess, secret, verdict))
}

/// Print the verdict for one guess
///
/// # Errors
///
/// Returns an error if either word is invalid.
pub fn run_score(guess: &str, secret: &str) -> Result<()> {
    let (guess, secret, verdict) = score_words(guess, secret)?;
    print_verdict(&guess, &secret, &verdict);
    Ok(())
}

/// Print the current day, and the secret when `reveal` is set
pub fn run_status(config: &Config, reveal: bool) {
    let engine = config.open_engine();
    println!("Day #{}", engine.current_day());
    println!("Word list: {} words", engine.catalog_len());
    if reveal {
        println!("Secret: {}", engine.current_secret_for_debug());
    }
}

/// Discard the persisted round and start the next day without results
pub fn run_reset(config: &Config) {
    let engine = config.open_engine();
    let committed = engine.reset_without_report();
    print_new_day(committed.value);
    print_reset_ack(committed.value);
    print_durability(&committed.durability);
}
