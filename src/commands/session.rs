//! Console session standing in for the chat channel
//!
//! Each input line is one chat command. `end-day` is the day-boundary
//! trigger; whatever schedules it lives outside this process.

use crate::output::{
    print_durability, print_new_day, print_outcome, print_progress, print_report,
    print_reset_ack,
};
use crate::persistence::SnapshotStore;
use crate::round::{
    Committed, DayReport, ParticipantId, ProgressSummary, RoundEngine, SubmissionOutcome,
};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::info;

/// One line of console input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Guess {
        participant: ParticipantId,
        word: String,
    },
    Letters(ParticipantId),
    EndDay,
    Reset(ParticipantId),
    Status,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Err("Empty command".to_string());
        };
        let args: Vec<&str> = parts.collect();

        match (name.to_lowercase().as_str(), args.as_slice()) {
            ("guess" | "g", [who, word]) => Ok(Self::Guess {
                participant: ParticipantId::from(*who),
                word: (*word).to_string(),
            }),
            ("guess" | "g", _) => Err("Usage: guess <player> <word>".to_string()),
            ("letters" | "l", [who]) => Ok(Self::Letters(ParticipantId::from(*who))),
            ("letters" | "l", _) => Err("Usage: letters <player>".to_string()),
            ("end-day" | "endday", []) => Ok(Self::EndDay),
            ("reset" | "!resetwordle", [who]) => Ok(Self::Reset(ParticipantId::from(*who))),
            ("reset" | "!resetwordle", _) => Err("Usage: reset <admin>".to_string()),
            ("status", []) => Ok(Self::Status),
            ("help" | "?", _) => Ok(Self::Help),
            ("quit" | "q" | "exit", _) => Ok(Self::Quit),
            (other, _) => Err(format!("Unknown command '{other}', type 'help'")),
        }
    }
}

/// What the session did in response to a command
#[derive(Debug)]
pub enum SessionReply {
    Guess {
        participant: ParticipantId,
        committed: Committed<SubmissionOutcome>,
    },
    Letters {
        participant: ParticipantId,
        summary: ProgressSummary,
    },
    DayEnded {
        committed: Committed<DayReport>,
        new_day: u32,
    },
    Reset(Committed<u32>),
    Denied(String),
    Status(u32),
    Help,
    Quit,
}

/// Routes console commands to the engine
pub struct Session<'a, S, R> {
    engine: &'a RoundEngine<S, R>,
    admins: &'a [ParticipantId],
}

impl<'a, S: SnapshotStore, R: Rng> Session<'a, S, R> {
    pub const fn new(engine: &'a RoundEngine<S, R>, admins: &'a [ParticipantId]) -> Self {
        Self { engine, admins }
    }

    pub fn execute(&self, command: SessionCommand) -> SessionReply {
        match command {
            SessionCommand::Guess { participant, word } => {
                let committed = self.engine.submit_guess(&participant, &word);
                SessionReply::Guess {
                    participant,
                    committed,
                }
            }
            SessionCommand::Letters(participant) => {
                let summary = self.engine.describe_progress(&participant);
                SessionReply::Letters {
                    participant,
                    summary,
                }
            }
            SessionCommand::EndDay => {
                let committed = self.engine.advance_day();
                SessionReply::DayEnded {
                    new_day: committed.value.day + 1,
                    committed,
                }
            }
            SessionCommand::Reset(participant) => {
                if !self.admins.contains(&participant) {
                    info!(participant = %participant, "reset refused");
                    return SessionReply::Denied(
                        "You need administrator permissions to use this command.".to_string(),
                    );
                }
                info!(participant = %participant, "reset requested");
                SessionReply::Reset(self.engine.reset_without_report())
            }
            SessionCommand::Status => SessionReply::Status(self.engine.current_day()),
            SessionCommand::Help => SessionReply::Help,
            SessionCommand::Quit => SessionReply::Quit,
        }
    }
}

/// Run the console session until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or flushing output fails.
pub fn run_session<S: SnapshotStore, R: Rng>(
    engine: &RoundEngine<S, R>,
    admins: &[ParticipantId],
) -> Result<()> {
    let session = Session::new(engine, admins);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Daily Wordle Session                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    print_new_day(engine.current_day());
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e.red());
                continue;
            }
        };

        match session.execute(command) {
            SessionReply::Guess {
                participant,
                committed,
            } => {
                print_outcome(&participant, &committed.value);
                print_durability(&committed.durability);
            }
            SessionReply::Letters {
                participant,
                summary,
            } => print_progress(&participant, &summary),
            SessionReply::DayEnded { committed, new_day } => {
                print_report(&committed.value);
                print_new_day(new_day);
                print_durability(&committed.durability);
            }
            SessionReply::Reset(committed) => {
                print_new_day(committed.value);
                print_reset_ack(committed.value);
                print_durability(&committed.durability);
            }
            SessionReply::Denied(reason) => println!("{}", reason.red()),
            SessionReply::Status(day) => println!("Day #{day} in progress"),
            SessionReply::Help => print_help(),
            SessionReply::Quit => break,
        }
    }

    println!("\n👋 Session closed.\n");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  guess <player> <word>   Submit a guess");
    println!("  letters <player>        Show unused letters and past guesses");
    println!("  end-day                 Close the day and publish results");
    println!("  reset <admin>           Start a new day without results");
    println!("  status                  Show the current day");
    println!("  quit                    Leave the session\n");
}
