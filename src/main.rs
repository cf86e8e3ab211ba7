//! Daily Wordle - CLI
//!
//! Runs the shared daily round from a console session, plus a few operator
//! commands for inspecting and resetting the persisted round.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use daily_wordle::{
    commands::{run_reset, run_score, run_session, run_status},
    config::Config,
    round::ParticipantId,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "daily_wordle",
    about = "Shared daily Wordle round with end-of-day results",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// State file holding the day, the secret and the word list
    #[arg(long, global = true, env = "WORDLE_STATE_FILE", default_value = "gameState.json")]
    state_file: PathBuf,

    /// Word list, one word per line (created with built-in words if missing)
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORD_LIST", default_value = "wordList.txt")]
    word_list: PathBuf,

    /// Seed for picking secret words (random if omitted)
    #[arg(long, global = true, env = "WORDLE_SEED")]
    seed: Option<u64>,

    /// Participants allowed to reset the round (comma separated)
    #[arg(
        long = "admin",
        global = true,
        env = "WORDLE_ADMINS",
        value_delimiter = ',',
        default_value = "admin"
    )]
    admins: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session: guesses, letters, end-day and reset (default)
    Play,

    /// Score a guess against a word
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },

    /// Show the current day of the saved round
    Status {
        /// Also print the secret word
        #[arg(long)]
        reveal: bool,
    },

    /// Start a new day without publishing results
    Reset,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            state_file: self.state_file.clone(),
            word_list: self.word_list.clone(),
            seed: self.seed,
            admins: self
                .admins
                .iter()
                .map(|id| ParticipantId::new(id.trim()))
                .collect(),
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let engine = config.open_engine();
            run_session(&engine, &config.admins)
        }
        Commands::Score { guess, secret } => run_score(&guess, &secret),
        Commands::Status { reveal } => {
            run_status(&config, reveal);
            Ok(())
        }
        Commands::Reset => {
            run_reset(&config);
            Ok(())
        }
    }
}
