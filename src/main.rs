//! Wordle Game - CLI
//!
//! Play Wordle in the terminal, either in the TUI or line by line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wordle_game::{
    commands::run_simple,
    dictionary::Dictionary,
    interactive::{App, run_tui},
    session::Session,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for solution selection, for reproducible rounds
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,
}

/// Load the dictionary from the -w flag, or the embedded list
fn load_dictionary(wordlist: Option<&PathBuf>) -> Result<Dictionary> {
    match wordlist {
        Some(path) => Dictionary::load_from_file(path)
            .with_context(|| format!("failed to load word list {}", path.display())),
        None => Dictionary::embedded().context("built-in word list is empty"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(cli.wordlist.as_ref())?;

    let rng = match cli.seed {
        Some(seed) => {
            info!("using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let mut session = Session::new(&dictionary, rng);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(session)),
        Commands::Simple => run_simple(&mut session),
    }
}
