//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one guess per line.

use crate::engine::EngineError;
use crate::output::{print_board, print_keyboard, print_round_outcome, print_statistics};
use crate::session::Session;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What the player asked for on one line of input
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    NewRound,
    Stats,
    Guess(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        match line {
            "" => None,
            ":q" | ":quit" | ":exit" => Some(Self::Quit),
            ":n" | ":new" => Some(Self::NewRound),
            ":s" | ":stats" => Some(Self::Stats),
            guess => Some(Self::Guess(guess)),
        }
    }
}

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple<R: Rng>(session: &mut Session<'_, R>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                        W O R D L E                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type a word and press Enter. Commands: ':new', ':stats', ':quit'\n");

    let stdin = io::stdin();
    play_lines(session, stdin.lock())
}

/// Drive a session from any line source until it ends or the player quits
fn play_lines<R: Rng, I: BufRead>(session: &mut Session<'_, R>, input: I) -> Result<()> {
    let mut lines = input.lines();

    loop {
        if !session.engine().round_state().is_over() {
            print_board(session.engine());
            print_keyboard(session.engine());
            prompt(&format!("Guess {}", session.engine().turn() + 1))?;
        }

        let Some(line) = lines.next().transpose()? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        let line = line.trim().to_lowercase();

        match Command::parse(&line) {
            None => {}
            Some(Command::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Some(Command::NewRound) => {
                session.new_round();
                println!("\n🔄 New round started!");
            }
            Some(Command::Stats) => print_statistics(session.stats()),
            Some(Command::Guess(guess)) => match session.submit(guess) {
                Ok(_) if session.engine().round_state().is_over() => {
                    print_board(session.engine());
                    print_round_outcome(session.engine());
                    print_statistics(session.stats());
                    prompt("Play again? (yes/no)")?;

                    let again = lines.next().transpose()?.unwrap_or_default();
                    if matches!(again.trim().to_lowercase().as_str(), "y" | "yes") {
                        session.new_round();
                        println!("\n🔄 New round started!");
                    } else {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
                Ok(_) => {}
                Err(err) => println!("{}", rejection_message(&err).red()),
            },
        }
    }
}

/// Player-facing explanation for a rejected guess
fn rejection_message(err: &EngineError) -> String {
    match err {
        EngineError::InvalidLength { expected, actual } => {
            format!("❌ Wrong length: need {expected} letters, got {actual}")
        }
        EngineError::NotInDictionary(word) => {
            format!("❌ Not in word list: {}", word.to_uppercase())
        }
        EngineError::RoundAlreadyOver => "❌ The round is over. Type ':new'".to_string(),
        EngineError::RoundNotOver => "❌ The round is still in progress".to_string(),
    }
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{text}: ");
    io::stdout().flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_GUESSES;
    use crate::dictionary::Dictionary;
    use crate::engine::RoundState;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    const WORDS: &str = "apple\nangle\nallot\n";

    fn losing_guess(session: &Session<'_, StdRng>) -> &'static str {
        // Whichever of these is not the solution; probe a copy of the round
        let mut probe = session.engine().clone();
        if probe.submit_guess("allot").is_ok_and(|r| r.is_win()) {
            "angle"
        } else {
            "allot"
        }
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse(":q"), Some(Command::Quit));
        assert_eq!(Command::parse(":new"), Some(Command::NewRound));
        assert_eq!(Command::parse(":stats"), Some(Command::Stats));
        assert_eq!(Command::parse("apple"), Some(Command::Guess("apple")));
    }

    #[test]
    fn rejection_messages_name_the_problem() {
        let msg = rejection_message(&EngineError::InvalidLength {
            expected: 5,
            actual: 3,
        });
        assert!(msg.contains("need 5"));
        assert!(rejection_message(&EngineError::NotInDictionary("zebra".into())).contains("ZEBRA"));
    }

    #[test]
    fn invalid_lines_do_not_consume_attempts() {
        let dict = Dictionary::load(WORDS).unwrap();
        let mut session = Session::new(&dict, StdRng::seed_from_u64(9));
        play_lines(&mut session, Cursor::new("abc\nzebra\n12345\n\n:quit\n")).unwrap();

        assert!(session.engine().history().is_empty());
        assert_eq!(session.engine().round_state(), RoundState::InProgress);
    }

    #[test]
    fn losing_round_then_decline_replay() {
        let dict = Dictionary::load(WORDS).unwrap();
        let mut session = Session::new(&dict, StdRng::seed_from_u64(11));
        let miss = losing_guess(&session);

        let mut script = format!("{miss}\n").repeat(MAX_GUESSES);
        script.push_str("no\n");
        play_lines(&mut session, Cursor::new(script)).unwrap();

        assert_eq!(session.engine().round_state(), RoundState::Lost);
        assert_eq!(session.stats().games_played, 1);
        assert_eq!(session.stats().games_won, 0);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let dict = Dictionary::load(WORDS).unwrap();
        let mut session = Session::new(&dict, StdRng::seed_from_u64(5));
        play_lines(&mut session, Cursor::new("ANGLE")).unwrap();
        assert_eq!(session.engine().history().len(), 1);
    }
}
