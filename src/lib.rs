//! Wordle Game
//!
//! A single-player word-guessing game: six attempts to find a five-letter
//! word, with per-letter feedback that scores duplicate letters correctly.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::dictionary::Dictionary;
//! use wordle_game::engine::{GuessEngine, RoundState};
//!
//! let dict = Dictionary::load("apple\nangle\nallot").unwrap();
//! let mut engine = GuessEngine::with_solution(&dict, "apple").unwrap();
//!
//! let result = engine.submit_guess("angle").unwrap();
//! println!("{}", result.to_emoji());
//! assert_eq!(engine.round_state(), RoundState::InProgress);
//! ```

// Core domain types
pub mod core;

// Word list loading
pub mod dictionary;

// Round state machine
pub mod engine;

// Rounds and statistics
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
