//! Core domain types for the game
//!
//! Pure value types and the scoring algorithm. Nothing here performs I/O or
//! holds round state; the engine builds on top of these.

mod feedback;
mod hints;
mod word;

pub use feedback::{GuessResult, LetterOutcome};
pub use hints::LetterHints;
pub use word::{Letter, Word, WordError};

/// Number of letters in every word of a round
pub const WORD_LENGTH: usize = 5;

/// Number of attempts a player gets before the round is lost
pub const MAX_GUESSES: usize = 6;
