//! Pure board and keyboard layout
//!
//! Turns engine state into tiles and keys. The TUI and the line-based CLI
//! both paint from these, so neither needs to know how scoring works.

use crate::core::{Letter, LetterHints, LetterOutcome, MAX_GUESSES, WORD_LENGTH};
use crate::engine::{Attempt, GuessEngine, InputBuffer};

/// How a single tile or key should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileStyle {
    /// Nothing typed or guessed yet
    Empty,
    /// Typed into the current row, not yet submitted
    Pending,
    Correct,
    Present,
    Absent,
}

impl From<LetterOutcome> for TileStyle {
    fn from(outcome: LetterOutcome) -> Self {
        match outcome {
            LetterOutcome::Correct => Self::Correct,
            LetterOutcome::Present => Self::Present,
            LetterOutcome::Absent => Self::Absent,
        }
    }
}

/// One cell of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<Letter>,
    pub style: TileStyle,
}

impl Tile {
    pub const EMPTY: Self = Self {
        letter: None,
        style: TileStyle::Empty,
    };
}

/// One key of the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub letter: Letter,
    pub style: TileStyle,
}

pub type Row = [Tile; WORD_LENGTH];

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Tiles for a submitted guess
#[must_use]
pub fn row(attempt: &Attempt) -> Row {
    let mut tiles = [Tile::EMPTY; WORD_LENGTH];
    for ((tile, letter), &outcome) in tiles
        .iter_mut()
        .zip(attempt.word.letters())
        .zip(attempt.result.outcomes())
    {
        *tile = Tile {
            letter: Some(letter),
            style: outcome.into(),
        };
    }
    tiles
}

/// Tiles for the row being typed
#[must_use]
pub fn pending_row(input: &InputBuffer) -> Row {
    let mut tiles = [Tile::EMPTY; WORD_LENGTH];
    for (tile, &letter) in tiles.iter_mut().zip(input.letters()) {
        *tile = Tile {
            letter: Some(letter),
            style: TileStyle::Pending,
        };
    }
    tiles
}

/// The full board: always [`MAX_GUESSES`] rows
///
/// Submitted rows come first, then the row being typed while the round is in
/// progress, then empty rows.
#[must_use]
pub fn board(engine: &GuessEngine<'_>, input: &InputBuffer) -> Vec<Row> {
    let mut rows: Vec<Row> = engine.history().iter().map(row).collect();
    if !engine.round_state().is_over() {
        rows.push(pending_row(input));
    }
    rows.resize(MAX_GUESSES, [Tile::EMPTY; WORD_LENGTH]);
    rows
}

/// QWERTY keyboard colored by the best hint seen for each key
#[must_use]
pub fn keyboard(hints: &LetterHints) -> Vec<Vec<Key>> {
    KEYBOARD_ROWS
        .iter()
        .map(|keys| {
            keys.chars()
                .filter_map(Letter::new)
                .map(|letter| Key {
                    letter,
                    style: hints.get(letter).map_or(TileStyle::Empty, TileStyle::from),
                })
                .collect()
        })
        .collect()
}
