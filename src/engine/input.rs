//! In-progress guess typed by the player
//!
//! The buffer gates key presses for the UI. It is a convenience only: the
//! engine validates every submission again on its own.

use super::RoundState;
use crate::core::{Letter, WORD_LENGTH};

/// Letters typed for the current row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    letters: Vec<Letter>,
}

impl InputBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a letter
    ///
    /// Accepted only for ASCII letters, while the row has room and the round
    /// is in progress. Returns whether the letter was taken.
    pub fn push(&mut self, ch: char, state: RoundState) -> bool {
        if state != RoundState::InProgress || self.letters.len() >= WORD_LENGTH {
            return false;
        }
        match Letter::new(ch) {
            Some(letter) => {
                self.letters.push(letter);
                true
            }
            None => false,
        }
    }

    /// Remove the last letter while the round is in progress
    pub fn pop(&mut self, state: RoundState) -> Option<Letter> {
        if state == RoundState::InProgress {
            self.letters.pop()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// Whether the row is full and ready to submit
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.letters.len() == WORD_LENGTH
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// The typed letters as a string, ready for `GuessEngine::submit_guess`
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|l| l.as_char()).collect()
    }
}
