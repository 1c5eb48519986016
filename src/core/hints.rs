//! Aggregate keyboard hints
//!
//! Tracks the best outcome seen for each letter across every guess of a round.

use super::{GuessResult, Letter, LetterOutcome, Word};

/// Best-seen outcome per letter
///
/// Hints only ever improve: once a letter is `Correct` it never drops back to
/// `Present` or `Absent`. Letters that have not been guessed have no hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterHints([Option<LetterOutcome>; 26]);

impl LetterHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the hints
    pub fn record(&mut self, guess: &Word, result: &GuessResult) {
        for (letter, &outcome) in guess.letters().zip(result.outcomes()) {
            let slot = &mut self.0[letter.index()];
            *slot = Some(slot.map_or(outcome, |seen| seen.max(outcome)));
        }
    }

    /// Best outcome seen for `letter`, if it has been guessed
    #[must_use]
    pub const fn get(&self, letter: Letter) -> Option<LetterOutcome> {
        self.0[letter.index()]
    }

    /// Iterate over guessed letters and their hints in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (Letter, LetterOutcome)> + '_ {
        Letter::all().filter_map(|letter| self.get(letter).map(|o| (letter, o)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}
