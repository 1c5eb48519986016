//! Per-letter feedback for a guess
//!
//! Each position of a guess receives one of three outcomes:
//! - `Absent` (gray): the letter is not in the solution, or every copy is
//!   already accounted for
//! - `Present` (yellow): the letter is in the solution at another position
//! - `Correct` (green): the letter is at this exact position

use super::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Outcome for a single letter of a guess
///
/// Ordered `Absent < Present < Correct`, so the best hint seen for a letter
/// is simply the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterOutcome {
    Absent,
    Present,
    Correct,
}

impl LetterOutcome {
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for one submitted guess, one outcome per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult([LetterOutcome; WORD_LENGTH]);

impl GuessResult {
    /// All greens
    pub const PERFECT: Self = Self([LetterOutcome::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(outcomes: [LetterOutcome; WORD_LENGTH]) -> Self {
        Self(outcomes)
    }

    /// Score `guess` against `solution`
    ///
    /// A letter that appears `k` times in the solution is marked `Correct` or
    /// `Present` at most `k` times across the guess, with exact matches
    /// claiming their copies first.
    ///
    /// # Algorithm
    /// 1. Seed a remaining-count pool from the solution's letters
    /// 2. First pass: mark exact matches `Correct` and take them from the pool
    /// 3. Second pass: mark other positions `Present` while the pool still
    ///    holds that letter, taking one copy each time
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessResult, LetterOutcome::*, Word};
    ///
    /// let guess = Word::new("aroma").unwrap();
    /// let solution = Word::new("algae").unwrap();
    /// let result = GuessResult::evaluate(&guess, &solution);
    ///
    /// assert_eq!(result.outcomes(), &[Correct, Absent, Absent, Absent, Present]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        let mut outcomes = [LetterOutcome::Absent; WORD_LENGTH];
        let mut remaining = solution.letter_counts();

        // First pass: exact position matches
        for (i, outcome) in outcomes.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == solution.letter_at(i) {
                *outcome = LetterOutcome::Correct;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        for (i, outcome) in outcomes.iter_mut().enumerate() {
            if *outcome == LetterOutcome::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                *outcome = LetterOutcome::Present;
                *count -= 1;
            }
        }

        Self(outcomes)
    }

    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[LetterOutcome; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&o| o == LetterOutcome::Correct)
    }

    /// Count the positions with the given outcome
    #[must_use]
    pub fn count(&self, outcome: LetterOutcome) -> usize {
        self.0.iter().filter(|&&o| o == outcome).count()
    }

    /// Convert to an emoji string like "🟩⬜⬜🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|o| o.to_emoji()).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.0 {
            let ch = match outcome {
                LetterOutcome::Correct => 'G',
                LetterOutcome::Present => 'Y',
                LetterOutcome::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Parse a result from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Accepts:
/// - 'G'/'g'/🟩 for correct
/// - 'Y'/'y'/🟨 for present
/// - '-'/'_'/⬜ for absent
impl FromStr for GuessResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid result string: {s}"));
        }

        let mut outcomes = [LetterOutcome::Absent; WORD_LENGTH];
        for (outcome, ch) in outcomes.iter_mut().zip(chars) {
            *outcome = match ch {
                'G' | 'g' | '🟩' => LetterOutcome::Correct,
                'Y' | 'y' | '🟨' => LetterOutcome::Present,
                '-' | '_' | '⬜' => LetterOutcome::Absent,
                _ => return Err(format!("Invalid result string: {s}")),
            };
        }

        Ok(Self(outcomes))
    }
}
