//! Round state machine
//!
//! [`GuessEngine`] owns everything that changes during a round: the solution,
//! the attempt history, the keyboard hints and the outcome. It is the only
//! place that scores guesses or decides when a round ends.
//!
//! ```text
//! InProgress --valid guess, not a win, attempts left--> InProgress
//! InProgress --valid guess, not a win, last attempt---> Lost
//! InProgress --valid guess, all Correct--------------> Won
//! ```
//!
//! `Won` and `Lost` are terminal.

mod input;

pub use input::InputBuffer;

use crate::core::{GuessResult, LetterHints, MAX_GUESSES, WORD_LENGTH, Word};
use crate::dictionary::Dictionary;
use log::{debug, info};
use rand::Rng;
use thiserror::Error;

/// Progress of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

impl RoundState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Why the engine rejected an operation
///
/// Every variant leaves the round untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("guess must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("\"{0}\" is not in the word list")]
    NotInDictionary(String),

    #[error("the round is already over")]
    RoundAlreadyOver,

    #[error("the round is still in progress")]
    RoundNotOver,
}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub word: Word,
    pub result: GuessResult,
}

/// Mutable state of a single round
#[derive(Debug, Clone)]
pub struct GuessEngine<'d> {
    dictionary: &'d Dictionary,
    solution: Word,
    history: Vec<Attempt>,
    hints: LetterHints,
    state: RoundState,
}

impl<'d> GuessEngine<'d> {
    /// Start a round with a solution drawn from `dictionary`
    pub fn new<R: Rng + ?Sized>(dictionary: &'d Dictionary, rng: &mut R) -> Self {
        let solution = dictionary.pick_random_solution(rng);
        Self::start(dictionary, solution)
    }

    /// Start a round with a fixed solution
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotInDictionary`] if `solution` is not one of
    /// the dictionary's words.
    pub fn with_solution(dictionary: &'d Dictionary, solution: &str) -> Result<Self, EngineError> {
        let word = Word::new(solution)
            .ok()
            .filter(|w| dictionary.contains_word(w))
            .ok_or_else(|| EngineError::NotInDictionary(solution.to_lowercase()))?;
        Ok(Self::start(dictionary, word))
    }

    fn start(dictionary: &'d Dictionary, solution: Word) -> Self {
        debug!("new round started");
        Self {
            dictionary,
            solution,
            history: Vec::with_capacity(MAX_GUESSES),
            hints: LetterHints::new(),
            state: RoundState::InProgress,
        }
    }

    /// Score a guess and advance the round
    ///
    /// The candidate is lowercased before validation. On success the attempt
    /// is appended to the history, hints are updated, and the round may end.
    ///
    /// # Errors
    ///
    /// - [`EngineError::RoundAlreadyOver`] if the round is won or lost
    /// - [`EngineError::InvalidLength`] if the candidate is not
    ///   [`WORD_LENGTH`] characters
    /// - [`EngineError::NotInDictionary`] if it is not a dictionary word
    ///
    /// A rejected guess does not consume an attempt.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::LetterOutcome::*;
    /// use wordle_game::dictionary::Dictionary;
    /// use wordle_game::engine::{GuessEngine, RoundState};
    ///
    /// let dict = Dictionary::load("apple\nangle\nallot").unwrap();
    /// let mut engine = GuessEngine::with_solution(&dict, "apple").unwrap();
    ///
    /// let result = engine.submit_guess("angle").unwrap();
    /// assert_eq!(result.outcomes(), &[Correct, Absent, Absent, Correct, Correct]);
    /// assert_eq!(engine.round_state(), RoundState::InProgress);
    /// ```
    pub fn submit_guess(&mut self, candidate: &str) -> Result<GuessResult, EngineError> {
        let word = self.validate(candidate).inspect_err(|err| {
            debug!("rejected guess {candidate:?}: {err}");
        })?;

        let result = GuessResult::evaluate(&word, &self.solution);
        self.hints.record(&word, &result);
        debug!(
            "turn {}: {} {}",
            self.history.len() + 1,
            word,
            result.to_emoji()
        );
        self.history.push(Attempt { word, result });

        self.state = if result.is_win() {
            RoundState::Won
        } else if self.history.len() >= MAX_GUESSES {
            RoundState::Lost
        } else {
            RoundState::InProgress
        };

        if self.state.is_over() {
            info!(
                "round over: {:?} after {} attempts, solution {}",
                self.state,
                self.history.len(),
                self.solution
            );
        }

        Ok(result)
    }

    fn validate(&self, candidate: &str) -> Result<Word, EngineError> {
        if self.state.is_over() {
            return Err(EngineError::RoundAlreadyOver);
        }

        let actual = candidate.chars().count();
        if actual != WORD_LENGTH {
            return Err(EngineError::InvalidLength {
                expected: WORD_LENGTH,
                actual,
            });
        }

        Word::new(candidate)
            .ok()
            .filter(|w| self.dictionary.contains_word(w))
            .ok_or_else(|| EngineError::NotInDictionary(candidate.to_lowercase()))
    }

    #[must_use]
    pub const fn round_state(&self) -> RoundState {
        self.state
    }

    /// Snapshot of the keyboard hints
    #[must_use]
    pub const fn letter_hints(&self) -> LetterHints {
        self.hints
    }

    /// The solution, once the round is over
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RoundNotOver`] while the round is in progress.
    pub fn revealed_solution(&self) -> Result<&Word, EngineError> {
        if self.state.is_over() {
            Ok(&self.solution)
        } else {
            Err(EngineError::RoundNotOver)
        }
    }

    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    /// Index of the current attempt row (0-based)
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_GUESSES - self.history.len()
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;
    use crate::core::LetterOutcome::{Absent, Correct, Present};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &str = "apple\nangle\nallot\nalgae\naroma\nplead\napply\ncrane\nslate\nirate\n";

    fn dict() -> Dictionary {
        Dictionary::load(WORDS).unwrap()
    }

    #[test]
    fn initial_state() {
        let dict = dict();
        let engine = GuessEngine::with_solution(&dict, "apple").unwrap();
        assert_eq!(engine.round_state(), RoundState::InProgress);
        assert!(engine.history().is_empty());
        assert!(engine.letter_hints().is_empty());
        assert_eq!(engine.turn(), 0);
        assert_eq!(engine.attempts_remaining(), MAX_GUESSES);
    }

    #[test]
    fn random_solution_is_reproducible() {
        let dict = dict();
        let a = GuessEngine::new(&dict, &mut StdRng::seed_from_u64(3));
        let b = GuessEngine::new(&dict, &mut StdRng::seed_from_u64(3));
        assert_eq!(a.solution, b.solution);
        assert!(dict.contains_word(&a.solution));
    }

    #[test]
    fn with_solution_requires_dictionary_word() {
        let dict = dict();
        assert_eq!(
            GuessEngine::with_solution(&dict, "zebra").unwrap_err(),
            EngineError::NotInDictionary("zebra".to_string())
        );
        assert!(GuessEngine::with_solution(&dict, "APPLE").is_ok());
    }

    #[test]
    fn angle_against_apple_stays_in_progress() {
        let dict = dict();
        let mut engine = GuessEngine::with_solution(&dict, "apple").unwrap();
        let result = engine.submit_guess("angle").unwrap();

        assert_eq!(result.outcomes(), &[Correct, Absent, Absent, Correct, Correct]);
        assert_eq!(engine.round_state(), RoundState::InProgress);
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.history()[0].word.text(), "angle");
        assert_eq!(engine.turn(), 1);
    }

    #[test]
    fn aroma_against_algae() {
        let dict = dict();
        let mut engine = GuessEngine::with_solution(&dict, "algae").unwrap();
        let result = engine.submit_guess("aroma").unwrap();
        assert_eq!(result.outcomes(), &[Correct, Absent, Absent, Absent, Present]);
    }

    #[test]
    fn invalid_length_is_rejected_without_consuming() {
        let dict = dict();
        let mut engine = GuessEngine::with_solution(&dict, "apple").unwrap();

        assert_eq!(
            engine.submit_guess("app"),
            Err(EngineError::InvalidLength {
                expected: 5,
                actual: 3
            })
        );
        assert_eq!(
            engine.submit_guess("applesauce"),
            Err(EngineError::InvalidLength {
                expected: 5,
                actual: 10
            })
        );
        assert!(engine.history().is_empty());
        assert_eq!(engine.round_state(), RoundState::InProgress);
    }

    #[test]
    fn unknown_word_is_rejected_without_consuming() {
        let dict = dict();
        let mut engine = GuessEngine::with_solution(&dict, "apple").unwrap();

        assert_eq!(
            engine.submit_guess("Zebra"),
            Err(EngineError::NotInDictionary("zebra".to_string()))
        );
        assert!(matches!(
            engine.submit_guess("appl3"),
            Err(EngineError::NotInDictionary(_))
        ));
        assert!(engine.history().is_empty());
        assert!(engine.letter_hints().is_empty());
        assert_eq!(engine.round_state(), RoundState::InProgress);
    }

    #[test]
    fn guess_is_case_insensitive() {
        let dict = dict();
        let mut engine = GuessEngine::with_solution(&dict, "apple").unwrap();
        assert!(engine.submit_guess("APPLE").unwrap().is_win());
    }

    #[test]
    fn first_guess_win() {
        let dict = dict();
        let mut engine = GuessEngine::with_solution(&dict, "apple").unwrap();
        assert_eq!(engine.submit_guess("apple").unwrap(), GuessResult::PERFECT);
        assert_eq!(engine.round_state(), RoundState::Won);
        assert_eq!(engine.revealed_solution().unwrap().text(), "apple");
        assert_eq!(engine.attempts_remaining(), MAX_GUESSES - 1);
    }

    #[test]
    fn win_on_last_attempt_is_won_not_lost() {
        let dict = dict();
        let mut engine = GuessEngine::with_solution(&dict, "apple").unwrap();
        for _ in 0..MAX_GUESSES - 1 {
            engine.submit_guess("crane").unwrap();
        }
        engine.submit_guess("apple").unwrap();
        assert_eq!(engine.round_state(), RoundState::Won);
    }

    #[test]
    fn exhausting_attempts_loses() {
        let dict = dict();
        let mut engine = GuessEngine::with_solution(&dict, "apple").unwrap();
        for turn in 0..MAX_GUESSES {
            assert_eq!(engine.revealed_solution(), Err(EngineError::RoundNotOver));
            engine.submit_guess("slate").unwrap();
            let expected = if turn + 1 == MAX_GUESSES {
                RoundState::Lost
            } else {
                RoundState::InProgress
            };
            assert_eq!(engine.round_state(), expected);
        }
        assert_eq!(engine.history().len(), MAX_GUESSES);
        assert_eq!(engine.attempts_remaining(), 0);
        assert_eq!(engine.revealed_solution().unwrap().text(), "apple");
    }

    #[test]
    fn terminal_state_rejects_further_guesses() {
        let dict = dict();
        let mut engine = GuessEngine::with_solution(&dict, "apple").unwrap();
        engine.submit_guess("apple").unwrap();

        assert_eq!(engine.submit_guess("angle"), Err(EngineError::RoundAlreadyOver));
        // Terminal check wins over other validation
        assert_eq!(engine.submit_guess("x"), Err(EngineError::RoundAlreadyOver));
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.round_state(), RoundState::Won);
    }

    #[test]
    fn hints_accumulate_across_guesses() {
        let dict = dict();
        let mut engine = GuessEngine::with_solution(&dict, "apple").unwrap();
        let p = Letter::new('p').unwrap();

        engine.submit_guess("plead").unwrap();
        assert_eq!(engine.letter_hints().get(p), Some(Present));

        engine.submit_guess("apply").unwrap();
        assert_eq!(engine.letter_hints().get(p), Some(Correct));

        engine.submit_guess("crane").unwrap();
        assert_eq!(engine.letter_hints().get(p), Some(Correct));
        assert_eq!(
            engine.letter_hints().get(Letter::new('c').unwrap()),
            Some(Absent)
        );
    }

    #[test]
    fn hints_snapshot_is_detached() {
        let dict = dict();
        let mut engine = GuessEngine::with_solution(&dict, "apple").unwrap();
        let before = engine.letter_hints();
        engine.submit_guess("crane").unwrap();
        assert!(before.is_empty());
        assert!(!engine.letter_hints().is_empty());
    }

    fn guess_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(0..10usize, 1..12)
    }

    proptest! {
        #[test]
        fn prop_round_invariants(solution in 0..10usize, guesses in guess_strategy()) {
            let dict = dict();
            let words = dict.words();
            let mut engine = GuessEngine::with_solution(&dict, words[solution].text()).unwrap();
            let mut previous = engine.letter_hints();

            for &g in &guesses {
                let before_len = engine.history().len();
                let was_over = engine.round_state().is_over();
                let outcome = engine.submit_guess(words[g].text());

                if was_over {
                    prop_assert_eq!(outcome, Err(EngineError::RoundAlreadyOver));
                    prop_assert_eq!(engine.history().len(), before_len);
                    continue;
                }

                let result = outcome.unwrap();
                prop_assert_eq!(engine.history().len(), before_len + 1);
                prop_assert!(engine.history().len() <= MAX_GUESSES);

                let hints = engine.letter_hints();
                for letter in Letter::all() {
                    prop_assert!(hints.get(letter) >= previous.get(letter));
                }
                previous = hints;

                let expected = if result.is_win() {
                    RoundState::Won
                } else if engine.history().len() == MAX_GUESSES {
                    RoundState::Lost
                } else {
                    RoundState::InProgress
                };
                prop_assert_eq!(engine.round_state(), expected);
                prop_assert_eq!(engine.revealed_solution().is_ok(), expected.is_over());
            }
        }
    }
}
