//! A sequence of rounds sharing one dictionary
//!
//! The session owns the random source and keeps in-memory statistics. Nothing
//! is persisted; statistics reset when the process exits.

use crate::core::{GuessResult, MAX_GUESSES};
use crate::dictionary::Dictionary;
use crate::engine::{EngineError, GuessEngine, RoundState};
use log::info;
use rand::Rng;

/// Results over the finished rounds of a session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins by attempt count; index 0 is unused
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    fn record(&mut self, state: RoundState, attempts: usize) {
        self.games_played += 1;
        match state {
            RoundState::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(slot) = self.guess_distribution.get_mut(attempts) {
                    *slot += 1;
                }
            }
            RoundState::Lost => self.current_streak = 0,
            RoundState::InProgress => {}
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

/// Rounds played back to back over one dictionary
pub struct Session<'d, R: Rng> {
    dictionary: &'d Dictionary,
    rng: R,
    engine: GuessEngine<'d>,
    stats: Statistics,
}

impl<'d, R: Rng> Session<'d, R> {
    /// Start a session and its first round
    pub fn new(dictionary: &'d Dictionary, mut rng: R) -> Self {
        let engine = GuessEngine::new(dictionary, &mut rng);
        Self {
            dictionary,
            rng,
            engine,
            stats: Statistics::default(),
        }
    }

    /// Submit a guess to the current round
    ///
    /// Statistics are updated once, on the guess that ends the round.
    ///
    /// # Errors
    ///
    /// Propagates the engine's rejection unchanged.
    pub fn submit(&mut self, guess: &str) -> Result<GuessResult, EngineError> {
        let result = self.engine.submit_guess(guess)?;
        let state = self.engine.round_state();
        if state.is_over() {
            self.stats.record(state, self.engine.history().len());
            info!(
                "session: {} played, {} won",
                self.stats.games_played, self.stats.games_won
            );
        }
        Ok(result)
    }

    /// Abandon the current round and start another
    ///
    /// An unfinished round is not counted.
    pub fn new_round(&mut self) {
        self.engine = GuessEngine::new(self.dictionary, &mut self.rng);
    }

    #[must_use]
    pub const fn engine(&self) -> &GuessEngine<'d> {
        &self.engine
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &str = "apple\nangle\nallot\ncrane\nslate\nirate\nplead\n";

    fn solution(session: &Session<'_, StdRng>) -> String {
        // Solve by scanning the dictionary against a throwaway copy
        session
            .dictionary()
            .words()
            .iter()
            .find(|w| {
                let mut probe = session.engine().clone();
                probe.submit_guess(w.text()).is_ok_and(|r| r.is_win())
            })
            .map(|w| w.text().to_string())
            .unwrap()
    }

    fn wrong_guess(session: &Session<'_, StdRng>) -> String {
        let answer = solution(session);
        session
            .dictionary()
            .words()
            .iter()
            .find(|w| w.text() != answer)
            .map(|w| w.text().to_string())
            .unwrap()
    }

    #[test]
    fn win_is_recorded_once() {
        let dict = Dictionary::load(WORDS).unwrap();
        let mut session = Session::new(&dict, StdRng::seed_from_u64(1));

        let miss = wrong_guess(&session);
        let answer = solution(&session);
        session.submit(&miss).unwrap();
        session.submit(&answer).unwrap();
        assert_eq!(session.submit(&answer), Err(EngineError::RoundAlreadyOver));

        let stats = session.stats();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[2], 1);
        assert_eq!(stats.current_streak, 1);
        assert!((stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn loss_resets_streak() {
        let dict = Dictionary::load(WORDS).unwrap();
        let mut session = Session::new(&dict, StdRng::seed_from_u64(2));

        let answer = solution(&session);
        session.submit(&answer).unwrap();

        session.new_round();
        let miss = wrong_guess(&session);
        for _ in 0..MAX_GUESSES {
            session.submit(&miss).unwrap();
        }
        assert_eq!(session.engine().round_state(), RoundState::Lost);

        let stats = session.stats();
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn abandoned_round_is_not_counted() {
        let dict = Dictionary::load(WORDS).unwrap();
        let mut session = Session::new(&dict, StdRng::seed_from_u64(3));

        let miss = wrong_guess(&session);
        session.submit(&miss).unwrap();
        session.new_round();

        assert_eq!(session.stats(), &Statistics::default());
        assert!(session.engine().history().is_empty());
        assert_eq!(session.engine().round_state(), RoundState::InProgress);
    }

    #[test]
    fn rejected_guess_leaves_stats_alone() {
        let dict = Dictionary::load(WORDS).unwrap();
        let mut session = Session::new(&dict, StdRng::seed_from_u64(4));
        assert!(session.submit("zzzzz").is_err());
        assert_eq!(session.stats().games_played, 0);
    }

    #[test]
    fn empty_stats_win_rate_is_zero() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
