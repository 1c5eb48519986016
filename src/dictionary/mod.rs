//! Word list for a round
//!
//! A `Dictionary` is the validated, deduplicated set of words the player may
//! guess and from which solutions are drawn. It is built once and never
//! mutated, so every round of a session can borrow the same instance.

mod embedded;

pub use embedded::EMBEDDED_WORDS;

use crate::core::{WORD_LENGTH, Word};
use log::{debug, info};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors raised while building a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// No line of the source normalized to a valid word.
    #[error("word list contains no valid {len}-letter words", len = WORD_LENGTH)]
    Empty,

    #[error("could not read word list")]
    Io(#[from] io::Error),
}

/// Immutable set of candidate words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from newline-delimited text
    ///
    /// Each line is trimmed and lowercased. Lines that are not exactly
    /// [`WORD_LENGTH`] ASCII letters are skipped, and duplicates keep their
    /// first position.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Empty`] if no line survives normalization.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::load("Apple\n  angle \n\nallot\napple\nbanana\n").unwrap();
    /// assert_eq!(dict.len(), 3);
    /// assert!(dict.contains("angle"));
    /// assert!(!dict.contains("banana"));
    /// ```
    pub fn load(raw_text: &str) -> Result<Self, DictionaryError> {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();
        let mut skipped = 0usize;

        for line in raw_text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match Word::new(trimmed) {
                Ok(word) => {
                    if index.insert(word.clone()) {
                        words.push(word);
                    }
                }
                Err(err) => {
                    debug!("skipping word list entry {trimmed:?}: {err}");
                    skipped += 1;
                }
            }
        }

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        info!(
            "loaded dictionary with {} words ({skipped} entries skipped)",
            words.len()
        );
        Ok(Self { words, index })
    }

    /// Read and build a dictionary from a file
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if the file cannot be read, or
    /// [`DictionaryError::Empty`] if it holds no valid words.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let content = fs::read_to_string(path)?;
        Self::load(&content)
    }

    /// The word list compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded list is empty.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::load(EMBEDDED_WORDS)
    }

    /// Exact-match membership test
    ///
    /// The query is lowercased first; anything that is not a valid word is
    /// simply not contained.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.index.contains(&w))
    }

    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Draw a solution uniformly at random
    ///
    /// Pass a seeded `StdRng` for reproducible picks.
    pub fn pick_random_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        let i = rng.random_range(0..self.words.len());
        self.words[i].clone()
    }

    /// Words in first-seen order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty word lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
