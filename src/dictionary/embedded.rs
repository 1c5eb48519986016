//! Embedded word list
//!
//! Compiled into the binary so the game runs without any data files.

/// Default word list, one lowercase word per line
pub const EMBEDDED_WORDS: &str = include_str!("../../data/wordle.txt");
