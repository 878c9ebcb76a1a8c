//! Core domain types for the daily word game
//!
//! This module contains the fundamental domain types with zero external I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{GuessResult, LetterOutcome};
pub use keyboard::KeyboardHints;
pub use word::{Word, WordError};

/// Fixed word length for every target and guess
pub const WORD_LENGTH: usize = 5;

/// Maximum number of guesses per game
pub const MAX_GUESSES: usize = 6;
