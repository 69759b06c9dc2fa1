//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear state-transition rules.

mod game;
mod letter;
mod word;

pub use game::{GameState, GameStatus, GuessError, GuessOutcome, MAX_WRONG, PLACEHOLDER, reveal};
pub use letter::{ALPHABET_LEN, Letter, LetterError, LetterSet};
pub use word::{SecretWord, WordError};
