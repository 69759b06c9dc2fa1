//! Hangman AI
//!
//! Hangman with a letter-frequency guesser: play against a random word, watch
//! the predictor play, or compare it with a random-guessing baseline.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_ai::core::{GameState, SecretWord};
//! use hangman_ai::guesser::play_round;
//! use hangman_ai::predictor::Predictor;
//!
//! let predictor = Predictor::from_corpus(["python", "hangman", "machine"]);
//! let game = GameState::new(SecretWord::new("python").unwrap());
//!
//! let report = play_round(&predictor, game, |turn| println!("{} -> {}", turn.letter, turn.revealed));
//! println!("won: {}, misses: {}", report.won(), report.wrong);
//! ```

// Core domain types
pub mod core;

// Letter-frequency predictor and model files
pub mod predictor;

// Automated guessers
pub mod guesser;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
