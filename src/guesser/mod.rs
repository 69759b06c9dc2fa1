//! Automated guessers
//!
//! This module contains the guessing strategies and the loop that lets them
//! play a full round.

mod engine;
pub mod strategy;

pub use engine::{RoundReport, Turn, play_round};
pub use strategy::{Guesser, RandomGuesser};
