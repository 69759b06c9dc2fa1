//! One round of Hangman
//!
//! `GameState` is created fresh per round and mutated only through
//! [`GameState::apply_guess`]. Guessed letters only grow, the miss counter
//! only increments, and once the round is won or lost it rejects further
//! guesses.

use super::letter::{Letter, LetterSet};
use super::word::SecretWord;
use std::fmt;

/// Misses allowed before the round is lost
pub const MAX_WRONG: usize = 6;

/// Shown in place of letters that have not been guessed yet
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the secret word
    Hit,
    /// The letter does not occur; one more wrong guess was counted
    Miss,
}

/// Reasons a guess is rejected without changing the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    AlreadyGuessed(Letter),
    GameOver(GameStatus),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyGuessed(letter) => write!(f, "You already guessed '{letter}'"),
            Self::GameOver(GameStatus::Won) => write!(f, "The word has already been revealed"),
            Self::GameOver(_) => write!(f, "No guesses left, the round is over"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Render `secret` with every unguessed position replaced by [`PLACEHOLDER`]
///
/// # Examples
/// ```
/// use hangman_ai::core::{reveal, Letter, LetterSet, SecretWord};
///
/// let word = SecretWord::new("hangman").unwrap();
/// let guessed: LetterSet = ['a', 'n'].into_iter().map(|c| Letter::new(c).unwrap()).collect();
/// assert_eq!(reveal(&word, &guessed), "_an__an");
/// ```
#[must_use]
pub fn reveal(secret: &SecretWord, guessed: &LetterSet) -> String {
    secret
        .letters()
        .map(|l| {
            if guessed.contains(l) {
                l.as_char()
            } else {
                PLACEHOLDER
            }
        })
        .collect()
}

/// State of a single round
#[derive(Debug, Clone)]
pub struct GameState {
    secret: SecretWord,
    guessed: LetterSet,
    wrong: usize,
    max_wrong: usize,
    status: GameStatus,
}

impl GameState {
    /// Start a round with the standard miss limit of [`MAX_WRONG`]
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        Self::with_max_wrong(secret, MAX_WRONG)
    }

    /// Start a round with a custom miss limit (clamped to at least 1)
    #[must_use]
    pub fn with_max_wrong(secret: SecretWord, max_wrong: usize) -> Self {
        Self {
            secret,
            guessed: LetterSet::new(),
            wrong: 0,
            max_wrong: max_wrong.max(1),
            status: GameStatus::InProgress,
        }
    }

    /// Apply one guess
    ///
    /// # Errors
    /// Returns `GuessError::GameOver` once the round is won or lost and
    /// `GuessError::AlreadyGuessed` for a repeated letter. Rejected guesses
    /// leave the state untouched.
    ///
    /// # Examples
    /// ```
    /// use hangman_ai::core::{GameState, GameStatus, GuessOutcome, Letter, SecretWord};
    ///
    /// let mut game = GameState::new(SecretWord::new("go").unwrap());
    /// assert_eq!(game.apply_guess(Letter::new('g').unwrap()), Ok(GuessOutcome::Hit));
    /// assert_eq!(game.apply_guess(Letter::new('o').unwrap()), Ok(GuessOutcome::Hit));
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn apply_guess(&mut self, letter: Letter) -> Result<GuessOutcome, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::GameOver(self.status));
        }
        if self.guessed.contains(letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        self.guessed.insert(letter);

        if self.secret.contains(letter) {
            if !self.reveal().contains(PLACEHOLDER) {
                self.status = GameStatus::Won;
            }
            Ok(GuessOutcome::Hit)
        } else {
            self.wrong += 1;
            if self.wrong == self.max_wrong {
                self.status = GameStatus::Lost;
            }
            Ok(GuessOutcome::Miss)
        }
    }

    /// The secret word with unguessed positions masked
    #[must_use]
    pub fn reveal(&self) -> String {
        reveal(&self.secret, &self.guessed)
    }

    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[must_use]
    pub const fn guessed(&self) -> &LetterSet {
        &self.guessed
    }

    #[must_use]
    pub const fn wrong(&self) -> usize {
        self.wrong
    }

    #[must_use]
    pub const fn max_wrong(&self) -> usize {
        self.max_wrong
    }

    #[must_use]
    pub const fn remaining_misses(&self) -> usize {
        self.max_wrong - self.wrong
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }
}
