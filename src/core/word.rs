//! Secret word representation
//!
//! A `SecretWord` stores a lowercase word together with the set of distinct
//! letters it contains, so membership checks during play are O(1).

use super::letter::{Letter, LetterSet};
use std::fmt;

/// A word to be guessed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: LetterSet,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacter(c) => {
                write!(f, "Word may only contain letters a-z, found '{c}'")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new secret word, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman_ai::core::SecretWord;
    ///
    /// let word = SecretWord::new("Hangman").unwrap();
    /// assert_eq!(word.text(), "hangman");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("rock'n'roll").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let mut letters = LetterSet::new();
        for c in text.chars() {
            let letter = Letter::new(c).map_err(|_| WordError::InvalidCharacter(c))?;
            letters.insert(letter);
        }

        Ok(Self { text, letters })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letter positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(letter)
    }

    /// Letters of the word in order, one per position
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        // Validated at construction, every byte is a-z
        self.text.chars().filter_map(|c| Letter::new(c).ok())
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
