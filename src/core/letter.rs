//! Letters of the guessing alphabet
//!
//! A `Letter` is one of the 26 lowercase ASCII letters; a `LetterSet` is a
//! compact set of them backed by a bitmask.

use std::fmt;

/// Number of letters in the guessing alphabet
pub const ALPHABET_LEN: usize = 26;

/// A single lowercase ASCII letter (`a`..=`z`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

/// Error type for invalid letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    Empty,
    TooLong(usize),
    NotAlphabetic(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter a letter"),
            Self::TooLong(len) => write!(f, "Please enter a single letter, got {len} characters"),
            Self::NotAlphabetic(c) => write!(f, "'{c}' is not a letter from a to z"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Create a letter from a character, normalizing case
    ///
    /// # Errors
    /// Returns `LetterError::NotAlphabetic` for anything outside `a-z`/`A-Z`.
    ///
    /// # Examples
    /// ```
    /// use hangman_ai::core::Letter;
    ///
    /// assert_eq!(Letter::new('E').unwrap().as_char(), 'e');
    /// assert!(Letter::new('3').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase() as u8))
        } else {
            Err(LetterError::NotAlphabetic(c))
        }
    }

    /// Parse one line of user input as a letter
    ///
    /// Surrounding whitespace is ignored; exactly one letter must remain.
    ///
    /// # Errors
    /// Returns `LetterError` for empty, multi-character or non-alphabetic input.
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();

        match (chars.next(), chars.next()) {
            (None, _) => Err(LetterError::Empty),
            (Some(c), None) => Self::new(c),
            (Some(_), Some(_)) => Err(LetterError::TooLong(trimmed.chars().count())),
        }
    }

    /// Alphabet position (0 = `a`, 25 = `z`)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// All 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A set of letters
///
/// Iteration is always alphabetical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    const FULL: u32 = (1 << ALPHABET_LEN) - 1;

    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Insert a letter, returning `false` if it was already present
    pub const fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1 << letter.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True when all 26 letters are present
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.0 == Self::FULL
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::all().filter(|&l| self.contains(l))
    }

    /// Letters of the alphabet not in this set
    pub fn complement(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::all().filter(|&l| !self.contains(l))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}
