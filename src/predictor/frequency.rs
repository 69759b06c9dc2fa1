//! Frequency table and the predictor built on top of it

use crate::core::{ALPHABET_LEN, Letter, LetterSet};
use rand::seq::IteratorRandom;
use rustc_hash::FxHashMap;

/// Occurrence count of each letter across a corpus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFrequencyTable {
    counts: [u64; ALPHABET_LEN],
}

impl LetterFrequencyTable {
    /// Count every letter occurrence across `words`, case-insensitively
    ///
    /// Characters outside `a-z` are ignored.
    ///
    /// # Examples
    /// ```
    /// use hangman_ai::core::Letter;
    /// use hangman_ai::predictor::LetterFrequencyTable;
    ///
    /// let table = LetterFrequencyTable::from_words(["cat", "car", "Can"]);
    /// assert_eq!(table.count(Letter::new('c').unwrap()), 3);
    /// assert_eq!(table.count(Letter::new('t').unwrap()), 1);
    /// assert_eq!(table.total(), 9);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for word in words {
            for c in word.as_ref().chars() {
                if let Ok(letter) = Letter::new(c) {
                    table.counts[letter.index()] += 1;
                }
            }
        }
        table
    }

    /// Build a table from explicit `(letter, count)` pairs
    ///
    /// Later pairs for the same letter are added to earlier ones. Returns
    /// `None` if the counts add up to more than `u64::MAX`.
    pub fn from_counts<I>(counts: I) -> Option<Self>
    where
        I: IntoIterator<Item = (Letter, u64)>,
    {
        let mut table = Self::default();
        let mut total: u64 = 0;
        for (letter, count) in counts {
            total = total.checked_add(count)?;
            // Bounded by `total`
            table.counts[letter.index()] += count;
        }
        Some(table)
    }

    #[inline]
    #[must_use]
    pub const fn count(&self, letter: Letter) -> u64 {
        self.counts[letter.index()]
    }

    /// Sum of all 26 counts
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// `(letter, count)` for every letter, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (Letter, u64)> + '_ {
        Letter::all().map(|l| (l, self.count(l)))
    }
}

/// Suggests the next letter to guess from a fixed frequency table
///
/// Read-only after construction; one instance can serve any number of rounds.
#[derive(Debug, Clone)]
pub struct Predictor {
    table: LetterFrequencyTable,
}

impl Predictor {
    #[must_use]
    pub const fn new(table: LetterFrequencyTable) -> Self {
        Self { table }
    }

    /// Build a predictor by scanning a corpus of words
    pub fn from_corpus<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(LetterFrequencyTable::from_words(words))
    }

    #[must_use]
    pub const fn table(&self) -> &LetterFrequencyTable {
        &self.table
    }

    /// Probability of each letter, with guessed letters forced to zero
    ///
    /// Probabilities are `count / total`; an empty table uses a total of 1
    /// so every score is zero rather than NaN.
    #[must_use]
    pub fn score_letters(&self, guessed: &LetterSet) -> FxHashMap<Letter, f64> {
        let total = match self.table.total() {
            0 => 1.0,
            n => n as f64,
        };

        self.table
            .iter()
            .map(|(letter, count)| {
                let p = if guessed.contains(letter) {
                    0.0
                } else {
                    count as f64 / total
                };
                (letter, p)
            })
            .collect()
    }

    /// Highest-scoring letter not in `guessed`
    ///
    /// Ties go to the alphabetically first letter. When the table is empty
    /// the choice is uniformly random among unguessed letters. Returns `None`
    /// only if all 26 letters have been guessed.
    ///
    /// # Examples
    /// ```
    /// use hangman_ai::core::LetterSet;
    /// use hangman_ai::predictor::Predictor;
    ///
    /// let predictor = Predictor::from_corpus(["banana", "bandana"]);
    /// assert_eq!(predictor.best_guess(&LetterSet::new()).unwrap().as_char(), 'a');
    /// ```
    #[must_use]
    pub fn best_guess(&self, guessed: &LetterSet) -> Option<Letter> {
        if guessed.is_full() {
            return None;
        }
        if self.table.is_empty() {
            return guessed.complement().choose(&mut rand::rng());
        }

        let scores = self.score_letters(guessed);

        guessed
            .complement()
            .fold(None, |best: Option<(Letter, f64)>, letter| {
                let score = scores.get(&letter).copied().unwrap_or(0.0);
                match best {
                    Some((_, best_score)) if best_score >= score => best,
                    _ => Some((letter, score)),
                }
            })
            .map(|(letter, _)| letter)
    }
}
