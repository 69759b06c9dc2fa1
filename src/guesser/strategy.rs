//! Letter selection strategies
//!
//! Defines the Guesser trait and concrete implementations.

use crate::core::{Letter, LetterSet};
use crate::predictor::Predictor;
use rand::Rng;
use rand::seq::SliceRandom;

/// A strategy for choosing the next letter
pub trait Guesser {
    /// Select a letter not yet in `guessed`
    ///
    /// Returns `None` only when every letter has been guessed.
    fn next_guess(&self, guessed: &LetterSet) -> Option<Letter>;

    /// Short label for reports
    fn name(&self) -> &'static str;
}

impl Guesser for Predictor {
    fn next_guess(&self, guessed: &LetterSet) -> Option<Letter> {
        self.best_guess(guessed)
    }

    fn name(&self) -> &'static str {
        "Frequency AI"
    }
}

/// Random baseline
///
/// Shuffles the alphabet once and then tries letters in that order, skipping
/// any already guessed. Create a fresh one per round.
#[derive(Debug, Clone)]
pub struct RandomGuesser {
    order: Vec<Letter>,
}

impl RandomGuesser {
    /// Shuffle with the given RNG
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut order: Vec<Letter> = Letter::all().collect();
        order.shuffle(rng);
        Self { order }
    }

    /// Shuffle with the thread-local RNG
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(&mut rand::rng())
    }
}

impl Default for RandomGuesser {
    fn default() -> Self {
        Self::new()
    }
}

impl Guesser for RandomGuesser {
    fn next_guess(&self, guessed: &LetterSet) -> Option<Letter> {
        self.order.iter().copied().find(|&l| !guessed.contains(l))
    }

    fn name(&self) -> &'static str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ALPHABET_LEN;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    /// Letters the guesser tries, in order, when every guess is accepted
    fn tried_order(guesser: &RandomGuesser) -> Vec<Letter> {
        let mut guessed = LetterSet::new();
        let mut order = Vec::new();
        while let Some(next) = guesser.next_guess(&guessed) {
            guessed.insert(next);
            order.push(next);
        }
        order
    }

    #[test]
    fn random_order_is_a_permutation() {
        let guesser = RandomGuesser::with_rng(&mut StdRng::seed_from_u64(7));
        let order = tried_order(&guesser);
        let set: LetterSet = order.iter().copied().collect();
        assert_eq!(order.len(), ALPHABET_LEN);
        assert_eq!(set.len(), ALPHABET_LEN);
    }

    #[test]
    fn random_follows_its_order_skipping_guessed() {
        let guesser = RandomGuesser::with_rng(&mut StdRng::seed_from_u64(42));
        let order = tried_order(&guesser);

        let mut guessed = LetterSet::new();
        assert_eq!(guesser.next_guess(&guessed), Some(order[0]));

        guessed.insert(order[0]);
        guessed.insert(order[1]);
        assert_eq!(guesser.next_guess(&guessed), Some(order[2]));

        // Letters guessed out of order are skipped too
        let mut guessed = LetterSet::new();
        guessed.insert(order[1]);
        guessed.insert(order[0]);
        guessed.insert(order[3]);
        assert_eq!(guesser.next_guess(&guessed), Some(order[2]));
    }

    #[test]
    fn random_exhausts_after_all_letters() {
        let guesser = RandomGuesser::new();
        let all: LetterSet = Letter::all().collect();
        assert_eq!(guesser.next_guess(&all), None);
    }

    #[test]
    fn same_seed_same_order() {
        let a = RandomGuesser::with_rng(&mut StdRng::seed_from_u64(3));
        let b = RandomGuesser::with_rng(&mut StdRng::seed_from_u64(3));
        assert_eq!(tried_order(&a), tried_order(&b));
    }

    #[test]
    fn predictor_as_guesser() {
        let predictor = Predictor::from_corpus(["eee", "ta"]);
        assert_eq!(predictor.next_guess(&LetterSet::new()), Some(letter('e')));
        assert_eq!(predictor.name(), "Frequency AI");
    }
}
