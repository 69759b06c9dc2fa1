//! Command implementations
//!
//! Every mode receives the predictor, word list and settings it needs through
//! a [`Session`]; nothing is global.

pub mod battle;
mod input;
pub mod menu;
pub mod play;
pub mod train;
pub mod watch;

pub use battle::{BattlePairing, BattleResult, GuesserTally, run_battle};
pub use menu::run_menu;
pub use play::{PlayResult, run_play};
pub use train::{TrainSummary, run_train};
pub use watch::{WatchResult, run_watch};

use crate::core::{GameState, MAX_WRONG, SecretWord};
use crate::predictor::Predictor;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Settings shared by every round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_wrong: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_wrong: usize) -> Self {
        Self { max_wrong }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MAX_WRONG)
    }
}

/// Resources loaded at startup and handed to each mode
pub struct Session<'a> {
    pub predictor: &'a Predictor,
    pub words: &'a [SecretWord],
    pub config: GameConfig,
}

impl<'a> Session<'a> {
    #[must_use]
    pub const fn new(
        predictor: &'a Predictor,
        words: &'a [SecretWord],
        config: GameConfig,
    ) -> Self {
        Self {
            predictor,
            words,
            config,
        }
    }

    /// Fresh round with a uniformly chosen secret word
    ///
    /// Returns `None` if the word list is empty.
    pub fn random_game<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<GameState> {
        self.words
            .choose(rng)
            .map(|word| GameState::with_max_wrong(word.clone(), self.config.max_wrong))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    pub fn words(list: &[&str]) -> Vec<SecretWord> {
        words_from_slice(list)
    }

    pub fn predictor() -> Predictor {
        Predictor::from_corpus(["python", "hangman", "machine", "learning", "algorithm"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_config_uses_six_misses() {
        assert_eq!(GameConfig::default().max_wrong, 6);
    }

    #[test]
    fn random_game_picks_from_list() {
        let predictor = test_support::predictor();
        let words = test_support::words(&["go", "python"]);
        let session = Session::new(&predictor, &words, GameConfig::new(4));
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..20 {
            let game = session.random_game(&mut rng).unwrap();
            assert!(words.contains(game.secret()));
            assert_eq!(game.max_wrong(), 4);
            assert!(game.guessed().is_empty());
        }
    }

    #[test]
    fn random_game_empty_list() {
        let predictor = test_support::predictor();
        let session = Session::new(&predictor, &[], GameConfig::default());
        assert!(session.random_game(&mut rand::rng()).is_none());
    }
}
