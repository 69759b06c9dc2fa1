//! Frequency guesser vs random baseline
//!
//! Both guessers play the same number of rounds; the random guesser gets a
//! freshly shuffled alphabet every round.

use super::Session;
use super::watch::progress_bar;
use crate::core::GameState;
use crate::guesser::{Guesser, RandomGuesser, play_round};
use rand::Rng;

/// How secret words are assigned to the two guessers in each round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BattlePairing {
    /// Each guesser gets its own randomly drawn word
    #[default]
    Independent,
    /// Both guessers play the same word
    SameWord,
}

/// Wins and misses of one side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuesserTally {
    pub name: &'static str,
    pub wins: usize,
    pub total_wrong: usize,
}

impl GuesserTally {
    const fn new(name: &'static str) -> Self {
        Self {
            name,
            wins: 0,
            total_wrong: 0,
        }
    }

    fn record(&mut self, won: bool, wrong: usize) {
        if won {
            self.wins += 1;
        }
        self.total_wrong += wrong;
    }

    #[must_use]
    pub fn average_wrong(&self, games: usize) -> f64 {
        if games == 0 {
            0.0
        } else {
            self.total_wrong as f64 / games as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleResult {
    pub games: usize,
    pub pairing: BattlePairing,
    pub ai: GuesserTally,
    pub random: GuesserTally,
}

/// Play `count` rounds for the predictor and for a random baseline
pub fn run_battle<R: Rng + ?Sized>(
    session: &Session<'_>,
    count: usize,
    pairing: BattlePairing,
    rng: &mut R,
) -> BattleResult {
    let mut result = BattleResult {
        games: 0,
        pairing,
        ai: GuesserTally::new(session.predictor.name()),
        random: GuesserTally::new(RandomGuesser::default().name()),
    };

    let pb = progress_bar(count as u64);

    for _ in 0..count {
        let Some(ai_game) = session.random_game(rng) else {
            break;
        };
        let random_game = match pairing {
            BattlePairing::SameWord => {
                GameState::with_max_wrong(ai_game.secret().clone(), ai_game.max_wrong())
            }
            BattlePairing::Independent => match session.random_game(rng) {
                Some(game) => game,
                None => break,
            },
        };

        let ai = play_round(session.predictor, ai_game, |_| {});
        result.ai.record(ai.won(), ai.wrong);

        let baseline = RandomGuesser::with_rng(rng);
        let random = play_round(&baseline, random_game, |_| {});
        result.random.record(random.won(), random.wrong);

        result.games += 1;
        pb.set_message(format!("AI {} / Random {}", result.ai.wins, result.random.wins));
        pb.inc(1);
    }

    pb.finish_and_clear();
    result
}
