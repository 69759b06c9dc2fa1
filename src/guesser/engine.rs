//! Automated round driver

use super::strategy::Guesser;
use crate::core::{GameState, GameStatus, GuessOutcome, Letter};

/// One accepted guess and the board after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub letter: Letter,
    pub outcome: GuessOutcome,
    pub revealed: String,
    pub wrong: usize,
}

/// Summary of a finished round
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub word: String,
    pub status: GameStatus,
    pub wrong: usize,
    pub turns: Vec<Turn>,
}

impl RoundReport {
    #[must_use]
    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// Let `guesser` play `game` until it is won or lost
///
/// `on_turn` is called after every accepted guess. The loop also stops if
/// the guesser runs out of letters or repeats one, which leaves the round
/// in progress.
pub fn play_round<G, F>(guesser: &G, mut game: GameState, mut on_turn: F) -> RoundReport
where
    G: Guesser + ?Sized,
    F: FnMut(&Turn),
{
    let mut turns = Vec::new();

    while !game.is_over() {
        let Some(letter) = guesser.next_guess(game.guessed()) else {
            break;
        };
        let Ok(outcome) = game.apply_guess(letter) else {
            break;
        };

        let turn = Turn {
            letter,
            outcome,
            revealed: game.reveal(),
            wrong: game.wrong(),
        };
        on_turn(&turn);
        turns.push(turn);
    }

    RoundReport {
        word: game.secret().text().to_string(),
        status: game.status(),
        wrong: game.wrong(),
        turns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterSet, MAX_WRONG, SecretWord};
    use crate::guesser::RandomGuesser;
    use crate::predictor::Predictor;

    fn game(word: &str) -> GameState {
        GameState::new(SecretWord::new(word).unwrap())
    }

    struct Fixed(&'static str);

    impl Guesser for Fixed {
        fn next_guess(&self, guessed: &LetterSet) -> Option<Letter> {
            self.0
                .chars()
                .filter_map(|c| Letter::new(c).ok())
                .find(|&l| !guessed.contains(l))
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[test]
    fn fixed_order_wins_go() {
        let report = play_round(&Fixed("go"), game("go"), |_| {});
        assert!(report.won());
        assert_eq!(report.wrong, 0);
        assert_eq!(report.turns.len(), 2);
        assert_eq!(report.turns[0].revealed, "g_");
        assert_eq!(report.turns[1].revealed, "go");
    }

    #[test]
    fn fixed_order_loses_go() {
        let report = play_round(&Fixed("xyzqwego"), game("go"), |_| {});
        assert_eq!(report.status, GameStatus::Lost);
        assert_eq!(report.wrong, MAX_WRONG);
        assert_eq!(report.turns.len(), 6);
        assert!(report.turns.iter().all(|t| t.outcome == GuessOutcome::Miss));
    }

    #[test]
    fn callback_sees_every_turn() {
        let mut seen = Vec::new();
        let report = play_round(&Fixed("abcdefghijklmnopqrstuvwxyz"), game("cab"), |t| {
            seen.push(t.letter);
        });
        assert!(report.won());
        assert_eq!(seen.len(), report.turns.len());
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn exhausted_guesser_stops() {
        let report = play_round(&Fixed("a"), game("go"), |_| {});
        assert_eq!(report.status, GameStatus::InProgress);
        assert_eq!(report.turns.len(), 1);
    }

    #[test]
    fn every_round_terminates() {
        let predictor = Predictor::from_corpus(["python", "hangman", "machine"]);
        for word in ["python", "hangman", "zzz", "quiz", "a"] {
            let ai = play_round(&predictor, game(word), |_| {});
            assert!(ai.status.is_over(), "{word}");

            let random = play_round(&RandomGuesser::new(), game(word), |_| {});
            assert!(random.status.is_over(), "{word}");
            assert!(random.wrong <= MAX_WRONG);
        }
    }

    #[test]
    fn predictor_never_repeats_a_letter() {
        let predictor = Predictor::from_corpus(["python", "hangman", "machine"]);
        let report = play_round(&predictor, game("jazz"), |_| {});
        let distinct: LetterSet = report.turns.iter().map(|t| t.letter).collect();
        assert_eq!(distinct.len(), report.turns.len());
    }
}
