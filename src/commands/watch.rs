//! Watch an automated guesser play
//!
//! Plays a number of rounds on random words and collects win and miss
//! statistics.

use super::Session;
use crate::core::GuessOutcome;
use crate::guesser::{Guesser, play_round};
use crate::output::formatters::{percentage, spaced};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

/// Aggregate results of a watch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchResult {
    pub guesser: &'static str,
    pub games: usize,
    pub wins: usize,
    pub total_wrong: usize,
}

impl WatchResult {
    #[must_use]
    pub const fn losses(&self) -> usize {
        self.games - self.wins
    }

    /// Win rate in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        percentage(self.wins, self.games)
    }

    #[must_use]
    pub fn average_wrong(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_wrong as f64 / self.games as f64
        }
    }
}

/// Let `guesser` play `count` rounds on words drawn from `session`
///
/// With `verbose` every guess is printed; otherwise a progress bar is shown.
pub fn run_watch<G, R>(
    guesser: &G,
    session: &Session<'_>,
    count: usize,
    verbose: bool,
    rng: &mut R,
) -> WatchResult
where
    G: Guesser + ?Sized,
    R: Rng + ?Sized,
{
    let pb = if verbose {
        ProgressBar::hidden()
    } else {
        progress_bar(count as u64)
    };

    let name = guesser.name();
    let mut result = WatchResult {
        guesser: name,
        games: 0,
        wins: 0,
        total_wrong: 0,
    };

    for game_num in 1..=count {
        let Some(game) = session.random_game(rng) else {
            break;
        };

        if verbose {
            println!("\n--- Game {game_num}/{count} ---");
            println!(
                "Secret word: {} ({} letters)",
                "*".repeat(game.secret().len()),
                game.secret().len()
            );
        }

        let max_wrong = game.max_wrong();
        let report = play_round(guesser, game, |turn| {
            if !verbose {
                return;
            }
            match turn.outcome {
                GuessOutcome::Hit => println!(
                    "  {name} guessed '{}' {} → {}",
                    turn.letter,
                    "✓".green(),
                    spaced(&turn.revealed)
                ),
                GuessOutcome::Miss => println!(
                    "  {name} guessed '{}' {} (Wrong: {}/{max_wrong})",
                    turn.letter,
                    "✗".red(),
                    turn.wrong
                ),
            }
        });

        if verbose {
            if report.won() {
                println!("{}", format!("✓ WIN! Word: {}", report.word).green());
            } else {
                println!("{}", format!("✗ LOST! Word was: {}", report.word).red());
            }
        }

        result.games += 1;
        result.total_wrong += report.wrong;
        if report.won() {
            result.wins += 1;
        }

        pb.set_message(format!("Wins: {}", result.wins));
        pb.inc(1);
    }

    pb.finish_and_clear();
    result
}

pub(crate) fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
