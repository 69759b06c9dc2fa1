//! Human play mode
//!
//! The player guesses a randomly chosen word one letter at a time.

use super::Session;
use super::input::prompt_line;
use crate::core::{GameStatus, GuessError, GuessOutcome, Letter};
use crate::output::{print_banner, print_board};
use anyhow::{Result, bail};
use colored::Colorize;
use rand::Rng;
use std::io::BufRead;

/// Outcome of a finished human round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayResult {
    pub word: String,
    pub won: bool,
    pub wrong: usize,
    pub guesses: usize,
}

/// Play one round, reading guesses from `input`
///
/// Invalid or repeated guesses are reported and the turn is retried.
/// Typing `quit` or reaching end of input abandons the round and returns
/// `Ok(None)`.
///
/// # Errors
///
/// Returns an error if the word list is empty or reading input fails.
pub fn run_play<B, R>(
    input: &mut B,
    session: &Session<'_>,
    rng: &mut R,
) -> Result<Option<PlayResult>>
where
    B: BufRead + ?Sized,
    R: Rng + ?Sized,
{
    let Some(mut game) = session.random_game(rng) else {
        bail!("No words available to play with");
    };

    print_banner("🎮 HANGMAN - You vs the word list");
    println!("Word length: {} letters", game.secret().len());
    println!("Guess the word letter by letter! Type 'quit' to give up.");

    loop {
        print_board(&game);

        if game.is_over() {
            break;
        }

        let Some(line) = prompt_line(input, "\nGuess a letter")? else {
            println!("\nInput closed. The word was: {}", game.secret());
            return Ok(None);
        };

        if matches!(line.to_lowercase().as_str(), "quit" | "exit") {
            println!("\nGiving up. The word was: {}", game.secret());
            return Ok(None);
        }

        let letter = match Letter::parse(&line) {
            Ok(letter) => letter,
            Err(e) => {
                println!("{}", format!("❌ {e}").red());
                continue;
            }
        };

        match game.apply_guess(letter) {
            Ok(GuessOutcome::Hit) => {
                println!("{}", format!("✓ Good guess! '{letter}' is in the word!").green());
            }
            Ok(GuessOutcome::Miss) => {
                println!("{}", format!("✗ Sorry, '{letter}' is not in the word.").yellow());
            }
            Err(e @ GuessError::AlreadyGuessed(_)) => {
                println!("{}", format!("❌ {e}").red());
            }
            Err(GuessError::GameOver(_)) => break,
        }
    }

    let won = game.status() == GameStatus::Won;
    if won {
        println!("\n{}", "🎉 YOU WIN! 🎉".bright_green().bold());
        println!("The word was: {}", game.secret());
    } else {
        println!(
            "\n{} The word was: {}",
            "💀 GAME OVER!".red().bold(),
            game.secret()
        );
    }

    Ok(Some(PlayResult {
        word: game.secret().text().to_string(),
        won,
        wrong: game.wrong(),
        guesses: game.guessed().len(),
    }))
}
