//! Numbered main menu

use super::Session;
use super::battle::{BattlePairing, run_battle};
use super::input::prompt_line;
use super::play::run_play;
use super::watch::run_watch;
use crate::output::{print_banner, print_battle_result, print_watch_result};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::BufRead;

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Watch(usize),
    Battle,
    Demo,
    Exit,
}

impl MenuChoice {
    /// Map the typed option number to a choice
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Play),
            "2" => Some(Self::Watch(5)),
            "3" => Some(Self::Watch(20)),
            "4" => Some(Self::Battle),
            "5" => Some(Self::Demo),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn print_menu() {
    print_banner("MAIN MENU");
    println!("1. Play Hangman (You vs the word list)");
    println!("2. Watch AI Play (5 games)");
    println!("3. Watch AI Play (20 games)");
    println!("4. AI Battle (Frequency vs Random)");
    println!("5. Quick Demo (1 AI game)");
    println!("6. Exit");
    println!("{}", "═".repeat(50).cyan());
}

/// Run the menu until the user exits or input ends
///
/// `battle_games` sets how many rounds the battle entry plays.
///
/// # Errors
///
/// Returns an error if reading input fails.
pub fn run_menu<B, R>(
    input: &mut B,
    session: &Session<'_>,
    battle_games: usize,
    rng: &mut R,
) -> Result<()>
where
    B: BufRead + ?Sized,
    R: Rng + ?Sized,
{
    loop {
        print_menu();

        let Some(line) = prompt_line(input, "\nSelect option (1-6)")? else {
            break;
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Play) => {
                run_play(input, session, rng)?;
            }
            Some(MenuChoice::Watch(count)) => {
                print_banner("🤖 AI PLAYING HANGMAN");
                let result = run_watch(session.predictor, session, count, true, rng);
                print_watch_result(&result);
            }
            Some(MenuChoice::Battle) => {
                print_banner("⚔️  AI vs RANDOM GUESSER");
                let result = run_battle(session, battle_games, BattlePairing::Independent, rng);
                print_battle_result(&result);
            }
            Some(MenuChoice::Demo) => {
                print_banner("🤖 QUICK DEMO");
                let result = run_watch(session.predictor, session, 1, true, rng);
                print_watch_result(&result);
            }
            Some(MenuChoice::Exit) => break,
            None => println!("{}", "❌ Invalid choice. Please select 1-6.".red()),
        }
    }

    println!("\n👋 Thanks for playing!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::GameConfig;
    use crate::commands::test_support::{predictor, words};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    #[test]
    fn parses_menu_options() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Play));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::Watch(5)));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Watch(20)));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Battle));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Demo));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("play"), None);
    }

    #[test]
    fn scripted_session_runs_every_mode() {
        let predictor = predictor();
        let words = words(&["go"]);
        let session = Session::new(&predictor, &words, GameConfig::default());

        // bad choice, play a won round, demo, watch 5, battle, exit
        let script = "9\n1\ng\no\n5\n2\n4\n6\nnever read\n";
        let mut input = Cursor::new(script);

        run_menu(&mut input, &session, 3, &mut StdRng::seed_from_u64(4)).unwrap();

        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "never read\n");
    }

    #[test]
    fn eof_exits_cleanly() {
        let predictor = predictor();
        let words = words(&["go"]);
        let session = Session::new(&predictor, &words, GameConfig::default());
        let mut input = Cursor::new("");
        assert!(run_menu(&mut input, &session, 1, &mut rand::rng()).is_ok());
    }
}
