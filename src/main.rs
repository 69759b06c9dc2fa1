//! Hangman AI - CLI
//!
//! Menu-driven Hangman with a letter-frequency guesser and a random baseline.

use anyhow::Result;
use clap::builder::TypedValueParser as _;
use clap::{Parser, Subcommand};
use colored::Colorize;
use hangman_ai::{
    commands::{
        BattlePairing, GameConfig, Session, run_battle, run_menu, run_play, run_train, run_watch,
    },
    core::MAX_WRONG,
    predictor::{LoadedModel, ModelError, ModelOrigin, load_predictor},
    output::{print_banner, print_battle_result, print_train_summary, print_watch_result},
    wordlists::load_words,
};
use std::io;
use std::process::ExitCode;

/// Rounds the battle plays unless told otherwise
const DEFAULT_BATTLE_GAMES: usize = 20;

#[derive(Parser)]
#[command(
    name = "hangman_ai",
    about = "Hangman with a letter-frequency AI: play, watch it play, or race it against random guessing",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Model file with letter counts (see `train`)
    #[arg(short, long, global = true, default_value = "hangman_model.json")]
    model: String,

    /// Preferred word list for secret words
    #[arg(short = 'w', long, global = true, default_value = "data/test.txt")]
    words: String,

    /// Fallback word list; also the corpus for legacy models and `train`
    #[arg(short, long, global = true, default_value = "data/corpus.txt")]
    corpus: String,

    /// Wrong guesses allowed per round
    #[arg(long, global = true, default_value_t = MAX_WRONG,
          value_parser = clap::value_parser!(u8).range(1..=26).map(usize::from))]
    max_wrong: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Count letters in the corpus and write a model file
    Train {
        /// Where to write the model (defaults to --model)
        #[arg(short, long)]
        output: Option<String>,
    },

    #[command(flatten)]
    Game(GameCommand),
}

/// Commands that need a loaded model and word list
#[derive(Subcommand)]
enum GameCommand {
    /// Numbered interactive menu (default)
    Menu {
        /// Rounds played by the battle entry
        #[arg(short = 'n', long, default_value_t = DEFAULT_BATTLE_GAMES)]
        battle_games: usize,
    },

    /// Play one round yourself
    Play,

    /// Watch the AI play several rounds
    Watch {
        /// Number of rounds
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,

        /// Only show the summary and a progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Compare the AI with a random guesser
    Battle {
        /// Number of rounds per guesser
        #[arg(short = 'n', long, default_value_t = DEFAULT_BATTLE_GAMES)]
        count: usize,

        /// Give both guessers the same word each round
        #[arg(long)]
        same_word: bool,
    },

    /// Watch a single AI round
    Demo,
}

fn main() -> Result<ExitCode> {
    let mut cli = Cli::parse();

    // Default to the menu if no command given
    let command = cli
        .command
        .take()
        .unwrap_or(Commands::Game(GameCommand::Menu {
            battle_games: DEFAULT_BATTLE_GAMES,
        }));

    match command {
        Commands::Train { output } => {
            let output = output.unwrap_or_else(|| cli.model.clone());
            let summary = run_train(&cli.corpus, &output)?;
            print_train_summary(&summary);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Game(game_command) => run_game_command(game_command, &cli),
    }
}

fn run_game_command(command: GameCommand, cli: &Cli) -> Result<ExitCode> {
    print_banner("🎲 HANGMAN AI");

    println!("\nLoading AI model...");
    let Some(loaded) = load_model(&cli.model, &cli.corpus) else {
        return Ok(ExitCode::FAILURE);
    };

    println!("Loading word list...");
    let (words, source) = load_words(&cli.words, &cli.corpus);
    println!("✓ Loaded {} words from {source}", words.len());

    let config = GameConfig::new(cli.max_wrong);
    let session = Session::new(&loaded.predictor, &words, config);
    let mut rng = rand::rng();

    match command {
        GameCommand::Menu { battle_games } => {
            run_menu(&mut io::stdin().lock(), &session, battle_games, &mut rng)?;
        }
        GameCommand::Play => {
            run_play(&mut io::stdin().lock(), &session, &mut rng)?;
        }
        GameCommand::Watch { count, quiet } => {
            print_banner("🤖 AI PLAYING HANGMAN");
            let result = run_watch(&loaded.predictor, &session, count, !quiet, &mut rng);
            print_watch_result(&result);
        }
        GameCommand::Battle { count, same_word } => {
            print_banner("⚔️  AI vs RANDOM GUESSER");
            let pairing = if same_word {
                BattlePairing::SameWord
            } else {
                BattlePairing::Independent
            };
            let result = run_battle(&session, count, pairing, &mut rng);
            print_battle_result(&result);
        }
        GameCommand::Demo => {
            print_banner("🤖 QUICK DEMO");
            let result = run_watch(&loaded.predictor, &session, 1, true, &mut rng);
            print_watch_result(&result);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Load the predictor, explaining failures instead of aborting
fn load_model(model: &str, corpus: &str) -> Option<LoadedModel> {
    match load_predictor(model, corpus) {
        Ok(loaded) => {
            if loaded.origin.is_legacy() {
                println!("Converting legacy model format...");
            }
            if let ModelOrigin::LegacyCorpus { words } = loaded.origin {
                println!("Rebuilt letter counts from {words} corpus words");
            }
            println!(
                "✓ Model ready ({} letters counted)",
                loaded.predictor.table().total()
            );
            Some(loaded)
        }
        Err(e @ ModelError::NotFound(_)) => {
            eprintln!("{}", format!("ERROR: {e}").red().bold());
            eprintln!("Create one with: hangman_ai train --corpus {corpus} --model {model}");
            None
        }
        Err(e) => {
            eprintln!("{}", format!("ERROR: {e}").red().bold());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn max_wrong_defaults_and_range() {
        let cli = Cli::try_parse_from(["hangman_ai", "demo"]).unwrap();
        assert_eq!(cli.max_wrong, MAX_WRONG);

        let cli = Cli::try_parse_from(["hangman_ai", "--max-wrong", "10", "demo"]).unwrap();
        assert_eq!(cli.max_wrong, 10);

        assert!(Cli::try_parse_from(["hangman_ai", "--max-wrong", "0"]).is_err());
        assert!(Cli::try_parse_from(["hangman_ai", "--max-wrong", "27"]).is_err());
    }

    #[test]
    fn battle_counts_share_one_default() {
        let cli = Cli::try_parse_from(["hangman_ai", "battle"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Game(GameCommand::Battle { count: DEFAULT_BATTLE_GAMES, .. }))
        ));

        let cli = Cli::try_parse_from(["hangman_ai", "menu"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Game(GameCommand::Menu { battle_games: DEFAULT_BATTLE_GAMES }))
        ));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["hangman_ai"]).unwrap();
        assert!(cli.command.is_none());
    }
}
