//! Display functions for command results

use super::formatters::{create_progress_bar, gallows, guessed_list, percentage, spaced};
use crate::commands::{BattleResult, TrainSummary, WatchResult};
use crate::core::GameState;
use colored::Colorize;

/// Print a section banner
pub fn print_banner(title: &str) {
    println!("\n{}", "═".repeat(50).cyan());
    println!("{}", title.bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());
}

/// Print the gallows, masked word and guess summary for a round in progress
pub fn print_board(game: &GameState) {
    println!("\n{}", gallows(game.wrong(), game.max_wrong()));
    println!("\nWord: {}", spaced(&game.reveal()).bright_white().bold());
    println!(
        "Wrong guesses: {}/{} ({} left)",
        game.wrong(),
        game.max_wrong(),
        game.remaining_misses()
    );
    println!("Guessed letters: {}", guessed_list(game.guessed()));
}

/// Print aggregate statistics after watching automated games
pub fn print_watch_result(result: &WatchResult) {
    print_banner(&format!("{} PERFORMANCE SUMMARY", result.guesser.to_uppercase()));

    println!("Games: {}", result.games);
    println!(
        "Wins: {} {}",
        result.wins,
        format!("({:.1}%)", result.win_rate()).green()
    );
    println!("Losses: {}", result.losses());
    println!(
        "Avg wrong guesses: {}",
        format!("{:.2}", result.average_wrong()).bright_yellow()
    );
    println!("{}", "═".repeat(50).cyan());
}

/// Print the outcome of a frequency-vs-random comparison
pub fn print_battle_result(result: &BattleResult) {
    println!("\nResults after {} games:", result.games);

    for tally in [&result.ai, &result.random] {
        let rate = percentage(tally.wins, result.games);
        println!(
            "  {:<14} wins: {:>4} ({:5.1}%) {}  avg misses {:.2}",
            tally.name,
            tally.wins,
            rate,
            create_progress_bar(rate, 100.0, 20).green(),
            tally.average_wrong(result.games)
        );
    }

    let margin = result.ai.wins as i64 - result.random.wins as i64;
    let verdict = format!("Margin: {margin:+} wins");
    let verdict = match margin {
        m if m > 0 => verdict.green(),
        0 => verdict.yellow(),
        _ => verdict.red(),
    };
    println!("  {verdict}");
    println!("{}", "═".repeat(50).cyan());
}

/// Print what `train` wrote
pub fn print_train_summary(summary: &TrainSummary) {
    print_banner("MODEL TRAINED");

    println!("Corpus words:   {}", summary.words);
    println!("Letters seen:   {}", summary.total_letters);
    println!("Saved to:       {}", summary.output.display());

    if !summary.top_letters.is_empty() {
        println!("\n📈 {}", "Most frequent letters".bright_cyan().bold());
        let max = summary.top_letters[0].1 as f64;
        for (letter, count) in &summary.top_letters {
            let share = percentage(*count as usize, summary.total_letters as usize);
            println!(
                "  {letter}: {} {count:6} ({share:4.1}%)",
                create_progress_bar(*count as f64, max, 30).green()
            );
        }
    }
}
