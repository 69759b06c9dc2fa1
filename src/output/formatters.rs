//! Formatting utilities for terminal output

use crate::core::LetterSet;

/// Number of drawing stages between an empty gallows and a full figure
pub const GALLOWS_STAGES: usize = 6;

/// Draw the gallows for `wrong` misses out of `max_wrong`
///
/// The figure gains one body part per stage; limits other than six are
/// scaled onto the six stages.
#[must_use]
pub fn gallows(wrong: usize, max_wrong: usize) -> String {
    let stage = if max_wrong == 0 {
        GALLOWS_STAGES
    } else {
        (wrong.min(max_wrong) * GALLOWS_STAGES) / max_wrong
    };

    let head = if stage >= 1 { "O" } else { "" };
    let torso = match stage {
        0 | 1 => "",
        2 => " |",
        3 => "/|",
        _ => "/|\\",
    };
    let legs = match stage {
        0..=4 => "",
        5 => "/",
        _ => "/ \\",
    };

    format!(
        "   ------\n   |    |\n   |    {head}\n   |   {torso}\n   |   {legs}\n   |\n--------"
    )
}

/// Space out a revealed word for readability: `_an__an` becomes `_ a n _ _ a n`
#[must_use]
pub fn spaced(revealed: &str) -> String {
    let mut out = String::with_capacity(revealed.len() * 2);
    for (i, c) in revealed.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Guessed letters in alphabetical order, or "none"
#[must_use]
pub fn guessed_list(guessed: &LetterSet) -> String {
    if guessed.is_empty() {
        return "none".to_string();
    }
    let letters: Vec<String> = guessed.iter().map(|l| l.to_string()).collect();
    letters.join(" ")
}

/// `part / whole` as a percentage, 0 when `whole` is 0
#[must_use]
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
