//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::SecretWord;
use std::fs;
use std::io;
use std::path::Path;

/// Normalized, non-empty lines of a text file
fn normalized_lines(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
}

/// Load secret words from a file, one per line
///
/// Lines are trimmed and lowercased; blank lines and entries containing
/// anything other than letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_ai::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/test.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<SecretWord>> {
    let content = fs::read_to_string(path)?;

    let words = normalized_lines(&content)
        .filter_map(|line| SecretWord::new(line).ok())
        .collect();

    Ok(words)
}

/// Load a raw corpus for letter counting
///
/// Unlike [`load_from_file`], entries are kept even if they contain
/// non-letters; the frequency table ignores those characters.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(normalized_lines(&content).collect())
}

/// Convert embedded string slice to `SecretWord` vector
///
/// # Examples
/// ```
/// use hangman_ai::wordlists::loader::words_from_slice;
/// use hangman_ai::wordlists::DEFAULT_WORDS;
///
/// let words = words_from_slice(DEFAULT_WORDS);
/// assert_eq!(words.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice
        .iter()
        .filter_map(|&s| SecretWord::new(s.trim()).ok())
        .collect()
}
