//! Word lists for Hangman
//!
//! Secret words come from the first available source: a preferred file, a
//! secondary file, or the list embedded in the binary.

mod embedded;
pub mod loader;

use crate::core::SecretWord;
use std::fmt;
use std::path::{Path, PathBuf};

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

/// Where a word list was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Preferred(PathBuf),
    Secondary(PathBuf),
    Embedded,
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preferred(path) | Self::Secondary(path) => write!(f, "{}", path.display()),
            Self::Embedded => write!(f, "built-in list"),
        }
    }
}

fn read_non_empty(path: &Path) -> Option<Vec<SecretWord>> {
    loader::load_from_file(path)
        .ok()
        .filter(|words| !words.is_empty())
}

/// Load secret words, falling back from `preferred` to `secondary` to the
/// embedded defaults
///
/// Files that cannot be read or contain no valid words are skipped.
///
/// # Examples
/// ```
/// use hangman_ai::wordlists::{load_words, WordSource};
///
/// let (words, source) = load_words("no/such/file.txt", "no/such/corpus.txt");
/// assert_eq!(source, WordSource::Embedded);
/// assert!(!words.is_empty());
/// ```
pub fn load_words<P, Q>(preferred: P, secondary: Q) -> (Vec<SecretWord>, WordSource)
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let preferred = preferred.as_ref();
    let secondary = secondary.as_ref();

    if let Some(words) = read_non_empty(preferred) {
        return (words, WordSource::Preferred(preferred.to_path_buf()));
    }
    if let Some(words) = read_non_empty(secondary) {
        return (words, WordSource::Secondary(secondary.to_path_buf()));
    }

    (loader::words_from_slice(DEFAULT_WORDS), WordSource::Embedded)
}
