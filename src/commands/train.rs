//! Build a model file from a word corpus

use crate::core::Letter;
use crate::predictor::{Predictor, save_predictor};
use crate::wordlists::loader::load_corpus;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// How many letters the summary lists
const TOP_LETTERS: usize = 10;

/// What was learned and where it was written
#[derive(Debug, Clone)]
pub struct TrainSummary {
    pub words: usize,
    pub total_letters: u64,
    pub top_letters: Vec<(Letter, u64)>,
    pub output: PathBuf,
}

/// Count letters in `corpus_path` and save the model to `output`
///
/// # Errors
///
/// Returns an error if the corpus cannot be read or the model cannot be
/// written.
pub fn run_train<P, Q>(corpus_path: P, output: Q) -> Result<TrainSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let corpus_path = corpus_path.as_ref();
    let output = output.as_ref();

    let corpus = load_corpus(corpus_path)
        .with_context(|| format!("Failed to read corpus {}", corpus_path.display()))?;

    let predictor = Predictor::from_corpus(&corpus);
    save_predictor(&predictor, output)?;

    let table = predictor.table();
    let mut top_letters: Vec<(Letter, u64)> = table.iter().filter(|&(_, c)| c > 0).collect();
    top_letters.sort_by_key(|&(_, count)| std::cmp::Reverse(count));
    top_letters.truncate(TOP_LETTERS);

    Ok(TrainSummary {
        words: corpus.len(),
        total_letters: table.total(),
        top_letters,
        output: output.to_path_buf(),
    })
}
