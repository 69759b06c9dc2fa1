//! Letter-frequency predictor
//!
//! Scores the alphabet by how often each letter occurs in a reference corpus
//! and always suggests the most frequent letter not yet guessed.

mod frequency;
pub mod model;

pub use frequency::{LetterFrequencyTable, Predictor};
pub use model::{LoadedModel, ModelData, ModelError, ModelOrigin, load_predictor, save_predictor};
