//! Persisted predictor model
//!
//! The model file is JSON. The current format stores the frequency table
//! directly:
//!
//! ```json
//! { "version": 1, "letter_counts": { "a": 3, "c": 3, "t": 1 } }
//! ```
//!
//! Older files have no `version` and may carry a `letter_freq` map. When
//! that map is missing, the counts are rebuilt from the corpus file at load
//! time.

use super::frequency::{LetterFrequencyTable, Predictor};
use crate::core::Letter;
use crate::wordlists::loader::load_corpus;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Version written by [`save_predictor`]
pub const MODEL_VERSION: u32 = 1;

/// Model file in the current format, as written by [`save_predictor`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedModel {
    pub version: u32,
    pub letter_counts: BTreeMap<String, u64>,
}

/// Any model file we know how to read
///
/// A file with a `version` is in the current format and must carry
/// `letter_counts`. A file without one is legacy, with an optional
/// `letter_freq` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModelData {
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub letter_counts: Option<BTreeMap<String, u64>>,
    #[serde(default)]
    pub letter_freq: Option<FxHashMap<String, u64>>,
}

/// How the loaded predictor was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelOrigin {
    /// Read from a current-format file
    Stored,
    /// Converted from the counts stored in a legacy file
    LegacyCounts,
    /// Legacy file without counts; rebuilt from this many corpus words
    LegacyCorpus { words: usize },
}

impl ModelOrigin {
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        !matches!(self, Self::Stored)
    }
}

/// A predictor together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub predictor: Predictor,
    pub origin: ModelOrigin,
}

/// Errors while reading or writing model files
#[derive(Debug)]
pub enum ModelError {
    NotFound(PathBuf),
    Io(PathBuf, io::Error),
    Parse(PathBuf, serde_json::Error),
    MissingCorpus(PathBuf),
    UnsupportedVersion(u32),
    MissingCounts,
    CountOverflow,
    Serialize(serde_json::Error),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Model file {} not found", path.display()),
            Self::Io(path, e) => write!(f, "Failed to read {}: {e}", path.display()),
            Self::Parse(path, e) => write!(f, "Model file {} is malformed: {e}", path.display()),
            Self::MissingCorpus(path) => write!(
                f,
                "Legacy model has no letter counts and corpus {} is missing",
                path.display()
            ),
            Self::UnsupportedVersion(v) => write!(
                f,
                "Model format version {v} is not supported (expected {MODEL_VERSION})"
            ),
            Self::MissingCounts => write!(f, "Model file has a version but no letter counts"),
            Self::CountOverflow => write!(f, "Model letter counts overflow"),
            Self::Serialize(e) => write!(f, "Failed to serialize model: {e}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, e) => Some(e),
            Self::Parse(_, e) | Self::Serialize(e) => Some(e),
            Self::NotFound(_)
            | Self::MissingCorpus(_)
            | Self::UnsupportedVersion(_)
            | Self::MissingCounts
            | Self::CountOverflow => None,
        }
    }
}

/// Convert a string-keyed count map, skipping keys that are not single letters
fn table_from_map<'a, I>(map: I) -> Result<LetterFrequencyTable, ModelError>
where
    I: IntoIterator<Item = (&'a String, &'a u64)>,
{
    LetterFrequencyTable::from_counts(map.into_iter().filter_map(|(key, &count)| {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::new(c).ok().map(|l| (l, count)),
            _ => None,
        }
    }))
    .ok_or(ModelError::CountOverflow)
}

impl ModelData {
    /// Parse model JSON
    ///
    /// # Errors
    /// Returns the `serde_json` error for input that is not a JSON object or
    /// whose fields have the wrong types, such as a negative count.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom("model file must be a JSON object"));
        }
        serde_json::from_value(value)
    }

    /// Build a predictor from whichever format was loaded
    ///
    /// Only a legacy file without counts touches `corpus_path`.
    ///
    /// # Errors
    /// Returns `ModelError::UnsupportedVersion` for a version other than
    /// [`MODEL_VERSION`], `ModelError::MissingCounts` for a versioned file
    /// without `letter_counts`, `ModelError::CountOverflow` if the counts
    /// sum past `u64::MAX`, and `ModelError::MissingCorpus` or
    /// `ModelError::Io` when a needed corpus cannot be read.
    pub fn into_predictor(self, corpus_path: &Path) -> Result<LoadedModel, ModelError> {
        match self {
            Self {
                version: Some(MODEL_VERSION),
                letter_counts: Some(counts),
                ..
            } => Ok(LoadedModel {
                predictor: Predictor::new(table_from_map(&counts)?),
                origin: ModelOrigin::Stored,
            }),
            Self {
                version: Some(MODEL_VERSION),
                letter_counts: None,
                ..
            } => Err(ModelError::MissingCounts),
            Self {
                version: Some(version),
                ..
            } => Err(ModelError::UnsupportedVersion(version)),
            Self {
                version: None,
                letter_freq: Some(freq),
                ..
            } => Ok(LoadedModel {
                predictor: Predictor::new(table_from_map(&freq)?),
                origin: ModelOrigin::LegacyCounts,
            }),
            Self {
                version: None,
                letter_freq: None,
                ..
            } => {
                let corpus = load_corpus(corpus_path).map_err(|e| match e.kind() {
                    io::ErrorKind::NotFound => ModelError::MissingCorpus(corpus_path.to_path_buf()),
                    _ => ModelError::Io(corpus_path.to_path_buf(), e),
                })?;
                Ok(LoadedModel {
                    origin: ModelOrigin::LegacyCorpus {
                        words: corpus.len(),
                    },
                    predictor: Predictor::from_corpus(&corpus),
                })
            }
        }
    }
}

impl From<&Predictor> for SavedModel {
    fn from(predictor: &Predictor) -> Self {
        Self {
            version: MODEL_VERSION,
            letter_counts: predictor
                .table()
                .iter()
                .filter(|&(_, count)| count > 0)
                .map(|(letter, count)| (letter.to_string(), count))
                .collect(),
        }
    }
}

/// Load the predictor from `model_path`, upgrading legacy files on the fly
///
/// # Errors
/// Returns `ModelError::NotFound` if the model file does not exist, and the
/// other `ModelError` variants for unreadable or malformed files.
///
/// # Examples
/// ```no_run
/// use hangman_ai::predictor::load_predictor;
///
/// let loaded = load_predictor("hangman_model.json", "data/corpus.txt").unwrap();
/// println!("legacy: {}", loaded.origin.is_legacy());
/// ```
pub fn load_predictor<P, Q>(model_path: P, corpus_path: Q) -> Result<LoadedModel, ModelError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let model_path = model_path.as_ref();

    let json = fs::read_to_string(model_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ModelError::NotFound(model_path.to_path_buf()),
        _ => ModelError::Io(model_path.to_path_buf(), e),
    })?;

    ModelData::from_json(&json)
        .map_err(|e| ModelError::Parse(model_path.to_path_buf(), e))?
        .into_predictor(corpus_path.as_ref())
}

/// Write `predictor` to `path` in the current format
///
/// # Errors
/// Returns `ModelError::Io` if the file cannot be written.
pub fn save_predictor<P: AsRef<Path>>(predictor: &Predictor, path: P) -> Result<(), ModelError> {
    let path = path.as_ref();
    let json =
        serde_json::to_string_pretty(&SavedModel::from(predictor)).map_err(ModelError::Serialize)?;
    fs::write(path, json).map_err(|e| ModelError::Io(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;
    use tempfile::tempdir;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn parses_current_format() {
        let data = ModelData::from_json(r#"{"version": 1, "letter_counts": {"a": 3, "c": 3}}"#)
            .unwrap();
        assert_eq!(data.version, Some(MODEL_VERSION));

        let loaded = data.into_predictor(Path::new("does/not/matter.txt")).unwrap();
        assert_eq!(loaded.origin, ModelOrigin::Stored);
        assert_eq!(loaded.predictor.table().count(letter('a')), 3);
        assert_eq!(loaded.predictor.table().total(), 6);
    }

    #[test]
    fn parses_legacy_with_counts() {
        let data =
            ModelData::from_json(r#"{"letter_freq": {"e": 10, "t": 7, "?": 4, "th": 2}}"#).unwrap();
        let loaded = data.into_predictor(Path::new("missing.txt")).unwrap();

        assert_eq!(loaded.origin, ModelOrigin::LegacyCounts);
        assert_eq!(loaded.predictor.table().total(), 17);
        assert_eq!(loaded.predictor.best_guess(&LetterSet::new()), Some(letter('e')));
    }

    #[test]
    fn legacy_without_counts_rebuilds_from_corpus() {
        let dir = tempdir().unwrap();
        let corpus = dir.path().join("corpus.txt");
        fs::write(&corpus, "cat\nCAR\n\ncan\n").unwrap();

        let data = ModelData::from_json(r#"{"transitions": [], "states": 4}"#).unwrap();
        assert_eq!(data, ModelData::default());

        let loaded = data.into_predictor(&corpus).unwrap();
        assert_eq!(loaded.origin, ModelOrigin::LegacyCorpus { words: 3 });
        assert_eq!(loaded.predictor.table().count(letter('c')), 3);
        assert_eq!(loaded.predictor.table().total(), 9);
    }

    #[test]
    fn legacy_without_counts_and_corpus_fails() {
        let dir = tempdir().unwrap();
        let data = ModelData::default();
        let err = data.into_predictor(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, ModelError::MissingCorpus(_)));
    }

    #[test]
    fn missing_model_is_not_found() {
        let dir = tempdir().unwrap();
        let err = load_predictor(dir.path().join("model.json"), dir.path().join("c.txt"))
            .unwrap_err();
        assert!(matches!(err, ModelError::NotFound(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn malformed_model_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, "not json").unwrap();

        let err = load_predictor(&path, dir.path().join("c.txt")).unwrap_err();
        assert!(matches!(err, ModelError::Parse(..)));
    }

    #[test]
    fn negative_count_is_parse_error_not_legacy() {
        let json = r#"{"version": 1, "letter_counts": {"a": -3}}"#;
        assert!(ModelData::from_json(json).is_err());

        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, json).unwrap();
        fs::write(dir.path().join("c.txt"), "cat\n").unwrap();

        let err = load_predictor(&path, dir.path().join("c.txt")).unwrap_err();
        assert!(matches!(err, ModelError::Parse(..)));
    }

    #[test]
    fn non_object_json_is_rejected() {
        for json in ["[]", "null", "3", r#""model""#] {
            let err = ModelData::from_json(json).unwrap_err();
            assert!(err.to_string().contains("JSON object"), "{json}: {err}");
        }
    }

    #[test]
    fn wrongly_typed_version_is_rejected() {
        assert!(ModelData::from_json(r#"{"version": "1", "letter_counts": {}}"#).is_err());
    }

    #[test]
    fn unknown_version_is_rejected() {
        let data = ModelData::from_json(r#"{"version": 2, "letter_counts": {"a": 1}}"#).unwrap();
        let err = data.into_predictor(Path::new("missing.txt")).unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedVersion(2)));
        assert!(err.to_string().contains("version 2"));
    }

    #[test]
    fn versioned_file_without_counts_is_rejected() {
        let dir = tempdir().unwrap();
        let corpus = dir.path().join("corpus.txt");
        fs::write(&corpus, "cat\n").unwrap();

        let data = ModelData::from_json(r#"{"version": 1}"#).unwrap();
        let err = data.into_predictor(&corpus).unwrap_err();
        assert!(matches!(err, ModelError::MissingCounts));
    }

    #[test]
    fn overflowing_counts_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(
            &path,
            format!(r#"{{"version": 1, "letter_counts": {{"a": {}, "b": 1}}}}"#, u64::MAX),
        )
        .unwrap();

        let err = load_predictor(&path, dir.path().join("c.txt")).unwrap_err();
        assert!(matches!(err, ModelError::CountOverflow));

        let legacy = ModelData::from_json(&format!(
            r#"{{"letter_freq": {{"e": {}, "t": 1}}}}"#,
            u64::MAX
        ))
        .unwrap();
        let err = legacy.into_predictor(Path::new("missing.txt")).unwrap_err();
        assert!(matches!(err, ModelError::CountOverflow));
    }

    #[test]
    fn only_current_format_is_not_legacy() {
        assert!(!ModelOrigin::Stored.is_legacy());
        assert!(ModelOrigin::LegacyCounts.is_legacy());
        assert!(ModelOrigin::LegacyCorpus { words: 0 }.is_legacy());
    }

    #[test]
    fn saved_model_loads_back_as_current() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        let predictor = Predictor::from_corpus(["python", "hangman"]);

        save_predictor(&predictor, &path).unwrap();
        let loaded = load_predictor(&path, dir.path().join("c.txt")).unwrap();

        assert_eq!(loaded.origin, ModelOrigin::Stored);
        assert_eq!(loaded.predictor.table(), predictor.table());
    }

    #[test]
    fn saved_model_omits_zero_counts() {
        let saved = SavedModel::from(&Predictor::from_corpus(["go"]));
        assert_eq!(saved.version, MODEL_VERSION);
        assert_eq!(saved.letter_counts.len(), 2);
        assert_eq!(saved.letter_counts.get("g"), Some(&1));
    }
}
