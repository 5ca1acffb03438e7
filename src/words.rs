use crate::filter::WORD_LENGTH;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default corpus shipped with the binary.
pub const EMBEDDED_WORDS: &str = include_str!("resources/words.json");

#[derive(Debug, Error)]
pub enum WordDataError {
    #[error("failed to read word data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse word data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid dictionary entry '{0}': words must be exactly five letters")]
    InvalidWord(String),
}

/// The two corpora the finder filters over. `common_words` is a curated
/// subset of `all_words`; both are read-only after loading.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordData {
    #[serde(default)]
    pub all_words: Vec<String>,
    #[serde(default)]
    pub common_words: Vec<String>,
}

impl WordData {
    /// Select the filtering universe. Happens once per filter pass.
    #[must_use]
    pub fn source(&self, common_only: bool) -> &[String] {
        if common_only {
            &self.common_words
        } else {
            &self.all_words
        }
    }
}

fn normalize_list(words: &mut Vec<String>) -> Result<(), WordDataError> {
    for word in words.iter_mut() {
        let lower = word.trim().to_ascii_lowercase();
        if lower.len() != WORD_LENGTH || !lower.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordDataError::InvalidWord(word.clone()));
        }
        *word = lower;
    }
    Ok(())
}

/// Parse and validate a JSON corpus (keys `allWords` and `commonWords`).
/// Entries are lowercased; anything that is not exactly five ASCII letters
/// is rejected rather than silently mis-indexed later.
pub fn load_words_from_str(data: &str) -> Result<WordData, WordDataError> {
    let mut word_data: WordData = serde_json::from_str(data)?;
    normalize_list(&mut word_data.all_words)?;
    normalize_list(&mut word_data.common_words)?;
    Ok(word_data)
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<WordData, WordDataError> {
    let data = fs::read_to_string(path)?;
    load_words_from_str(&data)
}

/// Per-user corpus override, checked when no explicit path is given.
#[must_use]
pub fn user_words_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wordpulse").join("words.json"))
}
