//! Common-word list management
//!
//! Holds the very common passwords and words the heuristic scorer
//! penalizes. The list is loaded once and handed to the scorer as an
//! immutable value.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::WORDS_PATH_ENV;

/// Entries shorter than this are ignored; they match too much.
pub const MIN_WORD_LEN: usize = 4;

const BUILTIN_WORDS: &[&str] = &[
    "password", "123456", "12345678", "123456789", "qwerty", "qwertyuiop", "asdfgh",
    "zxcvbn", "111111", "000000", "abc123", "iloveyou", "letmein", "welcome", "admin",
    "administrator", "monkey", "dragon", "master", "shadow", "sunshine", "princess",
    "football", "baseball", "soccer", "hockey", "superman", "batman", "starwars",
    "trustno1", "whatever", "freedom", "secret", "login", "hello", "charlie", "michael",
    "jordan", "jennifer", "hunter", "ranger", "killer", "buster", "thomas", "tigger",
    "summer", "winter", "autumn", "spring", "flower", "cookie", "cheese", "pepper",
    "ginger", "mustang", "access", "computer", "internet", "changeme", "default",
];

#[derive(Error, Debug)]
pub enum CommonWordsError {
    #[error("Common-word file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common-word file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common-word file is empty")]
    EmptyFile,
}

/// Immutable set of lowercase common words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonWords {
    words: BTreeSet<String>,
}

impl Default for CommonWords {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommonWords {
    /// The built-in list only.
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Builds a list from arbitrary words (lowercased, short entries dropped).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| w.chars().count() >= MIN_WORD_LEN)
                .collect(),
        }
    }

    /// Returns the external file path from `PWD_AUDIT_WORDS_PATH`, if set.
    pub fn env_path() -> Option<PathBuf> {
        std::env::var_os(WORDS_PATH_ENV).map(PathBuf::from)
    }

    /// Built-in list, merged with the file named by `PWD_AUDIT_WORDS_PATH`
    /// when that variable is set.
    ///
    /// # Errors
    ///
    /// Returns error if the variable is set and the file:
    /// - does not exist
    /// - cannot be read
    /// - is empty
    pub fn load() -> Result<Self, CommonWordsError> {
        match Self::env_path() {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Built-in list merged with a file of one word per line.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, CommonWordsError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common-word loading FAILED: FileNotFound {:?}", path);
            return Err(CommonWordsError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common-word loading FAILED: Empty file {:?}", path);
            return Err(CommonWordsError::EmptyFile);
        }

        let mut words = Self::builtin();
        words.words.extend(Self::from_words(content.lines()).words);

        #[cfg(feature = "tracing")]
        tracing::info!("Common words loaded: {} entries from {:?}", words.len(), path);

        Ok(words)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is in the list (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Every list entry occurring inside `text`, which must already be lowercase.
    pub fn found_in<'a>(&'a self, text: &str) -> impl Iterator<Item = &'a str> {
        self.words
            .iter()
            .filter(move |w| text.contains(w.as_str()))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_load_without_env_is_builtin() {
        remove_env(WORDS_PATH_ENV);
        let words = CommonWords::load().unwrap();
        assert_eq!(words, CommonWords::builtin());
    }

    #[test]
    #[serial]
    fn test_load_file_not_found() {
        set_env(WORDS_PATH_ENV, "/nonexistent/path/words.txt");

        let result = CommonWords::load();
        assert!(matches!(result, Err(CommonWordsError::FileNotFound(_))));

        remove_env(WORDS_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_load_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "  \n").expect("Failed to write");
        set_env(WORDS_PATH_ENV, temp_file.path().to_str().unwrap());

        let result = CommonWords::load();
        assert!(matches!(result, Err(CommonWordsError::EmptyFile)));

        remove_env(WORDS_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_load_merges_with_builtin() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "Zanzibar").expect("Failed to write");
        writeln!(temp_file, "abc").expect("Failed to write");
        set_env(WORDS_PATH_ENV, temp_file.path().to_str().unwrap());

        let words = CommonWords::load().unwrap();
        assert!(words.contains("zanzibar"));
        assert!(words.contains("PASSWORD"));
        // shorter than MIN_WORD_LEN
        assert!(!words.contains("abc"));
        assert_eq!(words.len(), CommonWords::builtin().len() + 1);

        remove_env(WORDS_PATH_ENV);
    }

    #[test]
    fn test_found_in() {
        let words = CommonWords::from_words(["dragon", "monkey", "love"]);
        let found: Vec<&str> = words.found_in("mydragonmonkey!").collect();
        assert_eq!(found, vec!["dragon", "monkey"]);
        assert_eq!(words.found_in("nothing here").count(), 0);
    }
}
