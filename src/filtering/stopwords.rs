//! Stopword filtering
//!
//! Built-in lists come from the `stop-words` crate.
//! Custom lists can be loaded from a plain text file, one word per line.
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;
use stop_words::{get, LANGUAGE};

use super::Filter;
use crate::error::Error;

/// Read-only set of stopwords.
///
/// Words are stored lowercase and matched exactly,
/// so tokens have to be lowercased beforehand.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Built-in stopword list for a language code (`en`, `fr`...) or name (`english`).
    pub fn from_lang(lang: &str) -> Result<Self, Error> {
        let language = match lang.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return Err(Error::UnknownLanguage(lang.to_string())),
        };

        let sw = Self::from_language(language);
        debug!("loaded {} stopwords for {}", sw.len(), lang);
        Ok(sw)
    }

    fn from_language(language: LANGUAGE) -> Self {
        Self {
            words: get(language).iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Load a stopword list from a file.
    ///
    /// Blank lines and lines starting with `#` are ignored.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        let words: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();

        debug!("loaded {} stopwords from {:?}", words.len(), path);
        Ok(Self::from_list(&words))
    }

    /// Create a stopword set from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Stopwords {
    /// English stopwords.
    fn default() -> Self {
        Self::from_language(LANGUAGE::English)
    }
}

impl Filter<&str> for Stopwords {
    /// Returns `true` if the token is a stopword.
    fn detect(&self, token: &str) -> bool {
        self.contains(token)
    }
}
