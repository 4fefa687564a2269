/*! Review text tokenization

Text is ASCII-lowercased and trimmed, every character that is not an ASCII letter,
a digit or a space is blanked, whitespace runs are collapsed and the result is
split into tokens. Tokens detected by the provided [Filter] are removed.
!*/
use lazy_static::lazy_static;
use regex::Regex;

use crate::filtering::Filter;

lazy_static! {
    static ref NOT_ALNUM: Regex = Regex::new(r"[^A-Za-z 0-9]").unwrap();
    static ref WHITESPACES: Regex = Regex::new(r"\s\s+").unwrap();
}

/// Normalize text into a single-space separated string of lowercase tokens.
///
/// Only ASCII letters are lowercased: non-ASCII capitals are blanked
/// like any other non-ASCII character.
pub fn clean(text: &str) -> String {
    let lowered = text.to_ascii_lowercase();
    let blanked = NOT_ALNUM.replace_all(lowered.trim(), " ");
    WHITESPACES.replace_all(&blanked, " ").into_owned()
}

/// Tokenize text, without removing stopwords.
pub fn tokens(text: &str) -> Vec<String> {
    clean(text).split_whitespace().map(String::from).collect()
}

/// Tokenize text, removing every token detected by `stopwords`.
pub fn tokenize<F>(text: &str, stopwords: &F) -> Vec<String>
where
    F: for<'a> Filter<&'a str>,
{
    clean(text)
        .split_whitespace()
        .filter(|token| !stopwords.detect(*token))
        .map(String::from)
        .collect()
}
