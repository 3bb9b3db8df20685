//! Banned-word masking.
//!
//! Each banned word compiles to one case-insensitive, word-bounded pattern.
//! Patterns run in list order over the progressively rewritten text, so a
//! later word never sees anything but the output of the earlier ones.
//!
//! Word boundaries are ASCII: only `[A-Za-z0-9_]` are word characters, so
//! `ñkerfuffle` still masks the `kerfuffle`. ASCII words also fold case in
//! ASCII only, so `ſharbert` (long s) or a Kelvin-sign `K` do not match.

use std::borrow::Cow;

use regex::{NoExpand, Regex};
use thiserror::Error;

/// Replacement for every banned-word match, whatever the word's length.
pub const MASK: &str = "****";

/// A banned word could not be compiled into a pattern.
#[derive(Debug, Error)]
#[error("invalid banned word `{word}`: {source}")]
pub struct FilterError {
    word: String,
    #[source]
    source: regex::Error,
}

/// Masks whole-word, case-insensitive occurrences of banned words.
#[derive(Debug, Clone)]
pub struct WordFilter {
    patterns: Vec<Regex>,
}

impl WordFilter {
    /// Compile a filter from lowercase banned words, preserving their order.
    pub fn new<I, S>(banned_words: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = banned_words
            .into_iter()
            .map(|word| {
                let word = word.as_ref();
                Regex::new(&word_pattern(word)).map_err(|source| FilterError {
                    word: word.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Number of banned words in the filter.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Replace every banned word in `text` with [`MASK`].
    pub fn filter(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        for pattern in &self.patterns {
            let replaced = match pattern.replace_all(&cleaned, NoExpand(MASK)) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(replaced) => replaced,
            };
            cleaned = replaced;
        }
        cleaned
    }
}

/// Case-insensitive pattern for `word` between ASCII word boundaries.
fn word_pattern(word: &str) -> String {
    let escaped = regex::escape(word);
    if word.is_ascii() {
        format!(r"(?-u:\b)(?i-u:{})(?-u:\b)", escaped)
    } else {
        format!(r"(?-u:\b)(?i:{})(?-u:\b)", escaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_filter() -> WordFilter {
        WordFilter::new(["kerfuffle", "sharbert", "fornax"]).unwrap()
    }

    #[test]
    fn test_masks_standalone_word() {
        let filter = default_filter();
        assert_eq!(
            filter.filter("This is a kerfuffle opinion I need to share."),
            "This is a **** opinion I need to share."
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let filter = default_filter();
        assert_eq!(filter.filter("KERFUFFLE Sharbert fOrNaX"), "**** **** ****");
    }

    #[test]
    fn test_mask_length_does_not_depend_on_word() {
        let filter = WordFilter::new(["ab", "abcdefghijklmnop"]).unwrap();
        assert_eq!(filter.filter("ab"), MASK);
        assert_eq!(filter.filter("abcdefghijklmnop"), MASK);
    }

    #[test]
    fn test_substring_is_not_masked() {
        let filter = default_filter();
        let text = "kerfufflelicious unsharbert fornaxes";
        assert_eq!(filter.filter(text), text);
    }

    #[test]
    fn test_punctuation_is_a_word_boundary() {
        let filter = default_filter();
        assert_eq!(
            filter.filter("What a kerfuffle! (Sharbert), fornax."),
            "What a ****! (****), ****."
        );
    }

    #[test]
    fn test_every_occurrence_is_masked() {
        let filter = default_filter();
        assert_eq!(
            filter.filter("fornax fornax and Fornax"),
            "**** **** and ****"
        );
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let filter = default_filter();
        let once = filter.filter("I hear Sharbert is having a kerfuffle with fornax");
        assert_eq!(filter.filter(&once), once);
    }

    #[test]
    fn test_clean_text_is_untouched() {
        let filter = default_filter();
        let text = "I had something interesting for breakfast";
        assert_eq!(filter.filter(text), text);
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let filter = WordFilter::new(Vec::<String>::new()).unwrap();
        assert!(filter.is_empty());
        assert_eq!(filter.filter("kerfuffle"), "kerfuffle");
    }

    #[test]
    fn test_non_ascii_letters_are_word_boundaries() {
        let filter = default_filter();
        assert_eq!(
            filter.filter("ñkerfuffle caféfornax Sharbertñ"),
            "ñ**** café**** ****ñ"
        );
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        let filter = default_filter();
        let text = "\u{17F}harbert \u{212A}erfuffle";
        assert_eq!(filter.filter(text), text);
    }

    #[test]
    fn test_non_ascii_banned_word() {
        let filter = WordFilter::new(["crème"]).unwrap();
        assert_eq!(filter.filter("la CRÈME brûlée"), "la **** brûlée");
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let filter = WordFilter::new(["a.c"]).unwrap();
        assert_eq!(filter.filter("abc a.c"), "abc ****");
    }
}
