//! Whitespace tokenization
//!
//! The [`Tokenizer`] turns raw text into the word stream the frequency
//! counter tallies: normalize, split on whitespace, drop stopwords and
//! too-short words. Contractions and hyphenated forms are already fused by
//! normalization, so splitting on whitespace is the whole story.

use crate::nlp::normalize::normalize;
use crate::nlp::stopwords::StopwordFilter;

/// Tokenizer for plain text.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Stopwords excluded from the output stream.
    stopwords: StopwordFilter,
    /// Minimum word length (in chars) to keep.
    min_word_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            stopwords: StopwordFilter::default(),
            min_word_len: 1,
        }
    }
}

impl Tokenizer {
    /// Create a tokenizer with the default English stopword list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stopword filter.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Add words to the stopword filter on top of the current list.
    pub fn with_extra_stopwords(mut self, words: &[&str]) -> Self {
        self.stopwords.add_stopwords(words);
        self
    }

    /// Set the minimum word length (in chars) to keep.
    pub fn with_min_word_len(mut self, min_word_len: usize) -> Self {
        self.min_word_len = min_word_len;
        self
    }

    /// Tokenize `text` into normalized, stopword-free words.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        normalize(text)
            .split_whitespace()
            .filter(|w| w.chars().count() >= self.min_word_len)
            .filter(|w| !self.stopwords.is_stopword(w))
            .map(str::to_owned)
            .collect()
    }
}
