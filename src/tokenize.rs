//! Tokenization for the token-based metrics.
//!
//! All segmentation operates on Unicode codepoints, never bytes, so
//! multi-byte characters count as single units. N-gram windows slide one
//! codepoint at a time and are never padded; an input shorter than the
//! window becomes its own single token so short strings still produce a
//! usable profile instead of an empty one.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::hash::Hash;
use unicode_segmentation::UnicodeSegmentation;

/// How an input string is segmented before a token-based metric runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreprocessingMode {
    /// The whole string is a single token.
    None,
    /// One token per Unicode codepoint.
    Character,
    /// Unicode word-boundary segmentation (alphanumeric runs, punctuation
    /// and whitespace discarded).
    Word,
    /// Sliding codepoint windows of a configured size, step one.
    NGram,
}

impl Default for PreprocessingMode {
    fn default() -> Self {
        PreprocessingMode::Character
    }
}

/// Segment `text` into tokens under `mode`.
///
/// `ngram_size` is only consulted in [`PreprocessingMode::NGram`]; see
/// [`ngram_tokens`] for its edge cases. Empty input yields no tokens in
/// every mode.
#[must_use]
pub fn tokenize(text: &str, mode: PreprocessingMode, ngram_size: usize) -> Vec<String> {
    match mode {
        PreprocessingMode::None => {
            if text.is_empty() {
                Vec::new()
            } else {
                vec![text.to_string()]
            }
        }
        PreprocessingMode::Character => text.chars().map(String::from).collect(),
        PreprocessingMode::Word => word_tokens(text).map(str::to_string).collect(),
        PreprocessingMode::NGram => ngram_tokens(text, ngram_size),
    }
}

/// Word tokens of `text` under Unicode word-boundary rules.
pub fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.unicode_words()
}

/// Sliding codepoint n-grams of `text`, step one, no padding.
///
/// Produces `len - n + 1` windows for `len >= n`. A non-empty string
/// shorter than `n` is returned as the sole token. Empty input and
/// `n == 0` produce nothing; the dispatch layer rejects a zero window
/// before tokenization is ever reached.
#[must_use]
pub fn ngram_tokens(text: &str, n: usize) -> Vec<String> {
    if text.is_empty() || n == 0 {
        return Vec::new();
    }
    let chars: SmallVec<[char; 64]> = text.chars().collect();
    if chars.len() < n {
        return vec![text.to_string()];
    }
    chars
        .windows(n)
        .map(|window| window.iter().collect())
        .collect()
}

/// Token frequency map over any hashable token type.
#[must_use]
pub fn token_counts<T, I>(tokens: I) -> AHashMap<T, usize>
where
    T: Hash + Eq,
    I: Iterator<Item = T>,
{
    let mut counts = AHashMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// Codepoint frequency map of `text`.
#[inline]
#[must_use]
pub fn char_counts(text: &str) -> AHashMap<char, usize> {
    token_counts(text.chars())
}

/// Word frequency map of `text`.
#[inline]
#[must_use]
pub fn word_counts(text: &str) -> AHashMap<&str, usize> {
    token_counts(word_tokens(text))
}

/// Codepoint n-gram frequency map of `text`.
#[inline]
#[must_use]
pub fn ngram_counts(text: &str, n: usize) -> AHashMap<String, usize> {
    token_counts(ngram_tokens(text, n).into_iter())
}

/// Distinct-token set over any hashable token type.
#[must_use]
pub fn token_set<T, I>(tokens: I) -> AHashSet<T>
where
    T: Hash + Eq,
    I: Iterator<Item = T>,
{
    tokens.collect()
}
