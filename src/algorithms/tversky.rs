//! Tversky index over distinct-token sets.
//!
//! The Tversky index generalizes Jaccard and Dice by weighting the two
//! set differences independently:
//!
//! ```text
//! S(A, B) = |A ∩ B| / (|A ∩ B| + α·|A − B| + β·|B − A|)
//! ```
//!
//! `α = β = 1` reproduces Jaccard, `α = β = 0.5` reproduces Dice, and
//! asymmetric weights make one input the "prototype": with `α = 0,
//! β = 1` any superset of the other input scores `1.0`. Weights are
//! validated at the dispatch layer (finite, non-negative); a zero
//! denominator scores `0.0`.
//!
//! Empty conventions match the other set metrics: both empty → `1.0`,
//! exactly one empty → `0.0`.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

use crate::tokenize::{ngram_tokens, token_set, word_tokens};

/// Difference weights for the Tversky index.
///
/// `alpha` scales `|A − B|` (tokens only in the first input), `beta`
/// scales `|B − A|`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TverskyWeights {
    pub alpha: f64,
    pub beta: f64,
}

impl TverskyWeights {
    #[must_use]
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }
}

impl Default for TverskyWeights {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
        }
    }
}

/// Tversky index of two distinct-token sets.
#[must_use]
pub fn tversky_from_sets<T: Hash + Eq>(
    a: &AHashSet<T>,
    b: &AHashSet<T>,
    weights: TverskyWeights,
) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.iter().filter(|token| b.contains(*token)).count();
    let a_only = (a.len() - intersection) as f64;
    let b_only = (b.len() - intersection) as f64;
    let denominator = intersection as f64 + weights.alpha * a_only + weights.beta * b_only;
    if denominator == 0.0 {
        return 0.0;
    }
    intersection as f64 / denominator
}

/// Tversky index over the distinct codepoints of two strings.
#[inline]
#[must_use]
pub fn tversky_similarity_chars(a: &str, b: &str, weights: TverskyWeights) -> f64 {
    tversky_from_sets(&token_set(a.chars()), &token_set(b.chars()), weights)
}

/// Tversky index over the distinct words of two strings.
#[inline]
#[must_use]
pub fn tversky_similarity_words(a: &str, b: &str, weights: TverskyWeights) -> f64 {
    tversky_from_sets(
        &token_set(word_tokens(a)),
        &token_set(word_tokens(b)),
        weights,
    )
}

/// Tversky index over the distinct codepoint n-grams of two strings.
#[inline]
#[must_use]
pub fn tversky_similarity_ngrams(a: &str, b: &str, n: usize, weights: TverskyWeights) -> f64 {
    tversky_from_sets(
        &token_set(ngram_tokens(a, n).into_iter()),
        &token_set(ngram_tokens(b, n).into_iter()),
        weights,
    )
}
