//! Minkowski-family distances over token frequency vectors.
//!
//! Each input becomes a sparse frequency vector and the two vectors are
//! compared coordinate-wise over the union of their tokens: Euclidean is
//! the L2 norm of the difference, Manhattan the L1 norm, Chebyshev the
//! L∞ norm. The raw distances are unbounded, so each carries a transform
//! mapping it into a `[0, 1]` similarity:
//!
//! * Euclidean and Chebyshev: `exp(-d)`
//! * Manhattan: `1 / (1 + d)`
//!
//! The similarity transforms share the empty convention of the other
//! token metrics: two empty vectors count as identical, exactly one
//! empty scores `0.0`. The raw distances stay geometric, so against a
//! single empty vector they measure the other side's norm.
//!
//! # Complexity
//!
//! `O(|A| + |B|)` expected over the number of distinct tokens.

use ahash::AHashMap;
use std::hash::Hash;

use crate::tokenize::{char_counts, ngram_counts, word_counts};

/// Absolute coordinate differences over the union of both key sets.
fn count_diffs<'a, T: Hash + Eq>(
    a: &'a AHashMap<T, usize>,
    b: &'a AHashMap<T, usize>,
) -> impl Iterator<Item = f64> + 'a {
    let shared = a.iter().map(move |(token, &count)| {
        let other = b.get(token).copied().unwrap_or(0);
        (count as f64 - other as f64).abs()
    });
    let b_only = b
        .iter()
        .filter(move |(token, _)| !a.contains_key(*token))
        .map(|(_, &count)| count as f64);
    shared.chain(b_only)
}

// ==================== Distances ====================

/// Euclidean (L2) distance between two token frequency maps.
#[must_use]
pub fn euclidean_from_counts<T: Hash + Eq>(
    a: &AHashMap<T, usize>,
    b: &AHashMap<T, usize>,
) -> f64 {
    count_diffs(a, b).map(|d| d * d).sum::<f64>().sqrt()
}

/// Manhattan (L1) distance between two token frequency maps.
#[must_use]
pub fn manhattan_from_counts<T: Hash + Eq>(
    a: &AHashMap<T, usize>,
    b: &AHashMap<T, usize>,
) -> f64 {
    count_diffs(a, b).sum()
}

/// Chebyshev (L∞) distance between two token frequency maps.
#[must_use]
pub fn chebyshev_from_counts<T: Hash + Eq>(
    a: &AHashMap<T, usize>,
    b: &AHashMap<T, usize>,
) -> f64 {
    count_diffs(a, b).fold(0.0, f64::max)
}

// ==================== Similarity transforms ====================

/// Empty-vector convention shared by all three transforms: two empty
/// vectors are identical, exactly one empty scores zero.
fn empty_vector_score<T: Hash + Eq>(
    a: &AHashMap<T, usize>,
    b: &AHashMap<T, usize>,
) -> Option<f64> {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Some(1.0),
        (true, false) | (false, true) => Some(0.0),
        (false, false) => None,
    }
}

/// Euclidean distance mapped into `[0, 1]` via `exp(-d)`.
#[inline]
#[must_use]
pub fn euclidean_similarity_from_counts<T: Hash + Eq>(
    a: &AHashMap<T, usize>,
    b: &AHashMap<T, usize>,
) -> f64 {
    if let Some(score) = empty_vector_score(a, b) {
        return score;
    }
    (-euclidean_from_counts(a, b)).exp()
}

/// Manhattan distance mapped into `[0, 1]` via `1 / (1 + d)`.
#[inline]
#[must_use]
pub fn manhattan_similarity_from_counts<T: Hash + Eq>(
    a: &AHashMap<T, usize>,
    b: &AHashMap<T, usize>,
) -> f64 {
    if let Some(score) = empty_vector_score(a, b) {
        return score;
    }
    1.0 / (1.0 + manhattan_from_counts(a, b))
}

/// Chebyshev distance mapped into `[0, 1]` via `exp(-d)`.
#[inline]
#[must_use]
pub fn chebyshev_similarity_from_counts<T: Hash + Eq>(
    a: &AHashMap<T, usize>,
    b: &AHashMap<T, usize>,
) -> f64 {
    if let Some(score) = empty_vector_score(a, b) {
        return score;
    }
    (-chebyshev_from_counts(a, b)).exp()
}

// ==================== Convenience wrappers ====================

/// Euclidean similarity over codepoint frequencies.
#[inline]
#[must_use]
pub fn euclidean_similarity_chars(a: &str, b: &str) -> f64 {
    euclidean_similarity_from_counts(&char_counts(a), &char_counts(b))
}

/// Manhattan similarity over codepoint frequencies.
#[inline]
#[must_use]
pub fn manhattan_similarity_chars(a: &str, b: &str) -> f64 {
    manhattan_similarity_from_counts(&char_counts(a), &char_counts(b))
}

/// Chebyshev similarity over codepoint frequencies.
#[inline]
#[must_use]
pub fn chebyshev_similarity_chars(a: &str, b: &str) -> f64 {
    chebyshev_similarity_from_counts(&char_counts(a), &char_counts(b))
}

/// Euclidean similarity over word frequencies.
#[inline]
#[must_use]
pub fn euclidean_similarity_words(a: &str, b: &str) -> f64 {
    euclidean_similarity_from_counts(&word_counts(a), &word_counts(b))
}

/// Manhattan similarity over word frequencies.
#[inline]
#[must_use]
pub fn manhattan_similarity_words(a: &str, b: &str) -> f64 {
    manhattan_similarity_from_counts(&word_counts(a), &word_counts(b))
}

/// Chebyshev similarity over word frequencies.
#[inline]
#[must_use]
pub fn chebyshev_similarity_words(a: &str, b: &str) -> f64 {
    chebyshev_similarity_from_counts(&word_counts(a), &word_counts(b))
}

/// Euclidean similarity over codepoint n-gram frequencies.
#[inline]
#[must_use]
pub fn euclidean_similarity_ngrams(a: &str, b: &str, n: usize) -> f64 {
    euclidean_similarity_from_counts(&ngram_counts(a, n), &ngram_counts(b, n))
}

/// Manhattan similarity over codepoint n-gram frequencies.
#[inline]
#[must_use]
pub fn manhattan_similarity_ngrams(a: &str, b: &str, n: usize) -> f64 {
    manhattan_similarity_from_counts(&ngram_counts(a, n), &ngram_counts(b, n))
}

/// Chebyshev similarity over codepoint n-gram frequencies.
#[inline]
#[must_use]
pub fn chebyshev_similarity_ngrams(a: &str, b: &str, n: usize) -> f64 {
    chebyshev_similarity_from_counts(&ngram_counts(a, n), &ngram_counts(b, n))
}
