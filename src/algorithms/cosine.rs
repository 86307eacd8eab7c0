//! Cosine similarity over token frequency vectors.
//!
//! Unlike the set-based metrics, cosine weighs tokens by how often they
//! occur: each input becomes a sparse frequency vector and the score is
//! the cosine of the angle between them, `A·B / (|A|·|B|)`. Two strings
//! with the same distinct tokens but different repetition patterns score
//! below `1.0` here while Jaccard and friends report them identical.
//!
//! Two empty vectors count as identical; exactly one empty scores `0.0`.
//!
//! # Complexity
//!
//! `O(|A| + |B|)` expected over the number of distinct tokens.

use ahash::AHashMap;
use std::hash::Hash;

use crate::tokenize::{char_counts, ngram_counts, word_counts};

/// Cosine similarity of two token frequency maps.
#[must_use]
pub fn cosine_from_counts<T: Hash + Eq>(a: &AHashMap<T, usize>, b: &AHashMap<T, usize>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut dot = 0.0_f64;
    for (token, &count) in small {
        if let Some(&other) = large.get(token) {
            dot += count as f64 * other as f64;
        }
    }
    if dot == 0.0 {
        return 0.0;
    }

    let norm_a: f64 = a.values().map(|&c| (c as f64) * (c as f64)).sum();
    let norm_b: f64 = b.values().map(|&c| (c as f64) * (c as f64)).sum();
    (dot / (norm_a * norm_b).sqrt()).min(1.0)
}

/// Cosine similarity over codepoint frequencies.
#[inline]
#[must_use]
pub fn cosine_similarity_chars(a: &str, b: &str) -> f64 {
    cosine_from_counts(&char_counts(a), &char_counts(b))
}

/// Cosine similarity over word frequencies.
#[inline]
#[must_use]
pub fn cosine_similarity_words(a: &str, b: &str) -> f64 {
    cosine_from_counts(&word_counts(a), &word_counts(b))
}

/// Cosine similarity over codepoint n-gram frequencies.
#[inline]
#[must_use]
pub fn cosine_similarity_ngrams(a: &str, b: &str, n: usize) -> f64 {
    cosine_from_counts(&ngram_counts(a, n), &ngram_counts(b, n))
}
