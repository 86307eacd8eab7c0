//! String similarity and distance algorithms.
//!
//! Each algorithm family lives in its own module: a struct implementing one
//! of the traits below plus free functions for one-shot use. Edit distances
//! count operations over Unicode codepoints, never bytes. Token-based
//! metrics consume the token sets and frequency maps built by
//! [`crate::tokenize`].

pub mod cosine;
pub mod damerau;
pub mod hamming;
pub mod jaro;
pub mod levenshtein;
pub mod minkowski;
pub mod normalize;
pub mod token_set;
pub mod tversky;

pub use cosine::{
    cosine_from_counts, cosine_similarity_chars, cosine_similarity_ngrams,
    cosine_similarity_words,
};
pub use damerau::{osa_distance, osa_distance_bounded, osa_similarity, DamerauLevenshtein};
pub use hamming::{hamming_distance, hamming_similarity, Hamming};
pub use jaro::{
    jaro_similarity, jaro_winkler_similarity, jaro_winkler_similarity_params, Jaro, JaroWinkler,
    JaroWinklerConfig,
};
pub use levenshtein::{
    levenshtein, levenshtein_distance_bounded, levenshtein_similarity, Levenshtein,
};
pub use minkowski::{
    chebyshev_from_counts, chebyshev_similarity_chars, chebyshev_similarity_from_counts,
    chebyshev_similarity_ngrams, chebyshev_similarity_words, euclidean_from_counts,
    euclidean_similarity_chars, euclidean_similarity_from_counts, euclidean_similarity_ngrams,
    euclidean_similarity_words, manhattan_from_counts, manhattan_similarity_chars,
    manhattan_similarity_from_counts, manhattan_similarity_ngrams, manhattan_similarity_words,
};
pub use normalize::{normalize_pair, normalize_string, NormalizationMode};
pub use token_set::{
    dice_from_sets, dice_similarity_chars, dice_similarity_ngrams, dice_similarity_words,
    jaccard_from_sets, jaccard_similarity_chars, jaccard_similarity_ngrams,
    jaccard_similarity_words, overlap_from_sets, overlap_similarity_chars,
    overlap_similarity_ngrams, overlap_similarity_words,
};
pub use tversky::{
    tversky_from_sets, tversky_similarity_chars, tversky_similarity_ngrams,
    tversky_similarity_words, TverskyWeights,
};

// ==================== Core traits ====================

/// A normalized similarity metric.
///
/// `similarity` returns a value in `[0.0, 1.0]`: `1.0` for equivalent
/// inputs, `0.0` for inputs with nothing in common. All implementations are
/// `Send + Sync` so metrics can be shared freely across threads.
pub trait Similarity: Send + Sync {
    /// Similarity between `a` and `b` in `[0.0, 1.0]`.
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Normalized distance, `1.0 - similarity`.
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.similarity(a, b)
    }

    /// Canonical lowercase name of the metric.
    fn name(&self) -> &'static str;
}

/// An integer edit distance over Unicode codepoints.
///
/// The default `similarity` normalizes by the longer input:
/// `1 - d / max(|a|, |b|)`, with two empty strings counting as identical.
pub trait EditDistance: Send + Sync {
    /// Number of edit operations transforming `a` into `b`.
    fn distance(&self, a: &str, b: &str) -> usize;

    /// Normalized similarity derived from the distance.
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let max_len = a.chars().count().max(b.chars().count());
        if max_len == 0 {
            return 1.0;
        }
        1.0 - (self.distance(a, b) as f64 / max_len as f64)
    }

    /// Canonical lowercase name of the metric.
    fn name(&self) -> &'static str;
}

/// Every edit distance is usable wherever a similarity is expected.
impl<T: EditDistance> Similarity for T {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        EditDistance::similarity(self, a, b)
    }

    fn name(&self) -> &'static str {
        EditDistance::name(self)
    }
}

/// An edit distance with a precondition on its inputs.
///
/// `None` means the inputs violate the precondition, not that the distance
/// is unbounded. The dispatch layer maps `None` to a typed error.
pub trait FallibleEditDistance: Send + Sync {
    /// Edit distance, or `None` when the inputs are not comparable.
    fn distance(&self, a: &str, b: &str) -> Option<usize>;

    /// Normalized similarity derived from the distance.
    fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        let max_len = a.chars().count().max(b.chars().count());
        if max_len == 0 {
            return Some(1.0);
        }
        self.distance(a, b)
            .map(|d| 1.0 - (d as f64 / max_len as f64))
    }

    /// Canonical lowercase name of the metric.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distances_usable_as_similarity_objects() {
        let metrics: Vec<Box<dyn Similarity>> = vec![
            Box::new(Levenshtein::new()),
            Box::new(DamerauLevenshtein::new()),
            Box::new(Jaro),
            Box::new(JaroWinkler::new()),
            Box::new(Hamming),
        ];
        for metric in &metrics {
            assert!(
                (metric.similarity("same", "same") - 1.0).abs() < 1e-9,
                "{} on identical inputs",
                metric.name()
            );
            assert!(
                metric.similarity("abc", "xyz") < 0.5,
                "{} on disjoint inputs",
                metric.name()
            );
        }
    }

    #[test]
    fn test_blanket_impl_normalizes_by_longer_input() {
        let lev = Levenshtein::new();
        let sim = EditDistance::similarity(&lev, "kitten", "sitting");
        assert!((sim - (1.0 - 3.0 / 7.0)).abs() < 1e-9);
    }

    #[test]
    fn test_trait_names_match_canonical_spelling() {
        assert_eq!(EditDistance::name(&Levenshtein::new()), "levenshtein");
        assert_eq!(
            EditDistance::name(&DamerauLevenshtein::new()),
            "damerau-levenshtein"
        );
        assert_eq!(FallibleEditDistance::name(&Hamming), "hamming");
        assert_eq!(Similarity::name(&Jaro), "jaro");
        assert_eq!(Similarity::name(&JaroWinkler::new()), "jaro-winkler");
    }

    #[test]
    fn test_normalized_distance_complements_similarity() {
        let jaro = Jaro;
        let sim = jaro.similarity("martha", "marhta");
        let dist = Similarity::distance(&jaro, "martha", "marhta");
        assert!((sim + dist - 1.0).abs() < 1e-9);
    }
}
