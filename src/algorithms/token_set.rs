//! Set-based token similarity: Jaccard, Sørensen-Dice and overlap.
//!
//! All three compare the *distinct* token sets of the two inputs, so
//! repeated tokens carry no extra weight. They differ only in the
//! denominator applied to the intersection size:
//!
//! * Jaccard divides by the union: `|A ∩ B| / |A ∪ B|`.
//! * Dice divides by the summed sizes: `2·|A ∩ B| / (|A| + |B|)`.
//! * Overlap divides by the smaller set: `|A ∩ B| / min(|A|, |B|)`, so a
//!   string whose tokens are contained in the other's scores `1.0`.
//!
//! Two empty token sets count as identical; exactly one empty set scores
//! `0.0`.
//!
//! # Complexity
//!
//! `O(min(|A|, |B|))` expected per comparison once the sets are built.

use ahash::AHashSet;
use std::hash::Hash;

use crate::tokenize::{ngram_tokens, token_set, word_tokens};

/// Intersection size, probing the larger set with the smaller one.
fn intersection_size<T: Hash + Eq>(a: &AHashSet<T>, b: &AHashSet<T>) -> usize {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(|token| large.contains(*token)).count()
}

// ==================== Jaccard ====================

/// Jaccard similarity of two distinct-token sets.
#[must_use]
pub fn jaccard_from_sets<T: Hash + Eq>(a: &AHashSet<T>, b: &AHashSet<T>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = intersection_size(a, b);
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Jaccard similarity over the distinct codepoints of two strings.
#[inline]
#[must_use]
pub fn jaccard_similarity_chars(a: &str, b: &str) -> f64 {
    jaccard_from_sets(&token_set(a.chars()), &token_set(b.chars()))
}

/// Jaccard similarity over the distinct words of two strings.
#[inline]
#[must_use]
pub fn jaccard_similarity_words(a: &str, b: &str) -> f64 {
    jaccard_from_sets(&token_set(word_tokens(a)), &token_set(word_tokens(b)))
}

/// Jaccard similarity over the distinct codepoint n-grams of two strings.
#[inline]
#[must_use]
pub fn jaccard_similarity_ngrams(a: &str, b: &str, n: usize) -> f64 {
    jaccard_from_sets(
        &token_set(ngram_tokens(a, n).into_iter()),
        &token_set(ngram_tokens(b, n).into_iter()),
    )
}

// ==================== Sørensen-Dice ====================

/// Sørensen-Dice similarity of two distinct-token sets.
#[must_use]
pub fn dice_from_sets<T: Hash + Eq>(a: &AHashSet<T>, b: &AHashSet<T>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = intersection_size(a, b);
    (2 * intersection) as f64 / (a.len() + b.len()) as f64
}

/// Dice similarity over the distinct codepoints of two strings.
#[inline]
#[must_use]
pub fn dice_similarity_chars(a: &str, b: &str) -> f64 {
    dice_from_sets(&token_set(a.chars()), &token_set(b.chars()))
}

/// Dice similarity over the distinct words of two strings.
#[inline]
#[must_use]
pub fn dice_similarity_words(a: &str, b: &str) -> f64 {
    dice_from_sets(&token_set(word_tokens(a)), &token_set(word_tokens(b)))
}

/// Dice similarity over the distinct codepoint n-grams of two strings.
#[inline]
#[must_use]
pub fn dice_similarity_ngrams(a: &str, b: &str, n: usize) -> f64 {
    dice_from_sets(
        &token_set(ngram_tokens(a, n).into_iter()),
        &token_set(ngram_tokens(b, n).into_iter()),
    )
}

// ==================== Overlap coefficient ====================

/// Overlap coefficient of two distinct-token sets.
#[must_use]
pub fn overlap_from_sets<T: Hash + Eq>(a: &AHashSet<T>, b: &AHashSet<T>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = intersection_size(a, b);
    intersection as f64 / a.len().min(b.len()) as f64
}

/// Overlap coefficient over the distinct codepoints of two strings.
#[inline]
#[must_use]
pub fn overlap_similarity_chars(a: &str, b: &str) -> f64 {
    overlap_from_sets(&token_set(a.chars()), &token_set(b.chars()))
}

/// Overlap coefficient over the distinct words of two strings.
#[inline]
#[must_use]
pub fn overlap_similarity_words(a: &str, b: &str) -> f64 {
    overlap_from_sets(&token_set(word_tokens(a)), &token_set(word_tokens(b)))
}

/// Overlap coefficient over the distinct codepoint n-grams of two strings.
#[inline]
#[must_use]
pub fn overlap_similarity_ngrams(a: &str, b: &str, n: usize) -> f64 {
    overlap_from_sets(
        &token_set(ngram_tokens(a, n).into_iter()),
        &token_set(ngram_tokens(b, n).into_iter()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_character_sets_share_denominator_structure() {
        // hello {h,e,l,o} vs hallo {h,a,l,o}: 3 shared, 5 in the union.
        assert!((jaccard_similarity_chars("hello", "hallo") - 3.0 / 5.0).abs() < TOLERANCE);
        assert!((dice_similarity_chars("hello", "hallo") - 0.75).abs() < TOLERANCE);
        assert!((overlap_similarity_chars("hello", "hallo") - 0.75).abs() < TOLERANCE);
    }

    #[test]
    fn test_kitten_sitting_character_profile() {
        assert!((jaccard_similarity_chars("kitten", "sitting") - 3.0 / 7.0).abs() < TOLERANCE);
        assert!((dice_similarity_chars("kitten", "sitting") - 0.6).abs() < TOLERANCE);
        assert!((overlap_similarity_chars("kitten", "sitting") - 0.6).abs() < TOLERANCE);
    }

    #[test]
    fn test_bigrams_are_stricter_than_characters() {
        // night/nacht share three characters but only the "ht" bigram.
        assert!((jaccard_similarity_chars("night", "nacht") - 3.0 / 7.0).abs() < TOLERANCE);
        assert!((jaccard_similarity_ngrams("night", "nacht", 2) - 1.0 / 7.0).abs() < TOLERANCE);
        assert!((dice_similarity_ngrams("night", "nacht", 2) - 0.25).abs() < TOLERANCE);
        assert!((overlap_similarity_ngrams("night", "nacht", 2) - 0.25).abs() < TOLERANCE);
    }

    #[test]
    fn test_overlap_detects_containment() {
        // Every bigram of "bcd" appears in "abcde".
        assert!((overlap_similarity_ngrams("bcd", "abcde", 2) - 1.0).abs() < TOLERANCE);
        assert!((jaccard_similarity_ngrams("bcd", "abcde", 2) - 0.5).abs() < TOLERANCE);
        assert!((dice_similarity_ngrams("bcd", "abcde", 2) - 2.0 / 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_word_sets_ignore_ordering() {
        let a = "the quick brown fox";
        let b = "the brown fox jumps";
        assert!((jaccard_similarity_words(a, b) - 0.6).abs() < TOLERANCE);
        assert!((dice_similarity_words(a, b) - 0.75).abs() < TOLERANCE);
        assert!((overlap_similarity_words(a, b) - 0.75).abs() < TOLERANCE);
        assert!((jaccard_similarity_words("one two", "two one") - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_repeated_tokens_collapse_into_the_set() {
        // aab and abb have identical distinct-character sets.
        assert!((jaccard_similarity_chars("aab", "abb") - 1.0).abs() < TOLERANCE);
        assert!((dice_similarity_chars("aab", "abb") - 1.0).abs() < TOLERANCE);
        assert!((overlap_similarity_chars("aab", "abb") - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_empty_input_conventions() {
        for f in [
            jaccard_similarity_chars,
            dice_similarity_chars,
            overlap_similarity_chars,
        ] {
            assert!((f("", "") - 1.0).abs() < TOLERANCE);
            assert!(f("", "abc").abs() < TOLERANCE);
            assert!(f("abc", "").abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_short_inputs_fall_back_to_whole_string_tokens() {
        // Below the window size each string is its own sole token.
        assert!(jaccard_similarity_ngrams("a", "ab", 3).abs() < TOLERANCE);
        assert!((jaccard_similarity_ngrams("ab", "ab", 5) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_disjoint_inputs_score_zero() {
        assert!(jaccard_similarity_chars("abc", "xyz").abs() < TOLERANCE);
        assert!(dice_similarity_words("alpha beta", "gamma delta").abs() < TOLERANCE);
        assert!(overlap_similarity_ngrams("abcd", "wxyz", 2).abs() < TOLERANCE);
    }

    #[test]
    fn test_unicode_tokens_compare_by_codepoint() {
        assert!((jaccard_similarity_chars("日本語", "日本") - 2.0 / 3.0).abs() < TOLERANCE);
    }
}
