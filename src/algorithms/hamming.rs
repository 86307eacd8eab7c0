//! Hamming distance over equal-length strings.
//!
//! Counts positions at which the two inputs carry different codepoints.
//! Defined only when both sides have the same codepoint length; unequal
//! inputs are not comparable and yield `None`.

use smallvec::SmallVec;

/// Number of differing positions, or `None` on a codepoint-length mismatch.
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    if a_chars.len() != b_chars.len() {
        return None;
    }
    Some(
        a_chars
            .iter()
            .zip(b_chars.iter())
            .filter(|(x, y)| x != y)
            .count(),
    )
}

/// Normalized Hamming similarity, `1 - d / len`, or `None` on mismatch.
#[must_use]
pub fn hamming_similarity(a: &str, b: &str) -> Option<f64> {
    let len = a.chars().count();
    if len != b.chars().count() {
        return None;
    }
    if len == 0 {
        return Some(1.0);
    }
    hamming_distance(a, b).map(|d| 1.0 - (d as f64 / len as f64))
}

/// Hamming metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hamming;

impl super::FallibleEditDistance for Hamming {
    fn distance(&self, a: &str, b: &str) -> Option<usize> {
        hamming_distance(a, b)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

/// In similarity position a length mismatch scores zero. The fallible
/// distance remains the strict surface; the dispatch layer uses it to
/// report mismatches as errors.
impl super::Similarity for Hamming {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        hamming_similarity(a, b).unwrap_or(0.0)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::FallibleEditDistance;

    #[test]
    fn test_counts_differing_positions() {
        assert_eq!(hamming_distance("karolin", "kathrin"), Some(3));
        assert_eq!(hamming_distance("1011101", "1001001"), Some(2));
        assert_eq!(hamming_distance("same", "same"), Some(0));
    }

    #[test]
    fn test_length_mismatch_is_not_comparable() {
        assert_eq!(hamming_distance("abc", "abcd"), None);
        assert_eq!(hamming_distance("", "a"), None);
    }

    #[test]
    fn test_codepoint_lengths_not_byte_lengths() {
        // Equal codepoint counts despite different byte counts.
        assert_eq!(hamming_distance("αβγ", "αβδ"), Some(1));
        assert_eq!(hamming_distance("café", "cafe"), Some(1));
    }

    #[test]
    fn test_both_empty_are_identical() {
        assert_eq!(hamming_distance("", ""), Some(0));
        assert_eq!(hamming_similarity("", ""), Some(1.0));
    }

    #[test]
    fn test_similarity_normalizes_by_common_length() {
        let sim = hamming_similarity("karolin", "kathrin").unwrap();
        assert!((sim - (1.0 - 3.0 / 7.0)).abs() < 1e-9);
        assert_eq!(hamming_similarity("ab", "abc"), None);
    }

    #[test]
    fn test_trait_surface_matches_free_functions() {
        assert_eq!(Hamming.distance("karolin", "kathrin"), Some(3));
        assert_eq!(Hamming.distance("ab", "abc"), None);
    }
}
