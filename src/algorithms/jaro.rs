//! Jaro and Jaro-Winkler similarity.
//!
//! Jaro scores short strings by shared characters within a sliding match
//! window plus an ordering penalty for transposed matches. Jaro-Winkler
//! adds a bonus proportional to the length of the common prefix, which
//! favors strings that agree at the start; the bonus always applies, with
//! no minimum base score gating it.
//!
//! ASCII inputs run over raw bytes; anything else falls back to a
//! codepoint buffer. Both paths share one generic core.
//!
//! # Complexity
//!
//! `O(m·w)` time where `w` is the match window, `O(m + n)` space for the
//! match flags.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Default prefix bonus scaling factor.
pub const DEFAULT_PREFIX_WEIGHT: f64 = 0.1;

/// Default (and maximum meaningful) common-prefix length for the bonus.
pub const DEFAULT_MAX_PREFIX_LENGTH: usize = 4;

/// Largest prefix weight that keeps scores inside `[0, 1]`.
pub const MAX_PREFIX_WEIGHT: f64 = 0.25;

// ==================== Core ====================

/// Jaro similarity over two non-empty token slices.
fn jaro_core<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let a_len = a.len();
    let b_len = b.len();

    // Matches may sit at most this far apart, measured in positions.
    let match_window = (a_len.max(b_len) / 2).saturating_sub(1);

    let mut a_matched: SmallVec<[bool; 64]> = smallvec![false; a_len];
    let mut b_matched: SmallVec<[bool; 64]> = smallvec![false; b_len];
    let mut matches = 0usize;

    for i in 0..a_len {
        let start = i.saturating_sub(match_window);
        let end = (i + match_window + 1).min(b_len);
        for j in start..end {
            if !b_matched[j] && a[i] == b[j] {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk both matched sequences in order; each out-of-place pair counts
    // half a transposition.
    let mut transpositions = 0usize;
    let mut k = 0usize;
    for i in 0..a_len {
        if a_matched[i] {
            while !b_matched[k] {
                k += 1;
            }
            if a[i] != b[k] {
                transpositions += 1;
            }
            k += 1;
        }
    }

    let m = matches as f64;
    let t = (transpositions / 2) as f64;
    (m / a_len as f64 + m / b_len as f64 + (m - t) / m) / 3.0
}

// ==================== Public API ====================

/// Jaro similarity in `[0.0, 1.0]`.
///
/// Both inputs empty score `1.0`; exactly one empty scores `0.0`.
#[must_use]
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a.is_ascii() && b.is_ascii() {
        jaro_core(a.as_bytes(), b.as_bytes())
    } else {
        let a_chars: SmallVec<[char; 64]> = a.chars().collect();
        let b_chars: SmallVec<[char; 64]> = b.chars().collect();
        jaro_core(&a_chars, &b_chars)
    }
}

/// Jaro-Winkler similarity with the standard prefix parameters.
#[inline]
#[must_use]
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    jaro_winkler_similarity_params(a, b, DEFAULT_PREFIX_WEIGHT, DEFAULT_MAX_PREFIX_LENGTH)
}

/// Jaro-Winkler similarity with explicit prefix weight and cap.
///
/// The bonus is `prefix_len * weight * (1 - jaro)` where `prefix_len`
/// counts common leading codepoints up to `max_prefix_length`. Weights
/// outside `[0, 0.25]` are clamped; larger values could push scores
/// past `1.0`.
#[must_use]
pub fn jaro_winkler_similarity_params(
    a: &str,
    b: &str,
    prefix_weight: f64,
    max_prefix_length: usize,
) -> f64 {
    let jaro = jaro_similarity(a, b);
    if jaro == 0.0 {
        return 0.0;
    }
    let weight = prefix_weight.clamp(0.0, MAX_PREFIX_WEIGHT);
    let prefix_len = a
        .chars()
        .zip(b.chars())
        .take(max_prefix_length)
        .take_while(|(x, y)| x == y)
        .count();
    let score = jaro + (prefix_len as f64) * weight * (1.0 - jaro);
    score.clamp(0.0, 1.0)
}

/// Jaro metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jaro;

impl super::Similarity for Jaro {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "jaro"
    }
}

/// Prefix bonus parameters for [`JaroWinkler`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JaroWinklerConfig {
    /// Bonus per common prefix codepoint, clamped to `[0, 0.25]`.
    pub prefix_weight: f64,
    /// Longest prefix that earns the bonus.
    pub max_prefix_length: usize,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        Self {
            prefix_weight: DEFAULT_PREFIX_WEIGHT,
            max_prefix_length: DEFAULT_MAX_PREFIX_LENGTH,
        }
    }
}

/// Jaro-Winkler metric.
#[derive(Debug, Clone, Copy)]
pub struct JaroWinkler {
    config: JaroWinklerConfig,
}

impl JaroWinkler {
    /// Metric with the standard prefix parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: JaroWinklerConfig::default(),
        }
    }

    /// Metric with explicit parameters; the weight is clamped into its
    /// safe range.
    #[must_use]
    pub fn from_config(config: JaroWinklerConfig) -> Self {
        Self {
            config: JaroWinklerConfig {
                prefix_weight: config.prefix_weight.clamp(0.0, MAX_PREFIX_WEIGHT),
                max_prefix_length: config.max_prefix_length,
            },
        }
    }

    /// Current parameters.
    #[must_use]
    pub fn config(&self) -> JaroWinklerConfig {
        self.config
    }
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Similarity for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_winkler_similarity_params(
            a,
            b,
            self.config.prefix_weight,
            self.config.max_prefix_length,
        )
    }

    fn name(&self) -> &'static str {
        "jaro-winkler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_classic_jaro_pairs() {
        assert!(approx_eq(jaro_similarity("martha", "marhta"), 0.944));
        assert!(approx_eq(jaro_similarity("dwayne", "duane"), 0.822));
        assert!(approx_eq(jaro_similarity("dixon", "dicksonx"), 0.767));
        assert!(approx_eq(jaro_similarity("hello", "hallo"), 0.867));
    }

    #[test]
    fn test_empty_string_conventions() {
        assert!(approx_eq(jaro_similarity("", ""), 1.0));
        assert!(approx_eq(jaro_similarity("", "abc"), 0.0));
        assert!(approx_eq(jaro_similarity("abc", ""), 0.0));
    }

    #[test]
    fn test_no_shared_characters_scores_zero() {
        assert!(approx_eq(jaro_similarity("abc", "xyz"), 0.0));
        assert!(approx_eq(jaro_winkler_similarity("abc", "xyz"), 0.0));
    }

    #[test]
    fn test_match_window_clamps_to_zero_for_short_inputs() {
        // Window 0: only same-position characters can match.
        assert!(approx_eq(jaro_similarity("ab", "ba"), 0.0));
        assert!(approx_eq(jaro_similarity("aa", "aaa"), 0.889));
    }

    #[test]
    fn test_transpositions_cost_half_a_match_each_pair() {
        // martha/marhta: six matches, one transposition pair.
        let expected = (1.0 + 1.0 + 5.0 / 6.0) / 3.0;
        assert!((jaro_similarity("martha", "marhta") - expected).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric_in_its_arguments() {
        for (a, b) in [("martha", "marhta"), ("dixon", "dicksonx"), ("ab", "")] {
            assert!((jaro_similarity(a, b) - jaro_similarity(b, a)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_unicode_path_agrees_with_ascii_semantics() {
        assert!(approx_eq(jaro_similarity("über", "uber"), 0.833));
        assert!(approx_eq(jaro_similarity("日本語", "日本"), 0.889));
    }

    #[test]
    fn test_winkler_bonus_scales_with_common_prefix() {
        let jaro = jaro_similarity("martha", "marhta");
        let jw = jaro_winkler_similarity("martha", "marhta");
        assert!((jw - (jaro + 3.0 * 0.1 * (1.0 - jaro))).abs() < 1e-9);
        assert!(approx_eq(jw, 0.961));
    }

    #[test]
    fn test_winkler_prefix_is_capped() {
        // Five common leading characters, only four earn the bonus.
        let jaro = jaro_similarity("prefixing", "prefixes");
        let jw = jaro_winkler_similarity("prefixing", "prefixes");
        assert!((jw - (jaro + 4.0 * 0.1 * (1.0 - jaro))).abs() < 1e-9);
    }

    #[test]
    fn test_winkler_bonus_applies_at_low_base_scores() {
        // No gating threshold: a base score under 0.7 still earns its bonus.
        let jaro = jaro_similarity("prefix", "pzzzzz");
        assert!(jaro < 0.7);
        let jw = jaro_winkler_similarity("prefix", "pzzzzz");
        assert!((jw - (jaro + 1.0 * 0.1 * (1.0 - jaro))).abs() < 1e-9);
        assert!((jw - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_winkler_matches_published_values() {
        let jaro = jaro_similarity("dixon", "dicksonx");
        let jw = jaro_winkler_similarity("dixon", "dicksonx");
        assert!((jw - (jaro + 2.0 * 0.1 * (1.0 - jaro))).abs() < 1e-9);
        assert!(approx_eq(jw, 0.813));
    }

    #[test]
    fn test_oversized_weights_are_clamped() {
        let tame = jaro_winkler_similarity_params("martha", "marhta", 0.9, 4);
        assert!(tame <= 1.0);
        let expected = jaro_winkler_similarity_params("martha", "marhta", 0.25, 4);
        assert!((tame - expected).abs() < 1e-12);
    }

    #[test]
    fn test_config_round_trips_through_the_struct() {
        use crate::algorithms::Similarity;
        let metric = JaroWinkler::from_config(JaroWinklerConfig {
            prefix_weight: 0.2,
            max_prefix_length: 2,
        });
        assert_eq!(metric.config().max_prefix_length, 2);
        let jaro = jaro_similarity("martha", "marhta");
        let expected = jaro + 2.0 * 0.2 * (1.0 - jaro);
        assert!((metric.similarity("martha", "marhta") - expected).abs() < 1e-9);
    }
}
