//! Levenshtein edit distance.
//!
//! Counts the minimum number of single-codepoint insertions, deletions,
//! and substitutions transforming one string into the other. Two engines
//! sit behind the public functions:
//!
//! - a Myers bit-parallel engine for patterns of at most 64 codepoints,
//!   processing one text character per word-sized step
//! - a single-row dynamic-programming engine for longer inputs
//!
//! The shorter input is always used as the pattern, so the bit-parallel
//! path covers any comparison where either side fits in one machine word.
//!
//! # Complexity
//!
//! Bit-parallel: `O(n)` time, `O(σ)` space for the character masks.
//! Dynamic programming: `O(m·n)` time, `O(min(m, n))` space.

use ahash::AHashMap;
use smallvec::SmallVec;

/// Widest pattern the bit-parallel engine accepts, in codepoints.
const BIT_PARALLEL_MAX: usize = 64;

// ==================== Myers bit-parallel engine ====================

/// Bitmask per pattern character: bit `i` set where `pattern[i] == c`.
fn pattern_masks(pattern: &[char]) -> AHashMap<char, u64> {
    let mut masks: AHashMap<char, u64> = AHashMap::with_capacity(pattern.len());
    for (i, &c) in pattern.iter().enumerate() {
        *masks.entry(c).or_insert(0) |= 1 << i;
    }
    masks
}

/// Myers 1999 bit-parallel distance for patterns of at most 64 codepoints.
///
/// `vp`/`vn` hold the positive and negative vertical deltas of the current
/// DP column; each text character updates them in constant time.
fn myers_distance(pattern: &[char], text: &[char]) -> usize {
    debug_assert!(!pattern.is_empty() && pattern.len() <= BIT_PARALLEL_MAX);

    let m = pattern.len();
    let masks = pattern_masks(pattern);
    let mut vp: u64 = if m == BIT_PARALLEL_MAX { u64::MAX } else { (1 << m) - 1 };
    let mut vn: u64 = 0;
    let mut score = m;
    let last = 1u64 << (m - 1);

    for &c in text {
        let eq = masks.get(&c).copied().unwrap_or(0);
        let d0 = (((eq & vp).wrapping_add(vp)) ^ vp) | eq | vn;
        let hp = vn | !(d0 | vp);
        let hn = vp & d0;
        if hp & last != 0 {
            score += 1;
        }
        if hn & last != 0 {
            score -= 1;
        }
        let hp_shifted = (hp << 1) | 1;
        vp = (hn << 1) | !(d0 | hp_shifted);
        vn = hp_shifted & d0;
    }
    score
}

/// Bounded variant: bails out once the score can no longer come back
/// under `max_distance` even if every remaining character matched.
fn myers_distance_bounded(pattern: &[char], text: &[char], max_distance: usize) -> Option<usize> {
    debug_assert!(!pattern.is_empty() && pattern.len() <= BIT_PARALLEL_MAX);

    let m = pattern.len();
    let masks = pattern_masks(pattern);
    let mut vp: u64 = if m == BIT_PARALLEL_MAX { u64::MAX } else { (1 << m) - 1 };
    let mut vn: u64 = 0;
    let mut score = m;
    let last = 1u64 << (m - 1);

    for (j, &c) in text.iter().enumerate() {
        let eq = masks.get(&c).copied().unwrap_or(0);
        let d0 = (((eq & vp).wrapping_add(vp)) ^ vp) | eq | vn;
        let hp = vn | !(d0 | vp);
        let hn = vp & d0;
        if hp & last != 0 {
            score += 1;
        }
        if hn & last != 0 {
            score -= 1;
        }
        let hp_shifted = (hp << 1) | 1;
        vp = (hn << 1) | !(d0 | hp_shifted);
        vn = hp_shifted & d0;

        let remaining = text.len() - j - 1;
        if score.saturating_sub(remaining) > max_distance {
            return None;
        }
    }
    (score <= max_distance).then_some(score)
}

// ==================== Dynamic-programming engine ====================

/// Single-row DP over the shorter string, for patterns past the
/// bit-parallel width.
fn dp_distance(a: &[char], b: &[char]) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut row: SmallVec<[usize; 64]> = (0..=short.len()).collect();
    for (i, &lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            let next = (row[j] + 1).min(row[j + 1] + 1).min(diagonal + cost);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }
    row[short.len()]
}

/// Bounded single-row DP: abandons the computation once every cell of a
/// row exceeds `max_distance`.
fn dp_distance_bounded(a: &[char], b: &[char], max_distance: usize) -> Option<usize> {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut row: SmallVec<[usize; 64]> = (0..=short.len()).collect();
    for (i, &lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];
        for (j, &sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            let next = (row[j] + 1).min(row[j + 1] + 1).min(diagonal + cost);
            diagonal = row[j + 1];
            row[j + 1] = next;
            row_min = row_min.min(next);
        }
        if row_min > max_distance {
            return None;
        }
    }
    let result = row[short.len()];
    (result <= max_distance).then_some(result)
}

// ==================== Public API ====================

/// Levenshtein distance between `a` and `b` in codepoint edits.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let (pattern, text) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };
    if pattern.len() <= BIT_PARALLEL_MAX {
        myers_distance(pattern, text)
    } else {
        dp_distance(pattern, text)
    }
}

/// Levenshtein distance capped at `max_distance`.
///
/// Returns `None` as soon as the distance provably exceeds the cap, which
/// makes candidate filtering much cheaper than computing exact distances.
#[must_use]
pub fn levenshtein_distance_bounded(a: &str, b: &str, max_distance: usize) -> Option<usize> {
    if a == b {
        return Some(0);
    }
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    if a_chars.len().abs_diff(b_chars.len()) > max_distance {
        return None;
    }
    if a_chars.is_empty() {
        return Some(b_chars.len());
    }
    if b_chars.is_empty() {
        return Some(a_chars.len());
    }

    let (pattern, text) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };
    if pattern.len() <= BIT_PARALLEL_MAX {
        myers_distance_bounded(pattern, text, max_distance)
    } else {
        dp_distance_bounded(pattern, text, max_distance)
    }
}

/// Normalized Levenshtein similarity, `1 - d / max(|a|, |b|)`.
#[inline]
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - (levenshtein(a, b) as f64 / max_len as f64)
}

/// Levenshtein metric, optionally capped for early-exit filtering.
#[derive(Debug, Clone, Copy)]
pub struct Levenshtein {
    max_distance: Option<usize>,
}

impl Levenshtein {
    /// Unbounded metric.
    #[must_use]
    pub fn new() -> Self {
        Self { max_distance: None }
    }

    /// Metric that stops early once `max_distance` is exceeded.
    #[must_use]
    pub fn with_max_distance(max_distance: usize) -> Self {
        Self {
            max_distance: Some(max_distance),
        }
    }

    /// Distance, or `None` when a configured cap is exceeded.
    #[must_use]
    pub fn compute(&self, a: &str, b: &str) -> Option<usize> {
        match self.max_distance {
            Some(max) => levenshtein_distance_bounded(a, b, max),
            None => Some(levenshtein(a, b)),
        }
    }
}

impl Default for Levenshtein {
    fn default() -> Self {
        Self::new()
    }
}

impl super::EditDistance for Levenshtein {
    /// A capped metric saturates at `max_distance + 1` instead of paying
    /// for the exact value.
    fn distance(&self, a: &str, b: &str) -> usize {
        match self.max_distance {
            Some(max) => levenshtein_distance_bounded(a, b, max).unwrap_or(max.saturating_add(1)),
            None => levenshtein(a, b),
        }
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_pairs() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("gumbo", "gambol"), 2);
    }

    #[test]
    fn test_empty_string_base_cases() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("", "hello"), 5);
        assert_eq!(levenshtein("hello", ""), 5);
    }

    #[test]
    fn test_identical_strings_short_circuit() {
        assert_eq!(levenshtein("same", "same"), 0);
        assert_eq!(levenshtein("日本語", "日本語"), 0);
    }

    #[test]
    fn test_multibyte_characters_count_as_one_edit() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("日本語", "日本"), 1);
        assert_eq!(levenshtein("αβγ", "αβδ"), 1);
    }

    #[test]
    fn test_symmetric_in_its_arguments() {
        let pairs = [("kitten", "sitting"), ("abc", ""), ("café", "cafe")];
        for (a, b) in pairs {
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
        }
    }

    #[test]
    fn test_dp_engine_agrees_with_bit_parallel() {
        // Both sides past the 64-codepoint pattern limit.
        let a = "a".repeat(70);
        let b = format!("{}bbbbb", "a".repeat(65));
        assert_eq!(levenshtein(&a, &b), 5);

        let c = format!("{}xyz", "m".repeat(80));
        assert_eq!(levenshtein(&c, &"m".repeat(80)), 3);
    }

    #[test]
    fn test_bounded_rejects_past_the_cap() {
        assert_eq!(levenshtein_distance_bounded("kitten", "sitting", 2), None);
        assert_eq!(levenshtein_distance_bounded("kitten", "sitting", 3), Some(3));
        assert_eq!(levenshtein_distance_bounded("same", "same", 0), Some(0));
    }

    #[test]
    fn test_bounded_uses_length_gap_as_cheap_filter() {
        assert_eq!(levenshtein_distance_bounded("ab", "abcdef", 3), None);
    }

    #[test]
    fn test_bounded_dp_path_for_long_inputs() {
        let a = "a".repeat(70);
        let b = format!("{}bbbbb", "a".repeat(65));
        assert_eq!(levenshtein_distance_bounded(&a, &b, 4), None);
        assert_eq!(levenshtein_distance_bounded(&a, &b, 5), Some(5));
    }

    #[test]
    fn test_struct_cap_saturates_trait_distance() {
        use crate::algorithms::EditDistance;
        let capped = Levenshtein::with_max_distance(2);
        assert_eq!(capped.compute("kitten", "sitting"), None);
        assert_eq!(EditDistance::distance(&capped, "kitten", "sitting"), 3);
        assert_eq!(Levenshtein::new().compute("kitten", "sitting"), Some(3));
    }

    #[test]
    fn test_unlimited_cap_behaves_like_no_cap() {
        use crate::algorithms::EditDistance;
        // usize::MAX is the natural "no limit" cap and must not overflow
        // the early-exit or the saturation sentinel.
        assert_eq!(levenshtein_distance_bounded("ab", "ba", usize::MAX), Some(2));
        assert_eq!(
            levenshtein_distance_bounded("kitten", "sitting", usize::MAX),
            Some(3)
        );

        let uncapped = Levenshtein::with_max_distance(usize::MAX);
        assert_eq!(EditDistance::distance(&uncapped, "kitten", "sitting"), 3);
        let sim = EditDistance::similarity(&uncapped, "kitten", "sitting");
        assert!((sim - (1.0 - 3.0 / 7.0)).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_normalizes_by_longer_input() {
        assert!((levenshtein_similarity("kitten", "sitting") - (1.0 - 3.0 / 7.0)).abs() < 1e-9);
        assert!((levenshtein_similarity("", "") - 1.0).abs() < 1e-9);
        assert!(levenshtein_similarity("abc", "xyz").abs() < 1e-9);
    }

    #[test]
    fn test_full_word_replacement() {
        assert_eq!(levenshtein("intention", "execution"), 5);
        assert_eq!(levenshtein("algorithm", "logarithm"), 3);
    }
}
