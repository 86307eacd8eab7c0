//! Damerau-Levenshtein edit distance, optimal string alignment variant.
//!
//! Extends Levenshtein with a fourth operation: swapping two adjacent
//! codepoints. This is the restricted (OSA) form, where no substring is
//! edited more than once, so a transposed pair cannot also participate in
//! later insertions. The distinction shows up on pairs like `"ca"` and
//! `"abc"`: OSA needs 3 edits where the unrestricted form needs 2.
//!
//! # Complexity
//!
//! `O(m·n)` time, `O(n)` space via three rolling rows.

use smallvec::{smallvec, SmallVec};

fn osa_core(a: &[char], b: &[char], max_distance: Option<usize>) -> Option<usize> {
    let m = a.len();
    let n = b.len();
    if let Some(max) = max_distance {
        if m.abs_diff(n) > max {
            return None;
        }
    }
    if m == 0 || n == 0 {
        let d = m.max(n);
        return match max_distance {
            Some(max) if d > max => None,
            _ => Some(d),
        };
    }

    // prev2 = row i-2, prev = row i-1, curr = row i.
    let mut prev2: SmallVec<[usize; 64]> = smallvec![0; n + 1];
    let mut prev: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr: SmallVec<[usize; 64]> = smallvec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        let mut row_min = curr[0];
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut d = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d = d.min(prev2[j - 2] + 1);
            }
            curr[j] = d;
            row_min = row_min.min(d);
        }
        if let Some(max) = max_distance {
            if row_min > max {
                return None;
            }
        }
        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    let result = prev[n];
    match max_distance {
        Some(max) if result > max => None,
        _ => Some(result),
    }
}

/// Optimal-string-alignment distance between `a` and `b`.
#[must_use]
pub fn osa_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    // Unbounded, so the core always yields a value.
    osa_core(&a_chars, &b_chars, None).unwrap_or(0)
}

/// OSA distance capped at `max_distance`; `None` once the cap is provably
/// exceeded.
#[must_use]
pub fn osa_distance_bounded(a: &str, b: &str, max_distance: usize) -> Option<usize> {
    if a == b {
        return Some(0);
    }
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    osa_core(&a_chars, &b_chars, Some(max_distance))
}

/// Normalized OSA similarity, `1 - d / max(|a|, |b|)`.
#[inline]
#[must_use]
pub fn osa_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - (osa_distance(a, b) as f64 / max_len as f64)
}

/// Damerau-Levenshtein metric (OSA variant), optionally capped.
#[derive(Debug, Clone, Copy)]
pub struct DamerauLevenshtein {
    max_distance: Option<usize>,
}

impl DamerauLevenshtein {
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
            Some(max) => osa_distance_bounded(a, b, max),
            None => Some(osa_distance(a, b)),
        }
    }
}

impl Default for DamerauLevenshtein {
    fn default() -> Self {
        Self::new()
    }
}

impl super::EditDistance for DamerauLevenshtein {
    /// A capped metric saturates at `max_distance + 1`.
    fn distance(&self, a: &str, b: &str) -> usize {
        match self.max_distance {
            Some(max) => osa_distance_bounded(a, b, max).unwrap_or(max.saturating_add(1)),
            None => osa_distance(a, b),
        }
    }

    fn name(&self) -> &'static str {
        "damerau-levenshtein"
    }
}
