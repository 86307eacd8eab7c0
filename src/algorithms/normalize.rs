//! Input normalization applied before comparison.
//!
//! Metrics in this crate compare strings verbatim; callers opt into
//! normalization through the dispatch options. `Lowercase` gives
//! case-insensitive comparison, `UnicodeNFKD` folds compatibility forms so
//! visually equivalent sequences compare equal, and `Strict` combines
//! every mode for aggressive matching of noisy input.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Normalization applied to both inputs before any metric runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NormalizationMode {
    /// Unicode-aware lowercasing.
    Lowercase,
    /// Unicode NFKD compatibility decomposition.
    UnicodeNFKD,
    /// Drop ASCII punctuation.
    RemovePunctuation,
    /// Drop all whitespace.
    RemoveWhitespace,
    /// Lowercase, decompose, then drop punctuation and whitespace.
    Strict,
}

/// Apply `mode` to a single string.
#[must_use]
pub fn normalize_string(s: &str, mode: NormalizationMode) -> String {
    match mode {
        NormalizationMode::Lowercase => s.to_lowercase(),
        NormalizationMode::UnicodeNFKD => s.nfkd().collect(),
        NormalizationMode::RemovePunctuation => {
            s.chars().filter(|c| !c.is_ascii_punctuation()).collect()
        }
        NormalizationMode::RemoveWhitespace => s.chars().filter(|c| !c.is_whitespace()).collect(),
        NormalizationMode::Strict => s
            .to_lowercase()
            .nfkd()
            .filter(|c| !c.is_ascii_punctuation() && !c.is_whitespace())
            .collect(),
    }
}

/// Apply `mode` to both sides of a comparison.
#[must_use]
pub fn normalize_pair(a: &str, b: &str, mode: NormalizationMode) -> (String, String) {
    (normalize_string(a, mode), normalize_string(b, mode))
}
