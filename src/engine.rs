//! Algorithm selection, parameter validation and dispatch.
//!
//! This module is the front door of the crate: callers name an
//! [`AlgorithmKind`], hand over an [`AlgorithmOptions`] record, and get a
//! score or a typed error back. Validation happens once, up front:
//! [`Metric::from_options`] checks every parameter the chosen kind consumes
//! and returns a [`Metric`] whose evaluation can no longer fail on
//! parameters. Recognized parameters with out-of-domain values are
//! rejected, never clamped or coerced; parameters a kind does not consume
//! are ignored.
//!
//! Distances are defined for the edit family only (Levenshtein,
//! Damerau-Levenshtein, Hamming); asking any other kind for an integer
//! distance fails with [`SimilarityError::UnsupportedAlgorithm`].
//! Similarity is defined for every kind, with the edit family normalized
//! by the longer input.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::algorithms::jaro::{DEFAULT_MAX_PREFIX_LENGTH, DEFAULT_PREFIX_WEIGHT};
use crate::algorithms::minkowski::{
    chebyshev_similarity_from_counts, euclidean_similarity_from_counts,
    manhattan_similarity_from_counts,
};
use crate::algorithms::{
    cosine_from_counts, dice_from_sets, hamming_distance, hamming_similarity, jaccard_from_sets,
    jaro_similarity, jaro_winkler_similarity_params, levenshtein, levenshtein_similarity,
    normalize_pair, osa_distance, osa_similarity, overlap_from_sets, tversky_from_sets,
    JaroWinklerConfig, NormalizationMode, TverskyWeights,
};
use crate::error::SimilarityError;
use crate::tokenize::{token_counts, token_set, tokenize, PreprocessingMode};

// ==================== Algorithm kinds ====================

/// The closed set of supported algorithms.
///
/// Canonical names are kebab-case and lowercase; [`FromStr`] also accepts
/// snake_case and mixed-case spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    /// Edit distance counting insertions, deletions and substitutions.
    Levenshtein,
    /// Edit distance additionally counting adjacent transpositions
    /// (optimal string alignment).
    DamerauLevenshtein,
    /// Substitution count over equal-length inputs.
    Hamming,
    /// Match-window similarity for short strings.
    Jaro,
    /// Jaro with a common-prefix bonus.
    JaroWinkler,
    /// Intersection over union of distinct token sets.
    Jaccard,
    /// Dice coefficient over distinct token sets.
    SorensenDice,
    /// Intersection over the smaller distinct token set.
    Overlap,
    /// Cosine of the angle between token frequency vectors.
    Cosine,
    /// Asymmetrically weighted set similarity.
    Tversky,
    /// L2 distance between token frequency vectors, as `exp(-d)`.
    Euclidean,
    /// L1 distance between token frequency vectors, as `1 / (1 + d)`.
    Manhattan,
    /// L∞ distance between token frequency vectors, as `exp(-d)`.
    Chebyshev,
}

impl AlgorithmKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [AlgorithmKind; 13] = [
        AlgorithmKind::Levenshtein,
        AlgorithmKind::DamerauLevenshtein,
        AlgorithmKind::Hamming,
        AlgorithmKind::Jaro,
        AlgorithmKind::JaroWinkler,
        AlgorithmKind::Jaccard,
        AlgorithmKind::SorensenDice,
        AlgorithmKind::Overlap,
        AlgorithmKind::Cosine,
        AlgorithmKind::Tversky,
        AlgorithmKind::Euclidean,
        AlgorithmKind::Manhattan,
        AlgorithmKind::Chebyshev,
    ];

    /// Canonical kebab-case name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::Levenshtein => "levenshtein",
            AlgorithmKind::DamerauLevenshtein => "damerau-levenshtein",
            AlgorithmKind::Hamming => "hamming",
            AlgorithmKind::Jaro => "jaro",
            AlgorithmKind::JaroWinkler => "jaro-winkler",
            AlgorithmKind::Jaccard => "jaccard",
            AlgorithmKind::SorensenDice => "sorensen-dice",
            AlgorithmKind::Overlap => "overlap",
            AlgorithmKind::Cosine => "cosine",
            AlgorithmKind::Tversky => "tversky",
            AlgorithmKind::Euclidean => "euclidean",
            AlgorithmKind::Manhattan => "manhattan",
            AlgorithmKind::Chebyshev => "chebyshev",
        }
    }

    /// Whether the kind defines an integer edit distance.
    #[must_use]
    pub fn is_distance_capable(&self) -> bool {
        matches!(
            self,
            AlgorithmKind::Levenshtein | AlgorithmKind::DamerauLevenshtein | AlgorithmKind::Hamming
        )
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = s.to_lowercase().replace('_', "-");
        AlgorithmKind::ALL
            .into_iter()
            .find(|kind| kind.name() == canonical)
            .ok_or_else(|| {
                SimilarityError::UnsupportedAlgorithm(format!(
                    "'{s}'. Valid: {}",
                    valid_names()
                ))
            })
    }
}

fn valid_names() -> String {
    AlgorithmKind::ALL.map(|kind| kind.name()).join(", ")
}

// ==================== Options ====================

/// One options record covering every algorithm.
///
/// Each kind reads only the fields it consumes; the rest are ignored, so a
/// single record can drive heterogeneous comparisons. Unknown fields in a
/// serialized record are likewise ignored, and missing fields take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgorithmOptions {
    /// Tokenization applied by the token and vector kinds.
    pub preprocessing: PreprocessingMode,
    /// Window size for [`PreprocessingMode::NGram`]; at least 1.
    pub ngram_size: usize,
    /// Tversky weight on tokens only in the first input; finite, ≥ 0.
    pub alpha: f64,
    /// Tversky weight on tokens only in the second input; finite, ≥ 0.
    pub beta: f64,
    /// Jaro-Winkler prefix bonus weight in `[0.0, 0.25]`; `None` means 0.1.
    pub prefix_weight: Option<f64>,
    /// Jaro-Winkler prefix cap, at most 4; `None` means 4.
    pub prefix_length: Option<usize>,
    /// Input normalization applied to both strings before comparison;
    /// `None` compares verbatim.
    pub normalization: Option<NormalizationMode>,
}

impl Default for AlgorithmOptions {
    fn default() -> Self {
        Self {
            preprocessing: PreprocessingMode::Character,
            ngram_size: 2,
            alpha: 1.0,
            beta: 1.0,
            prefix_weight: None,
            prefix_length: None,
            normalization: None,
        }
    }
}

impl AlgorithmOptions {
    /// Options selecting n-gram preprocessing with the given window.
    #[must_use]
    pub fn ngram(ngram_size: usize) -> Self {
        Self {
            preprocessing: PreprocessingMode::NGram,
            ngram_size,
            ..Self::default()
        }
    }

    /// Options carrying Tversky difference weights.
    #[must_use]
    pub fn tversky(alpha: f64, beta: f64) -> Self {
        Self {
            alpha,
            beta,
            ..Self::default()
        }
    }
}

// ==================== Validation helpers ====================

fn validate_ngram_size(value: usize, param_name: &str) -> Result<(), SimilarityError> {
    if value < 1 {
        return Err(SimilarityError::InvalidParameter(format!(
            "{param_name} must be at least 1, got {value}"
        )));
    }
    Ok(())
}

fn validate_tversky_weight(value: f64, param_name: &str) -> Result<(), SimilarityError> {
    if !value.is_finite() {
        return Err(SimilarityError::InvalidParameter(format!(
            "{param_name} must be a finite number, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(SimilarityError::InvalidParameter(format!(
            "{param_name} must be non-negative, got {value}"
        )));
    }
    Ok(())
}

fn validate_prefix_weight(value: f64) -> Result<(), SimilarityError> {
    if !value.is_finite() {
        return Err(SimilarityError::InvalidParameter(format!(
            "prefix_weight must be a finite number, got {value}"
        )));
    }
    if !(0.0..=0.25).contains(&value) {
        return Err(SimilarityError::InvalidParameter(format!(
            "prefix_weight must be in range [0.0, 0.25], got {value} (values > 0.25 can produce scores > 1.0)"
        )));
    }
    Ok(())
}

fn validate_prefix_length(value: usize) -> Result<(), SimilarityError> {
    if value > DEFAULT_MAX_PREFIX_LENGTH {
        return Err(SimilarityError::InvalidParameter(format!(
            "prefix_length must be at most {DEFAULT_MAX_PREFIX_LENGTH}, got {value}"
        )));
    }
    Ok(())
}

fn length_mismatch(a: &str, b: &str) -> SimilarityError {
    SimilarityError::LengthMismatch {
        left: a.chars().count(),
        right: b.chars().count(),
    }
}

fn unsupported_distance(kind: AlgorithmKind) -> SimilarityError {
    SimilarityError::UnsupportedAlgorithm(format!(
        "'{kind}' has no integer distance form. Valid: levenshtein, damerau-levenshtein, hamming"
    ))
}

// ==================== Token spec ====================

/// A validated tokenization request: the preprocessing mode plus the
/// n-gram window it may need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenSpec {
    mode: PreprocessingMode,
    ngram_size: usize,
}

impl TokenSpec {
    /// The preprocessing mode this spec applies.
    #[must_use]
    pub fn mode(&self) -> PreprocessingMode {
        self.mode
    }

    /// The n-gram window; meaningful only in n-gram mode.
    #[must_use]
    pub fn ngram_size(&self) -> usize {
        self.ngram_size
    }

    fn sets(&self, a: &str, b: &str) -> (AHashSet<String>, AHashSet<String>) {
        (
            token_set(tokenize(a, self.mode, self.ngram_size).into_iter()),
            token_set(tokenize(b, self.mode, self.ngram_size).into_iter()),
        )
    }

    fn counts(&self, a: &str, b: &str) -> (AHashMap<String, usize>, AHashMap<String, usize>) {
        (
            token_counts(tokenize(a, self.mode, self.ngram_size).into_iter()),
            token_counts(tokenize(b, self.mode, self.ngram_size).into_iter()),
        )
    }
}

// ==================== Metric ====================

/// A fully validated, ready-to-evaluate metric.
///
/// Each variant carries exactly the parameters its family consumes: the
/// edit variants carry nothing, [`Metric::JaroWinkler`] its prefix
/// parameters, the token and vector variants a [`TokenSpec`], and
/// [`Metric::Tversky`] weights plus a [`TokenSpec`]. Build one through
/// [`Metric::from_options`]; evaluation never re-checks parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Metric {
    Levenshtein,
    DamerauLevenshtein,
    Hamming,
    Jaro,
    JaroWinkler { config: JaroWinklerConfig },
    Jaccard { tokens: TokenSpec },
    SorensenDice { tokens: TokenSpec },
    Overlap { tokens: TokenSpec },
    Cosine { tokens: TokenSpec },
    Tversky { weights: TverskyWeights, tokens: TokenSpec },
    Euclidean { tokens: TokenSpec },
    Manhattan { tokens: TokenSpec },
    Chebyshev { tokens: TokenSpec },
}

impl Metric {
    /// Validate `options` against `kind` and build the metric.
    ///
    /// The n-gram window is checked whenever n-gram preprocessing is
    /// requested, even by kinds that never tokenize; every other
    /// parameter is checked only by the kind that consumes it.
    pub fn from_options(
        kind: AlgorithmKind,
        options: &AlgorithmOptions,
    ) -> Result<Self, SimilarityError> {
        if options.preprocessing == PreprocessingMode::NGram {
            validate_ngram_size(options.ngram_size, "ngram_size")?;
        }
        let tokens = TokenSpec {
            mode: options.preprocessing,
            ngram_size: options.ngram_size,
        };

        let metric = match kind {
            AlgorithmKind::Levenshtein => Metric::Levenshtein,
            AlgorithmKind::DamerauLevenshtein => Metric::DamerauLevenshtein,
            AlgorithmKind::Hamming => Metric::Hamming,
            AlgorithmKind::Jaro => Metric::Jaro,
            AlgorithmKind::JaroWinkler => {
                let prefix_weight = options.prefix_weight.unwrap_or(DEFAULT_PREFIX_WEIGHT);
                validate_prefix_weight(prefix_weight)?;
                let max_prefix_length = options.prefix_length.unwrap_or(DEFAULT_MAX_PREFIX_LENGTH);
                validate_prefix_length(max_prefix_length)?;
                Metric::JaroWinkler {
                    config: JaroWinklerConfig {
                        prefix_weight,
                        max_prefix_length,
                    },
                }
            }
            AlgorithmKind::Jaccard => Metric::Jaccard { tokens },
            AlgorithmKind::SorensenDice => Metric::SorensenDice { tokens },
            AlgorithmKind::Overlap => Metric::Overlap { tokens },
            AlgorithmKind::Cosine => Metric::Cosine { tokens },
            AlgorithmKind::Tversky => {
                validate_tversky_weight(options.alpha, "alpha")?;
                validate_tversky_weight(options.beta, "beta")?;
                Metric::Tversky {
                    weights: TverskyWeights::new(options.alpha, options.beta),
                    tokens,
                }
            }
            AlgorithmKind::Euclidean => Metric::Euclidean { tokens },
            AlgorithmKind::Manhattan => Metric::Manhattan { tokens },
            AlgorithmKind::Chebyshev => Metric::Chebyshev { tokens },
        };
        Ok(metric)
    }

    /// The kind this metric evaluates.
    #[must_use]
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Metric::Levenshtein => AlgorithmKind::Levenshtein,
            Metric::DamerauLevenshtein => AlgorithmKind::DamerauLevenshtein,
            Metric::Hamming => AlgorithmKind::Hamming,
            Metric::Jaro => AlgorithmKind::Jaro,
            Metric::JaroWinkler { .. } => AlgorithmKind::JaroWinkler,
            Metric::Jaccard { .. } => AlgorithmKind::Jaccard,
            Metric::SorensenDice { .. } => AlgorithmKind::SorensenDice,
            Metric::Overlap { .. } => AlgorithmKind::Overlap,
            Metric::Cosine { .. } => AlgorithmKind::Cosine,
            Metric::Tversky { .. } => AlgorithmKind::Tversky,
            Metric::Euclidean { .. } => AlgorithmKind::Euclidean,
            Metric::Manhattan { .. } => AlgorithmKind::Manhattan,
            Metric::Chebyshev { .. } => AlgorithmKind::Chebyshev,
        }
    }

    /// Canonical name of the underlying kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Similarity in `[0.0, 1.0]`.
    ///
    /// Fails only for [`Metric::Hamming`] on inputs of unequal codepoint
    /// length.
    pub fn similarity(&self, a: &str, b: &str) -> Result<f64, SimilarityError> {
        match self {
            Metric::Levenshtein => Ok(levenshtein_similarity(a, b)),
            Metric::DamerauLevenshtein => Ok(osa_similarity(a, b)),
            Metric::Hamming => hamming_similarity(a, b).ok_or_else(|| length_mismatch(a, b)),
            Metric::Jaro => Ok(jaro_similarity(a, b)),
            Metric::JaroWinkler { config } => Ok(jaro_winkler_similarity_params(
                a,
                b,
                config.prefix_weight,
                config.max_prefix_length,
            )),
            Metric::Jaccard { tokens } => {
                let (sa, sb) = tokens.sets(a, b);
                Ok(jaccard_from_sets(&sa, &sb))
            }
            Metric::SorensenDice { tokens } => {
                let (sa, sb) = tokens.sets(a, b);
                Ok(dice_from_sets(&sa, &sb))
            }
            Metric::Overlap { tokens } => {
                let (sa, sb) = tokens.sets(a, b);
                Ok(overlap_from_sets(&sa, &sb))
            }
            Metric::Cosine { tokens } => {
                let (ca, cb) = tokens.counts(a, b);
                Ok(cosine_from_counts(&ca, &cb))
            }
            Metric::Tversky { weights, tokens } => {
                let (sa, sb) = tokens.sets(a, b);
                Ok(tversky_from_sets(&sa, &sb, *weights))
            }
            Metric::Euclidean { tokens } => {
                let (ca, cb) = tokens.counts(a, b);
                Ok(euclidean_similarity_from_counts(&ca, &cb))
            }
            Metric::Manhattan { tokens } => {
                let (ca, cb) = tokens.counts(a, b);
                Ok(manhattan_similarity_from_counts(&ca, &cb))
            }
            Metric::Chebyshev { tokens } => {
                let (ca, cb) = tokens.counts(a, b);
                Ok(chebyshev_similarity_from_counts(&ca, &cb))
            }
        }
    }

    /// Integer edit distance.
    ///
    /// Defined for the edit family only; any other kind fails with
    /// [`SimilarityError::UnsupportedAlgorithm`].
    pub fn distance(&self, a: &str, b: &str) -> Result<usize, SimilarityError> {
        match self {
            Metric::Levenshtein => Ok(levenshtein(a, b)),
            Metric::DamerauLevenshtein => Ok(osa_distance(a, b)),
            Metric::Hamming => hamming_distance(a, b).ok_or_else(|| length_mismatch(a, b)),
            other => Err(unsupported_distance(other.kind())),
        }
    }
}

// ==================== Engine entry points ====================

/// Integer edit distance between `a` and `b` under `kind`.
///
/// Only {levenshtein, damerau-levenshtein, hamming} define one; every
/// other kind fails with [`SimilarityError::UnsupportedAlgorithm`], and
/// Hamming fails with [`SimilarityError::LengthMismatch`] when the inputs
/// differ in codepoint length.
pub fn calculate_distance(
    a: &str,
    b: &str,
    kind: AlgorithmKind,
) -> Result<usize, SimilarityError> {
    match kind {
        AlgorithmKind::Levenshtein => Ok(levenshtein(a, b)),
        AlgorithmKind::DamerauLevenshtein => Ok(osa_distance(a, b)),
        AlgorithmKind::Hamming => hamming_distance(a, b).ok_or_else(|| length_mismatch(a, b)),
        other => Err(unsupported_distance(other)),
    }
}

/// Similarity in `[0.0, 1.0]` between `a` and `b` under `kind`.
///
/// Validates `options` against the kind, applies the optional input
/// normalization, and evaluates. Edit kinds are normalized by the longer
/// input (two empty strings are identical); Hamming normalizes by the
/// common length and still fails on a length mismatch.
pub fn calculate_similarity(
    a: &str,
    b: &str,
    kind: AlgorithmKind,
    options: &AlgorithmOptions,
) -> Result<f64, SimilarityError> {
    let metric = Metric::from_options(kind, options)?;
    let (a, b) = apply_normalization(a, b, options.normalization);
    metric.similarity(&a, &b)
}

/// [`calculate_distance`] over raw bytes, validating UTF-8 first.
pub fn calculate_distance_bytes(
    a: &[u8],
    b: &[u8],
    kind: AlgorithmKind,
) -> Result<usize, SimilarityError> {
    let (a, b) = decode_pair(a, b)?;
    calculate_distance(a, b, kind)
}

/// [`calculate_similarity`] over raw bytes, validating UTF-8 first.
pub fn calculate_similarity_bytes(
    a: &[u8],
    b: &[u8],
    kind: AlgorithmKind,
    options: &AlgorithmOptions,
) -> Result<f64, SimilarityError> {
    let (a, b) = decode_pair(a, b)?;
    calculate_similarity(a, b, kind, options)
}

/// Apply optional normalization to a pair of strings.
///
/// Uses `Cow` for zero-cost passthrough when no normalization is
/// requested.
fn apply_normalization<'a>(
    a: &'a str,
    b: &'a str,
    mode: Option<NormalizationMode>,
) -> (Cow<'a, str>, Cow<'a, str>) {
    match mode {
        None => (Cow::Borrowed(a), Cow::Borrowed(b)),
        Some(mode) => {
            let (a, b) = normalize_pair(a, b, mode);
            (Cow::Owned(a), Cow::Owned(b))
        }
    }
}

fn decode_pair<'a>(a: &'a [u8], b: &'a [u8]) -> Result<(&'a str, &'a str), SimilarityError> {
    let a = std::str::from_utf8(a).map_err(|e| {
        SimilarityError::EncodingError(format!("first input is not valid UTF-8: {e}"))
    })?;
    let b = std::str::from_utf8(b).map_err(|e| {
        SimilarityError::EncodingError(format!("second input is not valid UTF-8: {e}"))
    })?;
    Ok((a, b))
}
