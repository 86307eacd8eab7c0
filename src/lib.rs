//! textsim - Unicode-aware string distance and similarity
//!
//! One validated dispatch surface over three metric families, all
//! operating on Unicode codepoints rather than bytes:
//!
//! - **Edit distances**: Levenshtein (bit-parallel for short inputs),
//!   Damerau-Levenshtein (optimal string alignment) and Hamming.
//! - **Alignment similarity**: Jaro and Jaro-Winkler.
//! - **Token metrics**: Jaccard, Sørensen-Dice, overlap, Tversky and
//!   cosine, plus Euclidean/Manhattan/Chebyshev over frequency vectors,
//!   each under character, word, n-gram or whole-string tokenization.
//!
//! Every computation is a pure synchronous function with no caching and
//! no shared state; the batch layer adds rayon parallelism for large
//! workloads.
//!
//! # Examples
//!
//! ```
//! use textsim::{calculate_distance, calculate_similarity, AlgorithmKind, AlgorithmOptions};
//!
//! let d = calculate_distance("kitten", "sitting", AlgorithmKind::Levenshtein)?;
//! assert_eq!(d, 3);
//!
//! let options = AlgorithmOptions::default();
//! let sim = calculate_similarity("martha", "marhta", AlgorithmKind::JaroWinkler, &options)?;
//! assert!(sim > 0.95);
//! # Ok::<(), textsim::SimilarityError>(())
//! ```
//!
//! Ranking candidates against a query:
//!
//! ```
//! use textsim::{best_matches, AlgorithmKind, AlgorithmOptions, Metric};
//!
//! let metric = Metric::from_options(AlgorithmKind::JaroWinkler, &AlgorithmOptions::default())?;
//! let ranked = best_matches(&metric, "martha", &["marhta", "zebra"], Some(1), 0.5)?;
//! assert_eq!(ranked[0].text, "marhta");
//! # Ok::<(), textsim::SimilarityError>(())
//! ```

pub mod algorithms;
pub mod batch;
pub mod engine;
pub mod error;
pub mod tokenize;

pub use algorithms::{
    DamerauLevenshtein, EditDistance, FallibleEditDistance, Hamming, Jaro, JaroWinkler,
    JaroWinklerConfig, Levenshtein, NormalizationMode, Similarity, TverskyWeights,
};
pub use batch::{best_matches, similarity_batch, ScoredMatch, PARALLEL_THRESHOLD};
pub use engine::{
    calculate_distance, calculate_distance_bytes, calculate_similarity,
    calculate_similarity_bytes, AlgorithmKind, AlgorithmOptions, Metric,
};
pub use error::SimilarityError;
pub use tokenize::PreprocessingMode;
