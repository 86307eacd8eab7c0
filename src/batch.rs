//! Batch scoring and candidate ranking.
//!
//! Two entry points: [`similarity_batch`] scores pre-paired inputs and
//! reports a per-pair `Result`, so one incomparable pair (a Hamming
//! length mismatch) never poisons the rest; [`best_matches`] scores one
//! query against a candidate list and returns the survivors ranked by
//! descending score.
//!
//! Both switch to rayon work-stealing once the input count reaches
//! [`PARALLEL_THRESHOLD`] and stay sequential below it. Output order is
//! deterministic either way.

use rayon::prelude::*;
use serde::Serialize;

use crate::engine::Metric;
use crate::error::SimilarityError;

/// Minimum input size for parallel processing.
///
/// For inputs smaller than this threshold, sequential processing is
/// faster due to the overhead of thread pool coordination.
pub const PARALLEL_THRESHOLD: usize = 100;

/// A ranked candidate produced by [`best_matches`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMatch {
    /// Position of the candidate in the input slice.
    pub index: usize,
    /// The candidate text itself.
    pub text: String,
    /// Similarity against the query, in `[0.0, 1.0]`.
    pub score: f64,
}

/// Score every pair under `metric`, one `Result` per pair.
#[must_use]
pub fn similarity_batch<S>(metric: &Metric, pairs: &[(S, S)]) -> Vec<Result<f64, SimilarityError>>
where
    S: AsRef<str> + Sync,
{
    let score = |(a, b): &(S, S)| metric.similarity(a.as_ref(), b.as_ref());
    if pairs.len() >= PARALLEL_THRESHOLD {
        pairs.par_iter().map(score).collect()
    } else {
        pairs.iter().map(score).collect()
    }
}

/// Rank `candidates` against `query` by descending similarity.
///
/// Candidates scoring below `min_similarity` are dropped, as are
/// candidates the metric cannot compare (Hamming length mismatches).
/// `limit` caps the result count; `None` returns every survivor. Ties
/// keep their input order.
pub fn best_matches<S>(
    metric: &Metric,
    query: &str,
    candidates: &[S],
    limit: Option<usize>,
    min_similarity: f64,
) -> Result<Vec<ScoredMatch>, SimilarityError>
where
    S: AsRef<str> + Sync,
{
    if !min_similarity.is_finite() || !(0.0..=1.0).contains(&min_similarity) {
        return Err(SimilarityError::InvalidParameter(format!(
            "min_similarity must be between 0.0 and 1.0, got {min_similarity}"
        )));
    }

    let score_one = |(index, candidate): (usize, &S)| {
        let text = candidate.as_ref();
        match metric.similarity(query, text) {
            Ok(score) if score >= min_similarity => Some(ScoredMatch {
                index,
                text: text.to_string(),
                score,
            }),
            _ => None,
        }
    };

    let mut scored: Vec<ScoredMatch> = if candidates.len() >= PARALLEL_THRESHOLD {
        candidates
            .par_iter()
            .enumerate()
            .filter_map(score_one)
            .collect()
    } else {
        candidates.iter().enumerate().filter_map(score_one).collect()
    };

    scored.sort_by(|x, y| {
        y.score
            .partial_cmp(&x.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if let Some(limit) = limit {
        scored.truncate(limit);
    }
    Ok(scored)
}
