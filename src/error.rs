//! Error types shared by the dispatch layer and the fallible metrics.

use thiserror::Error;

/// Failure conditions reported by the engine.
///
/// Every fallible operation in the crate returns this type; nothing panics
/// on caller input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// Hamming comparison over inputs of unequal codepoint length.
    #[error("length mismatch: inputs must have equal codepoint length, got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Unknown algorithm name, or an operation the named algorithm cannot
    /// perform (such as an integer distance from a similarity-only metric).
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// A recognized option carried a value outside its documented domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Input bytes were not valid UTF-8.
    #[error("encoding error: {0}")]
    EncodingError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_offending_lengths() {
        let err = SimilarityError::LengthMismatch { left: 7, right: 5 };
        let text = err.to_string();
        assert!(text.contains('7') && text.contains('5'), "{text}");
    }

    #[test]
    fn test_display_prefixes_identify_the_kind() {
        assert!(SimilarityError::UnsupportedAlgorithm("soundex".into())
            .to_string()
            .starts_with("unsupported algorithm"));
        assert!(SimilarityError::InvalidParameter("alpha".into())
            .to_string()
            .starts_with("invalid parameter"));
        assert!(SimilarityError::EncodingError("bad byte".into())
            .to_string()
            .starts_with("encoding error"));
    }
}
