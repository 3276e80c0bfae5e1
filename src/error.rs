//! Error types for the analysis pipeline

use thiserror::Error;

/// Failures raised by the cough-analysis pipeline.
///
/// All variants are structural input problems. A quiet or non-cough recording
/// is a *result* (see `RiskLabel`), never an error: the pipeline either runs
/// to completion or aborts without a partial classification.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Empty clip or non-positive sample rate
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Emphasized signal shorter than one FFT frame
    #[error("clip too short for analysis: {len} samples, need at least {required}")]
    ClipTooShort { len: usize, required: usize },

    /// Surfaced from the external audio decoder (CLI layer), never raised by
    /// the core pipeline itself
    #[error("decode error: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_messages_carry_context() {
        let err = AnalysisError::ClipTooShort {
            len: 100,
            required: 512,
        };
        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains("512"));

        let err = AnalysisError::InvalidInput("clip has no samples".into());
        assert!(err.to_string().starts_with("invalid input"));

        let err = AnalysisError::Decode("bad RIFF header".into());
        assert!(err.to_string().contains("bad RIFF header"));
    }
}
