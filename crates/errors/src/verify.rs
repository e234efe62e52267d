//! Per-record evaluation faults

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

/// Failure raised while classifying a single record.
///
/// The batch loop never propagates these; each one is folded into an
/// "Error checking account" outcome for the record that raised it.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum VerifyError {
    #[error("random source unavailable: {message}")]
    RandomSource { message: String },

    #[error("invalid heuristic setting {field}: {message}")]
    InvalidHeuristic { field: String, message: String },

    #[error("evaluation failed: {message}")]
    EvaluationFailed { message: String },
}

impl UserFacingError for VerifyError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::RandomSource { .. })
    }

    fn user_code(&self) -> Option<&'static str> {
        Some(match self {
            Self::RandomSource { .. } => "verify.random_source",
            Self::InvalidHeuristic { .. } => "verify.invalid_heuristic",
            Self::EvaluationFailed { .. } => "verify.evaluation_failed",
        })
    }
}
