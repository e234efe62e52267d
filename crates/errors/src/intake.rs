//! Input intake validation errors

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("input contains no credential lines")]
    Empty,

    #[error("line {line}: expected exactly one ':' separator")]
    Separator { line: usize },

    #[error("line {line}: identifier must contain '@'")]
    Identifier { line: usize },

    #[error("line {line}: secret is empty")]
    EmptySecret { line: usize },
}

impl IntakeError {
    /// 1-based line number of the offending line, if any
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::Separator { line } | Self::Identifier { line } | Self::EmptySecret { line } => {
                Some(*line)
            }
        }
    }
}

impl UserFacingError for IntakeError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        Some("Input must contain identifier:secret pairs, one per line.")
    }

    fn user_code(&self) -> Option<&'static str> {
        Some("intake.invalid_format")
    }
}
