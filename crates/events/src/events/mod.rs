use serde::{Deserialize, Serialize};

use crate::EventSource;
use credsim_errors::UserFacingError;

/// Structured failure information shared across domains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Short user-facing message.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Whether retrying the operation might succeed.
    pub retryable: bool,
}

impl FailureContext {
    #[must_use]
    pub fn new(
        code: Option<impl Into<String>>,
        message: impl Into<String>,
        hint: Option<impl Into<String>>,
        retryable: bool,
    ) -> Self {
        Self {
            code: code.map(Into::into),
            message: message.into(),
            hint: hint.map(Into::into),
            retryable,
        }
    }

    /// Build failure context from a `UserFacingError` implementation.
    #[must_use]
    pub fn from_error<E: UserFacingError + ?Sized>(error: &E) -> Self {
        Self::new(
            error.user_code(),
            error.user_message().into_owned(),
            error.user_hint(),
            error.is_retryable(),
        )
    }
}

pub mod batch;
pub mod general;
pub mod progress;

pub use batch::*;
pub use general::*;
pub use progress::*;

/// Top-level application event enum that aggregates all domain-specific events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event", rename_all = "snake_case")]
pub enum AppEvent {
    /// General utility events (warnings, errors, operations)
    General(GeneralEvent),

    /// Batch lifecycle and per-record outcomes
    Batch(BatchEvent),

    /// Item-count progress
    Progress(ProgressEvent),
}

impl AppEvent {
    /// Identify the source domain for this event (used for metadata/logging).
    #[must_use]
    pub fn event_source(&self) -> EventSource {
        match self {
            Self::General(_) => EventSource::GENERAL,
            Self::Batch(_) => EventSource::BATCH,
            Self::Progress(_) => EventSource::PROGRESS,
        }
    }

    /// Determine the appropriate tracing log level for this event
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        use tracing::Level;

        match self {
            Self::General(
                GeneralEvent::Warning { .. }
                | GeneralEvent::OperationCompleted { success: false, .. },
            )
            | Self::Batch(BatchEvent::RecordFaulted { .. } | BatchEvent::Cancelled { .. }) => {
                Level::WARN
            }

            Self::Batch(BatchEvent::OutcomeRecorded { .. })
            | Self::Progress(ProgressEvent::Updated { .. }) => Level::DEBUG,

            _ => Level::INFO,
        }
    }

    /// Get the log target for this event (for structured logging)
    #[must_use]
    pub fn log_target(&self) -> &'static str {
        match self {
            Self::General(_) => "credsim::events::general",
            Self::Batch(_) => "credsim::events::batch",
            Self::Progress(_) => "credsim::events::progress",
        }
    }

    /// Correlation id carried by the event itself, if any
    #[must_use]
    pub fn correlation_id(&self) -> Option<&str> {
        match self {
            Self::General(_) => None,
            Self::Batch(event) => Some(event.batch_id()),
            Self::Progress(event) => Some(event.id()),
        }
    }
}
