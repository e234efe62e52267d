use credsim_types::{BatchSummary, OutcomeMessage};
use serde::{Deserialize, Serialize};

use super::FailureContext;

/// Lifecycle of one simulated verification batch.
///
/// Events never carry secrets; an outcome is described by its identifier,
/// position and classification only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BatchEvent {
    /// Input parsed, evaluation about to begin
    Started { batch_id: String, total: usize },

    /// One record was classified (0-based `index` in input order)
    OutcomeRecorded {
        batch_id: String,
        index: usize,
        identifier: String,
        is_working: bool,
        message: OutcomeMessage,
    },

    /// Classification of a record failed and was folded into its outcome
    RecordFaulted {
        batch_id: String,
        index: usize,
        failure: FailureContext,
    },

    /// Every record has been reported
    Completed {
        batch_id: String,
        summary: BatchSummary,
        duration_ms: u64,
    },

    /// Run stopped early on request
    Cancelled {
        batch_id: String,
        processed: usize,
        total: usize,
    },
}

impl BatchEvent {
    #[must_use]
    pub fn batch_id(&self) -> &str {
        match self {
            Self::Started { batch_id, .. }
            | Self::OutcomeRecorded { batch_id, .. }
            | Self::RecordFaulted { batch_id, .. }
            | Self::Completed { batch_id, .. }
            | Self::Cancelled { batch_id, .. } => batch_id,
        }
    }
}
