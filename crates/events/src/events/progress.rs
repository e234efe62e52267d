use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Item-count progress of a long-running operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProgressEvent {
    /// Progress tracking started
    Started {
        id: String,
        operation: String,
        total: u64,
    },

    /// One more item processed; `percent` is `floor(current * 100 / total)`
    Updated {
        id: String,
        current: u64,
        total: u64,
        percent: u8,
    },

    /// Progress reached its end
    Completed { id: String, duration: Duration },
}

impl ProgressEvent {
    pub fn started(id: impl Into<String>, operation: impl Into<String>, total: u64) -> Self {
        Self::Started {
            id: id.into(),
            operation: operation.into(),
            total,
        }
    }

    pub fn updated(id: impl Into<String>, current: u64, total: u64, percent: u8) -> Self {
        Self::Updated {
            id: id.into(),
            current,
            total,
            percent,
        }
    }

    pub fn completed(id: impl Into<String>, duration: Duration) -> Self {
        Self::Completed {
            id: id.into(),
            duration,
        }
    }

    /// Identifier of the tracked operation
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Started { id, .. } | Self::Updated { id, .. } | Self::Completed { id, .. } => id,
        }
    }
}
