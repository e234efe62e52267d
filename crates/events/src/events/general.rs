use serde::{Deserialize, Serialize};

/// Events not tied to a batch: notices for the user and operation bracketing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeneralEvent {
    /// Something the user should know about; the operation continues
    Warning { message: String },

    OperationStarted { operation: String },

    OperationCompleted { operation: String, success: bool },
}

impl GeneralEvent {
    pub fn warning(message: impl Into<String>) -> Self {
        Self::Warning {
            message: message.into(),
        }
    }
}
