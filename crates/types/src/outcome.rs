//! Classification outcomes

use crate::CredentialRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable reason attached to every outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeMessage {
    #[serde(rename = "Invalid format")]
    InvalidFormat,
    #[serde(rename = "Invalid email format")]
    InvalidEmailFormat,
    #[serde(rename = "Password too short")]
    PasswordTooShort,
    #[serde(rename = "Account active")]
    AccountActive,
    #[serde(rename = "Invalid credentials")]
    InvalidCredentials,
    #[serde(rename = "Error checking account")]
    CheckFailed,
}

impl OutcomeMessage {
    /// The only message that marks a record as working
    #[must_use]
    pub fn is_working(self) -> bool {
        matches!(self, Self::AccountActive)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidFormat => "Invalid format",
            Self::InvalidEmailFormat => "Invalid email format",
            Self::PasswordTooShort => "Password too short",
            Self::AccountActive => "Account active",
            Self::InvalidCredentials => "Invalid credentials",
            Self::CheckFailed => "Error checking account",
        }
    }
}

impl fmt::Display for OutcomeMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating one record. Immutable once built.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationOutcome {
    identifier: String,
    secret: String,
    is_working: bool,
    message: OutcomeMessage,
}

impl VerificationOutcome {
    /// Build the outcome for `record`; `is_working` follows from `message`
    #[must_use]
    pub fn new(record: &CredentialRecord, message: OutcomeMessage) -> Self {
        Self {
            identifier: record.identifier.clone(),
            secret: record.secret.clone(),
            is_working: message.is_working(),
            message,
        }
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[must_use]
    pub fn is_working(&self) -> bool {
        self.is_working
    }

    #[must_use]
    pub fn message(&self) -> OutcomeMessage {
        self.message
    }

    /// Render back into `identifier:secret` form for export
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("{}:{}", self.identifier, self.secret)
    }
}

impl fmt::Debug for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationOutcome")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .field("is_working", &self.is_working)
            .field("message", &self.message)
            .finish()
    }
}
