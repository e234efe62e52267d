//! Parsed credential records

use serde::{Deserialize, Serialize};
use std::fmt;

/// One identifier/secret pair taken from a single input line.
///
/// Both fields are already trimmed. A record with an empty field is still a
/// record: it is reported as "Invalid format" rather than rejected.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub identifier: String,
    pub secret: String,
}

impl CredentialRecord {
    /// Build a record, trimming surrounding whitespace from both fields
    pub fn new(identifier: impl AsRef<str>, secret: impl AsRef<str>) -> Self {
        Self {
            identifier: identifier.as_ref().trim().to_string(),
            secret: secret.as_ref().trim().to_string(),
        }
    }

    /// Parse one raw line, splitting on the first ':'
    ///
    /// A line without ':' yields an empty secret.
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        match line.split_once(':') {
            Some((identifier, secret)) => Self::new(identifier, secret),
            None => Self::new(line, ""),
        }
    }

    /// True when both the identifier and the secret are non-empty
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.identifier.is_empty() && !self.secret.is_empty()
    }

    /// Render the record back into `identifier:secret` form
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("{}:{}", self.identifier, self.secret)
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}
