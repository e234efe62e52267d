//! Report type definitions for batch runs

use crate::VerificationOutcome;
use serde::{Deserialize, Serialize};

/// How a batch run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchStatus {
    /// Every record was evaluated
    Complete,
    /// A cancellation request stopped the run before the next record
    Cancelled { processed: usize },
}

/// Working / not-working tallies over a set of outcomes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub working: usize,
    pub not_working: usize,
}

impl BatchSummary {
    #[must_use]
    pub fn from_outcomes(outcomes: &[VerificationOutcome]) -> Self {
        let working = outcomes.iter().filter(|o| o.is_working()).count();
        Self {
            total: outcomes.len(),
            working,
            not_working: outcomes.len() - working,
        }
    }
}

/// Batch report returned once a run stops
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchReport {
    /// Outcomes in input order
    pub outcomes: Vec<VerificationOutcome>,
    /// Tallies over `outcomes`
    pub summary: BatchSummary,
    /// Number of records the input yielded
    pub total: usize,
    pub status: BatchStatus,
    /// Wall-clock duration of the run
    pub duration_ms: u64,
}

impl BatchReport {
    #[must_use]
    pub fn new(
        outcomes: Vec<VerificationOutcome>,
        total: usize,
        status: BatchStatus,
        duration_ms: u64,
    ) -> Self {
        Self {
            summary: BatchSummary::from_outcomes(&outcomes),
            outcomes,
            total,
            status,
            duration_ms,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == BatchStatus::Complete
    }

    /// Outcomes classified as working, in input order
    pub fn working(&self) -> impl Iterator<Item = &VerificationOutcome> {
        self.outcomes.iter().filter(|o| o.is_working())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CredentialRecord, OutcomeMessage};

    #[test]
    fn summary_counts_working_and_not_working() {
        let a = CredentialRecord::new("a@gmail.com", "Password1");
        let b = CredentialRecord::new("bad", "");
        let outcomes = vec![
            VerificationOutcome::new(&a, OutcomeMessage::AccountActive),
            VerificationOutcome::new(&b, OutcomeMessage::InvalidFormat),
            VerificationOutcome::new(&a, OutcomeMessage::InvalidCredentials),
        ];
        let report = BatchReport::new(outcomes, 3, BatchStatus::Complete, 10);
        assert_eq!(
            report.summary,
            BatchSummary {
                total: 3,
                working: 1,
                not_working: 2
            }
        );
        assert!(report.is_complete());
        assert_eq!(report.working().count(), 1);
    }

    #[test]
    fn empty_summary_is_zero() {
        assert_eq!(BatchSummary::from_outcomes(&[]), BatchSummary::default());
    }

    #[test]
    fn status_serializes_tagged() {
        let json = serde_json::to_string(&BatchStatus::Cancelled { processed: 2 }).unwrap();
        assert_eq!(json, r#"{"status":"cancelled","processed":2}"#);
    }
}
